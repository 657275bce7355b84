use teleplot_core::palette_color;

#[test]
fn palette_is_deterministic() {
    assert_eq!(palette_color(2, 5), palette_color(2, 5));
}

#[test]
fn palette_spreads_hues_for_current_count() {
    let colors: Vec<_> = (0..6).map(|i| palette_color(i, 6)).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in colors.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn palette_reassignment_changes_existing_colors() {
    // Adding a series re-spreads the wheel, so earlier indices shift.
    assert_ne!(palette_color(1, 2), palette_color(1, 3));
}

#[test]
fn zero_count_is_clamped() {
    // Must not panic or divide by zero.
    let _ = palette_color(0, 0);
}
