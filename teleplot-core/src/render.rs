/// Handle for one registered plot series, issued by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Time,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Boundary to the external rendering surface. The tick driver is the only
/// caller; implementations must not assume any other thread touches them.
pub trait RenderSurface {
    fn create_series(&mut self, name: &str) -> SeriesHandle;
    fn set_series_color(&mut self, handle: SeriesHandle, color: Rgb);
    fn set_series_data(&mut self, handle: SeriesHandle, times: &[f64], values: &[f64]);
    fn set_axis_range(&mut self, axis: Axis, min: f64, max: f64);
    fn show_legend_entry(&mut self, handle: SeriesHandle, name: &str);
    fn set_title(&mut self, text: &str);
}

/// Perceptually spread color for series `index` out of `count`: hues are
/// distributed evenly over the wheel and reassigned whenever a new series
/// appears, so color spacing stays maximal for the current series count.
pub fn palette_color(index: usize, count: usize) -> Rgb {
    let count = count.max(1);
    let hue = (index % count) as f64 / count as f64;
    hsv_to_rgb(hue, 0.85, 0.95)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = (h.fract() + 1.0).fract() * 6.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
