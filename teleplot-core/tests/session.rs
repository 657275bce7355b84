use teleplot_core::{SessionContext, SessionState};

#[test]
fn starts_in_init_and_spawning_enters_start() {
    let mut ctx = SessionContext::new(250, 25);
    assert_eq!(ctx.state(), SessionState::Init);
    assert_eq!(ctx.timeout_limit(), 250);
    ctx.on_spawned();
    assert_eq!(ctx.state(), SessionState::Start);
}

#[test]
fn stays_in_start_until_first_drained_sample() {
    let mut ctx = SessionContext::new(250, 25);
    ctx.on_spawned();
    for _ in 0..100 {
        assert!(!ctx.finish_tick(false, false));
        assert_eq!(ctx.state(), SessionState::Start);
    }
    assert!(ctx.note_sample_drained());
    assert_eq!(ctx.state(), SessionState::Run);
    assert_eq!(ctx.timeout_limit(), 25);
}

#[test]
fn run_stops_when_idle_count_reaches_steady_threshold() {
    let mut ctx = SessionContext::new(250, 3);
    ctx.on_spawned();
    ctx.note_sample_drained();
    ctx.finish_tick(true, false);

    assert!(!ctx.finish_tick(false, false));
    assert!(!ctx.finish_tick(false, false));
    assert!(ctx.finish_tick(false, false));
    assert_eq!(ctx.state(), SessionState::Stop);
    assert_eq!(ctx.idle_ticks(), 3);
}

#[test]
fn drained_tick_resets_idle_counter() {
    let mut ctx = SessionContext::new(250, 3);
    ctx.on_spawned();
    ctx.note_sample_drained();
    ctx.finish_tick(false, false);
    ctx.finish_tick(false, false);
    assert_eq!(ctx.idle_ticks(), 2);
    ctx.finish_tick(true, false);
    assert_eq!(ctx.idle_ticks(), 0);
    assert_eq!(ctx.state(), SessionState::Run);
}

#[test]
fn stop_is_terminal() {
    let mut ctx = SessionContext::new(250, 1);
    ctx.on_spawned();
    ctx.note_sample_drained();
    assert!(ctx.finish_tick(false, false));
    assert_eq!(ctx.state(), SessionState::Stop);

    // Stale samples drained after termination must not revive the session.
    assert!(!ctx.note_sample_drained());
    assert!(!ctx.finish_tick(true, false));
    assert!(!ctx.finish_tick(false, false));
    assert_eq!(ctx.state(), SessionState::Stop);
}

#[test]
fn warmup_outlasts_idle_ticks_while_child_lives() {
    let mut ctx = SessionContext::new(5, 2);
    ctx.on_spawned();
    for _ in 0..50 {
        assert!(!ctx.finish_tick(false, false));
    }
    // START never times out on idle ticks alone.
    assert_eq!(ctx.state(), SessionState::Start);
}

#[test]
fn child_exit_during_start_stops_immediately() {
    let mut ctx = SessionContext::new(250, 25);
    ctx.on_spawned();
    assert!(!ctx.finish_tick(false, false));
    assert!(ctx.finish_tick(false, true));
    assert_eq!(ctx.state(), SessionState::Stop);
}

#[test]
fn child_exit_during_run_still_waits_for_idle_threshold() {
    let mut ctx = SessionContext::new(250, 3);
    ctx.on_spawned();
    ctx.note_sample_drained();
    assert!(!ctx.finish_tick(false, true));
    assert!(!ctx.finish_tick(false, true));
    assert!(ctx.finish_tick(false, true));
    assert_eq!(ctx.state(), SessionState::Stop);
}

#[test]
fn state_labels_match_titles() {
    assert_eq!(SessionState::Init.label(), "INIT");
    assert_eq!(SessionState::Start.label(), "START");
    assert_eq!(SessionState::Run.label(), "RUN");
    assert_eq!(SessionState::Stop.label(), "STOP");
}
