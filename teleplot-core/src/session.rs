/// Session liveness states. `Stop` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    Start,
    Run,
    Stop,
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Init => "INIT",
            SessionState::Start => "START",
            SessionState::Run => "RUN",
            SessionState::Stop => "STOP",
        }
    }
}

/// Explicit session state owned by the tick driver: current state, the
/// consecutive-empty-tick counter and the active timeout threshold.
///
/// The warm-up threshold tolerates slow process startup; once data flows the
/// tighter steady-state threshold takes over.
pub struct SessionContext {
    state: SessionState,
    idle_ticks: u32,
    warmup_ticks: u32,
    steady_ticks: u32,
    timeout_limit: u32,
}

impl SessionContext {
    pub fn new(warmup_ticks: u32, steady_ticks: u32) -> Self {
        Self {
            state: SessionState::Init,
            idle_ticks: 0,
            warmup_ticks,
            steady_ticks,
            timeout_limit: warmup_ticks,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    pub fn timeout_limit(&self) -> u32 {
        self.timeout_limit
    }

    /// Marks the child process as launched: INIT -> START with the generous
    /// warm-up threshold active.
    pub fn on_spawned(&mut self) {
        if self.state == SessionState::Init {
            self.state = SessionState::Start;
            self.timeout_limit = self.warmup_ticks;
            log::info!("session started, warm-up timeout {} ticks", self.warmup_ticks);
        }
    }

    /// Called when a sample is drained during a tick. The first sample of the
    /// session switches to RUN and arms the steady-state threshold; returns
    /// true on that transition so the caller can reveal the legend.
    pub fn note_sample_drained(&mut self) -> bool {
        match self.state {
            SessionState::Run | SessionState::Stop => false,
            _ => {
                self.state = SessionState::Run;
                self.timeout_limit = self.steady_ticks;
                log::info!(
                    "first sample drained, steady-state timeout {} ticks",
                    self.steady_ticks
                );
                true
            }
        }
    }

    /// Idle accounting at the end of a tick. Returns true when the session
    /// transitions to STOP: either the RUN idle counter reached the active
    /// threshold, or the child died while still warming up in START.
    pub fn finish_tick(&mut self, drained_any: bool, child_exited: bool) -> bool {
        if self.state == SessionState::Stop {
            return false;
        }
        if drained_any {
            self.idle_ticks = 0;
            return false;
        }
        self.idle_ticks += 1;
        let timed_out = self.state == SessionState::Run && self.idle_ticks >= self.timeout_limit;
        let died_warming_up = self.state == SessionState::Start && child_exited;
        if timed_out || died_warming_up {
            self.state = SessionState::Stop;
            log::info!(
                "session stopped after {} idle ticks ({})",
                self.idle_ticks,
                if timed_out { "timeout" } else { "child exited" }
            );
            return true;
        }
        false
    }
}
