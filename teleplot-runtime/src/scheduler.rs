use std::thread;
use std::time::{Duration, Instant};

/// Generic periodic-task scheduler: runs `tick` at a fixed wall-clock
/// interval until it returns false. The GUI event loop satisfies this role
/// with its own repaint clock; headless mode uses [`ThreadScheduler`].
pub trait TickScheduler {
    fn run_every<F: FnMut() -> bool>(&self, interval: Duration, tick: F);
}

/// Blocking scheduler with absolute deadlines so drift does not accumulate.
pub struct ThreadScheduler;

impl TickScheduler for ThreadScheduler {
    fn run_every<F: FnMut() -> bool>(&self, interval: Duration, mut tick: F) {
        let mut next = Instant::now() + interval;
        loop {
            if !tick() {
                break;
            }
            sleep_until(next);
            next += interval;
        }
    }
}

fn sleep_until(deadline: Instant) {
    loop {
        let now = Instant::now();
        let Some(remaining) = deadline.checked_duration_since(now) else {
            return;
        };
        // For very short remainders, spin-wait for better precision
        if remaining.as_nanos() < 500_000 {
            while Instant::now() < deadline {
                std::hint::spin_loop();
            }
            return;
        }
        thread::sleep(remaining);
    }
}
