use crate::driver::TickDriver;
use crate::process::{ProcessError, ScriptProcess};
use crate::reader::StreamReader;
use crate::scheduler::{ThreadScheduler, TickScheduler};
use crate::surface::LogSurface;
use channel::{QueueFactory, QueuePolicy, SampleQueue};
use std::sync::Arc;
use teleplot_core::{LineParser, Sample, SessionConfig, SessionContext, SessionState};

/// One live telemetry session: the spawned child, its reader thread and the
/// tick driver. Nothing outlives the session.
pub struct Session {
    pub driver: TickDriver,
    reader: Option<StreamReader>,
}

impl Session {
    /// Spawns the instrumented script and wires queue, parser, reader and
    /// driver together. Spawn failure is fatal; no session starts.
    pub fn launch(config: &SessionConfig) -> Result<Self, ProcessError> {
        let policy = match config.queue_capacity {
            None => QueuePolicy::Unbounded,
            Some(capacity) => QueuePolicy::DropOldest { capacity },
        };
        let queue: Arc<dyn SampleQueue<Sample>> = QueueFactory::create(policy);

        let (source, handle) = ScriptProcess::spawn(&config.script_path)?;
        let parser = LineParser::new(config.tick_interval_ms as f64);
        let reader = StreamReader::spawn(Box::new(source), parser, Arc::clone(&queue));

        let mut ctx = SessionContext::new(config.warmup_ticks, config.steady_ticks);
        ctx.on_spawned();

        let driver = TickDriver::new(ctx, queue, Box::new(handle), config.script_path.clone());
        Ok(Self {
            driver,
            reader: Some(reader),
        })
    }

    /// Terminates the child if needed and joins the reader thread.
    pub fn shutdown(&mut self) {
        self.driver.shutdown();
        if let Some(reader) = self.reader.take() {
            reader.join();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runs a session without a window: fixed-interval ticks against a logging
/// surface until the state machine reaches STOP.
pub fn run_headless(config: &SessionConfig) -> Result<(), ProcessError> {
    let mut session = Session::launch(config)?;
    let mut surface = LogSurface::new();
    ThreadScheduler.run_every(config.tick_interval(), || {
        session.driver.tick(&mut surface);
        session.driver.state() != SessionState::Stop
    });
    session.shutdown();
    Ok(())
}
