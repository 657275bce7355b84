use crate::process::OutputSource;
use channel::SampleQueue;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Backoff while the stream reports closed but the child still runs.
const EOF_POLL: Duration = Duration::from_millis(10);

/// The producer side of the pipeline: a dedicated thread pulling lines from
/// the child's output, feeding the parser and pushing committed samples onto
/// the queue. It never touches render state; all failures end the loop
/// cleanly.
pub struct StreamReader {
    handle: thread::JoinHandle<()>,
}

impl StreamReader {
    pub fn spawn(
        mut source: Box<dyn OutputSource>,
        mut parser: teleplot_core::LineParser,
        queue: Arc<dyn SampleQueue<teleplot_core::Sample>>,
    ) -> Self {
        let handle = thread::spawn(move || {
            loop {
                match source.read_line() {
                    Some(line) => {
                        if let Some(sample) = parser.push_line(&line) {
                            if queue.push(sample).is_err() {
                                log::warn!("sample queue gone, stopping reader");
                                break;
                            }
                        }
                    }
                    None => {
                        // Closed stream plus exited child is the end of the
                        // session's input; otherwise wait for more output.
                        if !source.is_alive() {
                            break;
                        }
                        thread::sleep(EOF_POLL);
                    }
                }
            }
            log::debug!(
                "stream reader finished after {} samples",
                parser.samples_committed()
            );
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn join(self) {
        let _ = self.handle.join();
    }
}
