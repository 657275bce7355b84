use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(thiserror::Error, Debug)]
pub enum ProcessError {
    #[error("failed to launch {script}: {source}")]
    Spawn {
        script: String,
        #[source]
        source: std::io::Error,
    },
    #[error("child stdout unavailable")]
    MissingStdout,
    #[error("child stderr unavailable")]
    MissingStderr,
}

/// Line-oriented output of the instrumented child process. `read_line` blocks
/// until a line arrives; `None` means the stream is currently closed (the
/// caller distinguishes "closed, child still running" from "closed and
/// exited" via `is_alive`).
pub trait OutputSource: Send {
    fn read_line(&mut self) -> Option<String>;
    fn is_alive(&mut self) -> bool;
}

/// Driver-side view of the child: liveness query and the terminate signal,
/// usable while the reader thread owns the output stream.
pub trait ProcessControl: Send {
    fn is_alive(&self) -> bool;
    fn terminate(&self);
}

#[derive(Clone)]
pub struct ProcessHandle {
    child: Arc<Mutex<Child>>,
}

impl ProcessControl for ProcessHandle {
    fn is_alive(&self) -> bool {
        match self.child.lock() {
            Ok(mut child) => matches!(child.try_wait(), Ok(None)),
            Err(_) => false,
        }
    }

    fn terminate(&self) {
        let Ok(mut child) = self.child.lock() else {
            return;
        };
        if matches!(child.try_wait(), Ok(None)) {
            log::info!("terminating child process");
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// The instrumented script as a merged, ordered line stream. stdout and
/// stderr are forwarded line by line into one channel so telemetry printed on
/// either stream reaches the parser.
pub struct ScriptProcess {
    handle: ProcessHandle,
    lines: Receiver<String>,
}

impl ScriptProcess {
    pub fn spawn(script: &str) -> Result<(Self, ProcessHandle), ProcessError> {
        let mut child = Command::new(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                script: script.to_string(),
                source,
            })?;
        let stdout = child.stdout.take().ok_or(ProcessError::MissingStdout)?;
        let stderr = child.stderr.take().ok_or(ProcessError::MissingStderr)?;

        let (tx, rx) = mpsc::channel();
        forward_lines(stdout, tx.clone());
        forward_lines(stderr, tx);

        let handle = ProcessHandle {
            child: Arc::new(Mutex::new(child)),
        };
        log::info!("launched {script}");
        Ok((
            Self {
                handle: handle.clone(),
                lines: rx,
            },
            handle,
        ))
    }
}

impl OutputSource for ScriptProcess {
    fn read_line(&mut self) -> Option<String> {
        self.lines.recv().ok()
    }

    fn is_alive(&mut self) -> bool {
        ProcessControl::is_alive(&self.handle)
    }
}

fn forward_lines<R: Read + Send + 'static>(stream: R, tx: Sender<String>) {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}
