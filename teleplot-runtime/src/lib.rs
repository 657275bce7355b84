pub mod driver;
pub mod process;
pub mod reader;
pub mod scheduler;
pub mod session;
pub mod surface;

pub use driver::TickDriver;
pub use process::{OutputSource, ProcessControl, ProcessError, ProcessHandle, ScriptProcess};
pub use reader::StreamReader;
pub use scheduler::{ThreadScheduler, TickScheduler};
pub use session::{run_headless, Session};
pub use surface::LogSurface;
