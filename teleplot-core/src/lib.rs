pub mod config;
pub mod parse;
pub mod render;
pub mod series;
pub mod session;

pub use config::{ConfigError, SessionConfig, DEFAULT_SCRIPT};
pub use parse::{LineParser, Sample};
pub use render::{palette_color, Axis, RenderSurface, Rgb, SeriesHandle};
pub use series::{AxisBounds, SeriesBuffer, SeriesStore};
pub use session::{SessionContext, SessionState};
