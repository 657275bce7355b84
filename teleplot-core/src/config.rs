use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SCRIPT: &str = "demos/telemetry.sh";

fn default_tick_interval_ms() -> u64 {
    40
}

fn default_warmup_ticks() -> u32 {
    250
}

fn default_steady_ticks() -> u32 {
    25
}

/// Session configuration: the script to launch, the render tick interval and
/// the two idle-timeout thresholds. `queue_capacity: None` keeps the sample
/// queue unbounded; `Some(n)` bounds it with a drop-oldest overflow policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub script_path: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_warmup_ticks")]
    pub warmup_ticks: u32,
    #[serde(default = "default_steady_ticks")]
    pub steady_ticks: u32,
    #[serde(default)]
    pub queue_capacity: Option<usize>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("timeout thresholds must be greater than zero")]
    ZeroTimeout,
}

impl SessionConfig {
    pub fn new(script_path: impl Into<String>) -> Self {
        Self {
            script_path: script_path.into(),
            tick_interval_ms: default_tick_interval_ms(),
            warmup_ticks: default_warmup_ticks(),
            steady_ticks: default_steady_ticks(),
            queue_capacity: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.warmup_ticks == 0 || self.steady_ticks == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SessionConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}
