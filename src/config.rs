//! Runtime settings for the binary.
//!
//! Everything comes from the command line; the game rules themselves are
//! fixed and not configurable.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_FRAME_RATE: u32 = 30;
pub const MAX_FRAME_RATE: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Frame rate must be between 1 and {max} (got {got})")]
    InvalidFrameRate { got: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Frames per second of the render loop
    pub frame_rate: u32,
    /// Fixed seed for secret draws; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
    /// 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
            log_file: None,
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::InvalidFrameRate {
                got: self.frame_rate,
                max: MAX_FRAME_RATE,
            });
        }
        Ok(())
    }

    /// Target time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
