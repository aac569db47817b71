// config.rs - Engine configuration

use std::time::Duration;

use crate::error::{EngineError, Result};

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Grid shape and tick cadence, fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Minimum delay between the end of one tick and the start of the next.
    pub tick_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (25, 50));
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sized_config_is_invalid() {
        let config = EngineConfig::default().with_size(0, 10);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 10 })
        ));
    }
}
