//! Configuration for the history manager.

use rewind_config::AppConfig;

/// Default number of retained states (past snapshots plus the present).
const DEFAULT_MAX_HISTORY: usize = 50;

/// Configuration for a `HistoryManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max total states kept, counting the present one. Always >= 1.
    pub max_history: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl HistoryConfig {
    /// Creates a sanitized config with the given bound.
    pub fn with_max_history(max_history: usize) -> Self {
        let mut config = Self { max_history };
        config.sanitize();
        config
    }

    /// Clamps values to valid ranges.
    ///
    /// A bound of zero would leave no room for the present snapshot, so it
    /// is raised to one.
    pub fn sanitize(&mut self) {
        self.max_history = self.max_history.max(1);
    }

    /// Max number of snapshots `past` may hold.
    pub fn past_capacity(&self) -> usize {
        self.max_history.saturating_sub(1)
    }
}

impl From<&AppConfig> for HistoryConfig {
    fn from(app: &AppConfig) -> Self {
        Self::with_max_history(app.max_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_history, 50);
        assert_eq!(config.past_capacity(), 49);
    }

    #[test]
    fn test_sanitize_raises_zero_bound() {
        let mut config = HistoryConfig { max_history: 0 };
        config.sanitize();
        assert_eq!(config.max_history, 1);
        assert_eq!(config.past_capacity(), 0);
    }

    #[test]
    fn test_with_max_history_keeps_valid_bound() {
        assert_eq!(HistoryConfig::with_max_history(3).max_history, 3);
        assert_eq!(HistoryConfig::with_max_history(0).max_history, 1);
    }

    #[test]
    fn test_from_app_config() {
        let app = AppConfig {
            max_history: 8,
            ..Default::default()
        };
        assert_eq!(HistoryConfig::from(&app).max_history, 8);
    }
}
