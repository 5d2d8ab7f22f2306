//! Runtime settings resolution.
//!
//! Precedence is flag, then environment variable (both handled by clap),
//! then the defaults below. Blank values count as unset.

use flavorfare_core::default_log_level;
use std::path::PathBuf;

/// Database file name used when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "flavorfare.sqlite3";

/// Effective settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Fills unset values with defaults.
    pub fn resolve(
        db: Option<PathBuf>,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        let db_path = db
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = log_level
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = log_dir.filter(|path| !path.as_os_str().is_empty());

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, DEFAULT_DB_FILE_NAME};
    use flavorfare_core::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = CliConfig::resolve(None, None, None);

        assert_eq!(
            config.db_path,
            std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
        );
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = CliConfig::resolve(
            Some(PathBuf::new()),
            Some("  ".to_string()),
            Some(PathBuf::new()),
        );

        assert_eq!(
            config.db_path,
            std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
        );
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_win() {
        let config = CliConfig::resolve(
            Some(PathBuf::from("/srv/ff.db")),
            Some(" warn ".to_string()),
            Some(PathBuf::from("/var/log/ff")),
        );

        assert_eq!(config.db_path, PathBuf::from("/srv/ff.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/ff")));
    }
}
