use serde::Deserialize;

use crate::error::{Error, Result};
use crate::parser::{PatternOptions, DEFAULT_BACKTRACK_LIMIT};
use crate::version::VersionTruncation;

/// Detector-wide settings.
///
/// Every field has a default, so a partial YAML document is enough:
///
/// ```
/// use device_detector::{DetectorConfig, VersionTruncation};
///
/// let config = DetectorConfig::from_yaml_str("version_truncation: minor").unwrap();
/// assert_eq!(config.version_truncation, VersionTruncation::Minor);
/// assert!(config.enable_cache);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Memoize full results per UA string.
    pub enable_cache: bool,
    /// Granularity of every reported OS and client version.
    pub version_truncation: VersionTruncation,
    /// Report only the bot name, dropping category, url and producer.
    pub discard_bot_information: bool,
    /// Never short-circuit on a bot match; always run OS/client/device parsing.
    pub skip_bot_detection: bool,
    /// Per-evaluation backtracking budget of every rule pattern.
    pub backtrack_limit: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            enable_cache: true,
            version_truncation: VersionTruncation::None,
            discard_bot_information: false,
            skip_bot_detection: false,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl DetectorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::Config)
    }

    pub(crate) fn pattern_options(&self) -> PatternOptions {
        PatternOptions {
            backtrack_limit: self.backtrack_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(DetectorConfig::from_yaml_str("{}").unwrap(), DetectorConfig::default());
    }

    #[test]
    fn full_document() {
        let config = DetectorConfig::from_yaml_str(
            "enable_cache: false\nversion_truncation: major\ndiscard_bot_information: true\nskip_bot_detection: true\nbacktrack_limit: 5000\n",
        )
        .unwrap();
        assert!(!config.enable_cache);
        assert_eq!(config.version_truncation, VersionTruncation::Major);
        assert!(config.discard_bot_information);
        assert!(config.skip_bot_detection);
        assert_eq!(config.pattern_options().backtrack_limit, 5000);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            DetectorConfig::from_yaml_str("enable_caching: true"),
            Err(Error::Config(_))
        ));
    }
}
