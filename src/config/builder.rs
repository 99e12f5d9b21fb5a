//! Builder configuration (mdpost.yml)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PostError, Result};

/// Title used when the front-matter has none
pub const DEFAULT_TITLE: &str = "TILT";

/// Summary used when the front-matter has none
pub const DEFAULT_SUMMARY: &str = "TILT";

/// Main builder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub defaults: PostDefaults,
    pub url: UrlConfig,
    pub markdown: MarkdownConfig,
}

impl BuilderConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PostError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // An empty file means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: BuilderConfig =
            serde_yaml::from_str(&content).map_err(|e| PostError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!("Loaded builder config from {:?}", path);
        Ok(config)
    }
}

/// Values substituted for front-matter fields that are absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDefaults {
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
            // 1970-01-01
            date: NaiveDate::default(),
            tags: Vec::new(),
        }
    }
}

/// How the source file extension is removed when deriving the post URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlStyle {
    /// Remove the first occurrence of the extension anywhere in the file name
    #[default]
    FirstOccurrence,
    /// Remove the extension only when the file name ends with it
    StripSuffix,
}

/// URL derivation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    pub style: UrlStyle,
}

/// Optional Markdown extensions, all off for plain CommonMark output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.defaults.title, "TILT");
        assert_eq!(config.defaults.summary, "TILT");
        assert_eq!(
            config.defaults.date,
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
        assert!(config.defaults.tags.is_empty());
        assert_eq!(config.url.style, UrlStyle::FirstOccurrence);
        assert!(!config.markdown.tables);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
defaults:
  title: Untitled
  date: 2000-01-01
url:
  style: strip_suffix
markdown:
  tables: true
"#;
        let config: BuilderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.defaults.title, "Untitled");
        assert_eq!(config.defaults.summary, "TILT");
        assert_eq!(
            config.defaults.date,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(config.url.style, UrlStyle::StripSuffix);
        assert!(config.markdown.tables);
        assert!(!config.markdown.footnotes);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  tags: [misc]").unwrap();

        let config = BuilderConfig::load(file.path()).unwrap();
        assert_eq!(config.defaults.tags, vec!["misc"]);
        assert_eq!(config.defaults.title, "TILT");
    }

    #[test]
    fn test_load_empty_config_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = BuilderConfig::load(file.path()).unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_load_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuilderConfig::load(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, PostError::Config { .. }));
    }
}
