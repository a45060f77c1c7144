//! Config file loading and flag resolution.
//!
//! The file is TOML with three optional keys:
//!
//! ```toml
//! year_zodiac = "dragon"   # or "龙"
//! year = 2024              # used when year_zodiac is absent
//! locale = "zh"            # "en" (default) or "zh"
//! ```
//!
//! Command-line flags override the file; within one source `year_zodiac`
//! wins over `year`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use marksix_base::{ClassifierConfig, Label, Locale, Zodiac};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "marksix.toml";

/// Contents of a config file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub year_zodiac: Option<String>,
    pub year: Option<i32>,
    pub locale: Option<Locale>,
}

/// Settings given on the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub year_zodiac: Option<String>,
    pub year: Option<i32>,
    pub locale: Option<String>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config file")
    }

    /// Load `path`, or [`DEFAULT_CONFIG_FILE`] if it exists. A missing
    /// default file yields the empty config; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !explicit && !path.exists() {
            tracing::trace!("no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

fn year_zodiac(label: Option<&str>, year: Option<i32>) -> Result<Option<Zodiac>> {
    if let Some(label) = label {
        return Ok(Some(Zodiac::parse(label)?));
    }
    Ok(year.map(Zodiac::from_ce_year))
}

/// Merge file settings and command-line overrides into a classifier config.
pub fn resolve(file: &FileConfig, overrides: &Overrides) -> Result<ClassifierConfig> {
    let defaults = ClassifierConfig::default();
    let from_flags = year_zodiac(overrides.year_zodiac.as_deref(), overrides.year)?;
    let from_file = year_zodiac(file.year_zodiac.as_deref(), file.year)?;
    let locale = match overrides.locale.as_deref() {
        Some(s) => Locale::parse(s)?,
        None => file.locale.unwrap_or(defaults.locale),
    };
    Ok(ClassifierConfig {
        year_zodiac: from_flags.or(from_file).unwrap_or(defaults.year_zodiac),
        locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let file = FileConfig::parse("").unwrap();
        assert_eq!(file, FileConfig::default());
        assert_eq!(
            resolve(&file, &Overrides::default()).unwrap(),
            ClassifierConfig::default()
        );
    }

    #[test]
    fn file_values_apply() {
        let file = FileConfig::parse("year = 2024\nlocale = \"zh\"\n").unwrap();
        let config = resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(config.year_zodiac, Zodiac::Dragon);
        assert_eq!(config.locale, Locale::Zh);
    }

    #[test]
    fn year_zodiac_beats_year() {
        let file = FileConfig::parse("year_zodiac = \"蛇\"\nyear = 2024\n").unwrap();
        let config = resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(config.year_zodiac, Zodiac::Snake);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig::parse("year_zodiac = \"snake\"\nlocale = \"zh\"\n").unwrap();
        let overrides = Overrides {
            year: Some(2020),
            locale: Some("en".into()),
            ..Overrides::default()
        };
        let config = resolve(&file, &overrides).unwrap();
        assert_eq!(config.year_zodiac, Zodiac::Rat);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(FileConfig::parse("colour = \"red\"\n").is_err());
    }

    #[test]
    fn bad_zodiac_label_rejected() {
        let file = FileConfig::parse("year_zodiac = \"cat\"\n").unwrap();
        let err = resolve(&file, &Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown zodiac label"), "{err}");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        assert!(FileConfig::load(Some(Path::new("/nonexistent/marksix.toml"))).is_err());
    }
}
