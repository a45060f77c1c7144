//! Display labels shared by every category enum.
//!
//! Each label has a canonical English key (lower-case, kebab-case) and the
//! Chinese label printed on the betting grid. Parsing accepts either form.

use crate::error::ClassifyError;

/// Output language for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Parse `en` / `zh` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ClassifyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(ClassifyError::UnknownLabel {
                kind: "locale",
                label: s.to_string(),
            }),
        }
    }
}

/// A closed set of named category values.
pub trait Label: Copy + PartialEq + 'static {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Every value, in canonical order.
    fn all() -> &'static [Self];

    /// Canonical English key.
    fn name(self) -> &'static str;

    /// Chinese label.
    fn zh_name(self) -> &'static str;

    /// Label in the requested locale.
    fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name(),
            Locale::Zh => self.zh_name(),
        }
    }

    /// Look up a value by English key (ASCII case-insensitive) or Chinese label.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(label) || v.zh_name() == label)
    }

    /// Like [`Label::from_label`], but reports the miss.
    fn parse(label: &str) -> Result<Self, ClassifyError> {
        Self::from_label(label).ok_or_else(|| ClassifyError::UnknownLabel {
            kind: Self::KIND,
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parse() {
        assert_eq!(Locale::parse("EN").unwrap(), Locale::En);
        assert_eq!(Locale::parse(" zh ").unwrap(), Locale::Zh);
        assert!(Locale::parse("fr").is_err());
    }

    #[test]
    fn locale_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
