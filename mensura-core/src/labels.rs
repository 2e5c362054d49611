//! Naming attributes attached to units and scales.
//!
//! A [`Labels`] record carries the preferred name and symbol plus any
//! alternatives, optionally tagged with an ISO 639 language code. The
//! conversion machinery never reads these; they exist for presentation
//! and for callers that look units up by what they are called.

use serde::{Deserialize, Serialize};

/// A name together with the language it belongs to (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    /// ISO 639 language code; `None` for language-neutral names.
    pub language: Option<String>,
}

/// Names and symbols for a unit or scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    name: Option<String>,
    alternative_names: Vec<LocalizedName>,
    symbol: Option<String>,
    alternative_symbols: Vec<String>,
}

impl Labels {
    /// An empty record (no name, no symbol).
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with a preferred name and symbol.
    pub fn named(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Labels {
            name: Some(name.into()),
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_alternative_name(
        mut self,
        name: impl Into<String>,
        language: Option<&str>,
    ) -> Self {
        self.alternative_names.push(LocalizedName {
            name: name.into(),
            language: language.map(str::to_string),
        });
        self
    }

    pub fn with_alternative_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.alternative_symbols.push(symbol.into());
        self
    }

    /// The preferred name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The preferred name for the given language, falling back to the
    /// language-neutral preferred name.
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.alternative_names
            .iter()
            .find(|n| n.language.as_deref() == Some(language))
            .map(|n| n.name.as_str())
            .or(self.name())
    }

    pub fn alternative_names(&self) -> &[LocalizedName] {
        &self.alternative_names
    }

    /// The languages for which alternative names are known.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self
            .alternative_names
            .iter()
            .filter_map(|n| n.language.as_deref())
            .collect();
        languages.dedup();
        languages
    }

    /// The preferred symbol, if set.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn alternative_symbols(&self) -> &[String] {
        &self.alternative_symbols
    }

    /// True when no name or symbol of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.alternative_names.is_empty()
            && self.alternative_symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Labels::new().is_empty());
        assert!(!Labels::named("metre", "m").is_empty());
    }

    #[test]
    fn test_named() {
        let labels = Labels::named("metre", "m");
        assert_eq!(labels.name(), Some("metre"));
        assert_eq!(labels.symbol(), Some("m"));

        let built = Labels::new().with_name("second").with_symbol("s");
        assert_eq!(built, Labels::named("second", "s"));
    }

    #[test]
    fn test_name_in_language() {
        let labels = Labels::named("metre", "m")
            .with_alternative_name("meter", Some("en-US"))
            .with_alternative_symbol("mtr");

        assert_eq!(labels.name_in("en-US"), Some("meter"));
        assert_eq!(labels.name_in("nl"), Some("metre"));
        assert_eq!(labels.languages(), vec!["en-US"]);
        assert_eq!(labels.alternative_symbols(), &["mtr".to_string()]);
    }
}
