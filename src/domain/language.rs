use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Character layout selected for the digit row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[strum(serialize = "EN")]
    #[serde(rename = "EN")]
    En,
    #[strum(serialize = "LT")]
    #[serde(rename = "LT")]
    Lt,
}

impl Language {
    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Lt,
            Language::Lt => Language::En,
        }
    }

    /// Value written to the language store
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Lt => "LT",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        assert_eq!(Language::En.toggled(), Language::Lt);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Language::Lt.to_string(), "LT");
        assert_eq!(Language::from_str("EN").ok(), Some(Language::En));
        assert_eq!(Language::from_str("lt").ok(), Some(Language::Lt));
        assert!(Language::from_str("DE").is_err());
    }
}
