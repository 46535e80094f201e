//! Design Tokens
//!
//! Named, themeable values (spacing, colour, opacity). Styles refer to
//! tokens by name and a [`TokenResolver`] supplies the values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SIZE_2: &str = "--size-2";
pub const SIZE_3: &str = "--size-3";
/// Height of the gap previewing a drop above a row
pub const SIZE_DROP_GAP: &str = "--size-drop-gap";
pub const COLOR_BORDER: &str = "--color-border";
pub const TRANSLUCENT: &str = "--translucent";

const DEFAULT_TOKENS: &[(&str, &str)] = &[
    (SIZE_2, "0.5rem"),
    (SIZE_3, "1rem"),
    (SIZE_DROP_GAP, "4rem"),
    (COLOR_BORDER, "#d0d7de"),
    (TRANSLUCENT, "0.5"),
];

/// Lookup capability for design tokens
pub trait TokenResolver {
    fn resolve(&self, name: &str) -> Option<&str>;
}

/// Token table owned by the host application
///
/// Deserialising goes through the same overlay and name checks as
/// [`Theme::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Theme {
    tokens: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Theme {
    /// Empty theme, nothing resolves
    pub fn empty() -> Self {
        Self { tokens: BTreeMap::new() }
    }

    /// Parse a JSON object of `token -> value` laid over the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::overlay(overrides)
    }

    fn overlay(overrides: BTreeMap<String, String>) -> Result<Self> {
        let mut theme = Self::default();
        for (name, value) in overrides {
            theme.set(name, value)?;
        }
        Ok(theme)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !name.starts_with("--") || name.len() == 2 {
            return Err(Error::InvalidTokenName(name));
        }
        self.tokens.insert(name, value.into());
        Ok(())
    }

    /// Global scope block declaring every token as a custom property
    pub fn to_root_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.tokens {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

impl TryFrom<BTreeMap<String, String>> for Theme {
    type Error = Error;

    fn try_from(overrides: BTreeMap<String, String>) -> Result<Self> {
        Self::overlay(overrides)
    }
}

impl From<Theme> for BTreeMap<String, String> {
    fn from(theme: Theme) -> Self {
        theme.tokens
    }
}

impl TokenResolver for Theme {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_task_row_tokens() {
        let theme = Theme::default();
        for token in [SIZE_2, SIZE_3, SIZE_DROP_GAP, COLOR_BORDER, TRANSLUCENT] {
            assert!(theme.resolve(token).is_some(), "{} missing", token);
        }
        assert_eq!(theme.resolve(SIZE_DROP_GAP), Some("4rem"));
        assert_eq!(theme.resolve("--nope"), None);
    }

    #[test]
    fn test_from_json_overlays_defaults() {
        let theme = Theme::from_json(r#"{"--translucent": "0.3", "--accent": "tomato"}"#).unwrap();
        assert_eq!(theme.resolve(TRANSLUCENT), Some("0.3"));
        assert_eq!(theme.resolve("--accent"), Some("tomato"));
        assert_eq!(theme.resolve(SIZE_3), Some("1rem"));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(Theme::from_json("[1, 2]"), Err(Error::InvalidTheme(_))));
        assert!(matches!(
            Theme::from_json(r#"{"size": "1px"}"#),
            Err(Error::InvalidTokenName(name)) if name == "size"
        ));
    }

    #[test]
    fn test_deserialize_checks_names_and_keeps_defaults() {
        assert!(serde_json::from_str::<Theme>(r#"{"size": "1px"}"#).is_err());

        let theme: Theme = serde_json::from_str(r#"{"--size-2": "3px"}"#).unwrap();
        assert_eq!(theme.resolve(SIZE_2), Some("3px"));
        assert_eq!(theme.resolve(TRANSLUCENT), Some("0.5"));

        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(serde_json::from_str::<Theme>(&json).unwrap(), theme);
    }

    #[test]
    fn test_root_css() {
        let mut theme = Theme::empty();
        theme.set("--b", "2px").unwrap();
        theme.set("--a", "red").unwrap();
        assert_eq!(theme.to_root_css(), ":root {\n  --a: red;\n  --b: 2px;\n}\n");
    }
}
