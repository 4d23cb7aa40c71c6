//! Client-local preference flags
//!
//! The site persists exactly two things on the client: the theme
//! choice and the cookie-consent acknowledgement. Nothing in the
//! registration core reads them; the trait exists so presentation
//! layers can swap the storage backend (browser storage, a test map)
//! without the core caring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key for the theme flag
pub const THEME_KEY: &str = "theme";
/// Storage key for the cookie-consent acknowledgement
pub const COOKIE_CONSENT_KEY: &str = "cookie-consent";

/// Light/dark theme flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Key-value store for client-local flags; no expiry, no server sync
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used in tests and headless contexts
#[derive(Clone, Debug, Default)]
pub struct InMemoryPreferences {
    values: HashMap<String, String>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_store() {
        let mut store = InMemoryPreferences::new();
        assert!(store.get(THEME_KEY).is_none());

        store.set(THEME_KEY, Theme::Dark.as_str());
        let theme = store.get(THEME_KEY).and_then(|v| Theme::parse(&v));
        assert_eq!(theme, Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_theme_string_is_rejected() {
        assert_eq!(Theme::parse("sepia"), None);
    }
}
