//! Configuration types for PythonPal
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections with serde defaults

use pypal_core::catalog::DEFAULT_STARTER_CODE;
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub editor: EditorSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Open the code playground at startup
    #[serde(default)]
    pub playground_on_start: bool,
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tutor selected at startup (case-insensitive name match).
    /// Unknown names fall back to the first tutor with a logged warning.
    #[serde(default)]
    pub default_tutor: Option<String>,
}

/// Playground settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Initial playground buffer contents
    #[serde(default = "default_starter_code")]
    pub starter_code: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            starter_code: default_starter_code(),
        }
    }
}

fn default_starter_code() -> String {
    DEFAULT_STARTER_CODE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.behavior.playground_on_start);
        assert!(settings.ui.default_tutor.is_none());
        assert_eq!(settings.editor.starter_code, DEFAULT_STARTER_CODE);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(!settings.behavior.playground_on_start);
        assert_eq!(settings.editor.starter_code, DEFAULT_STARTER_CODE);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [behavior]
            playground_on_start = true
            "#,
        )
        .unwrap();
        assert!(settings.behavior.playground_on_start);
        assert!(settings.ui.default_tutor.is_none());
        assert_eq!(settings.editor.starter_code, DEFAULT_STARTER_CODE);
    }
}
