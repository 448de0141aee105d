//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use pypal_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PYPAL_DIR: &str = "pypal";

/// Path of the user-level config file
///
/// `<config_dir>/pypal/config.toml`, e.g. `~/.config/pypal/config.toml`
/// on Linux.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(PYPAL_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the user-level config file
///
/// A missing file is normal (defaults); a malformed file logs a warning and
/// yields defaults.
pub fn load_settings() -> Settings {
    load_from(&config_path())
}

/// Load settings from an explicit path (exposed for tests)
pub fn load_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "Invalid config at {} ({}), using defaults",
                    path.display(),
                    e
                );
                Settings::default()
            }
        },
        Err(e) => {
            warn!(
                "Could not read config at {} ({}), using defaults",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_from(&temp.path().join("nope.toml"));
        assert!(!settings.behavior.playground_on_start);
    }

    #[test]
    fn test_valid_config_is_loaded() {
        let temp = tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
            [behavior]
            playground_on_start = true

            [ui]
            default_tutor = "Professor Binary"

            [editor]
            starter_code = "x = 1"
            "#,
        );

        let settings = load_from(&path);
        assert!(settings.behavior.playground_on_start);
        assert_eq!(
            settings.ui.default_tutor.as_deref(),
            Some("Professor Binary")
        );
        assert_eq!(settings.editor.starter_code, "x = 1");
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = write_config(temp.path(), "this is not [valid toml");

        let settings = load_from(&path);
        assert!(!settings.behavior.playground_on_start);
        assert!(settings.ui.default_tutor.is_none());
    }

    #[test]
    fn test_config_path_shape() {
        let path = config_path();
        assert!(path.ends_with("pypal/config.toml"));
    }
}
