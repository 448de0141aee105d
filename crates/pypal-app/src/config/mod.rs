//! Configuration loading for PythonPal
//!
//! Startup configuration lives at `<config_dir>/pypal/config.toml`. All
//! fields are optional; a missing or malformed file falls back to defaults
//! with a logged warning, never a crash.

mod settings;
mod types;

pub use settings::{config_path, load_from, load_settings};
pub use types::{BehaviorSettings, EditorSettings, Settings, UiSettings};
