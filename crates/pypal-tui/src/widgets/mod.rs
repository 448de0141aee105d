//! Custom widget components

mod achievement_board;
mod challenge_board;
mod chat_panel;
mod header;
mod playground;
mod settings_panel;
mod status_bar;
mod tutor_selector;

pub use achievement_board::AchievementBoard;
pub use challenge_board::ChallengeBoard;
pub use chat_panel::ChatPanel;
pub use header::Header;
pub use playground::Playground;
pub use settings_panel::SettingsPanel;
pub use status_bar::{StatusBar, StatusBarCompact};
pub use tutor_selector::TutorSelector;
