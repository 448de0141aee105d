//! pypal-tui - Terminal UI for PythonPal
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! screen layout, widget rendering, and the main loop driving the TEA core
//! from pypal-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
