//! # pypal-core - Core Domain Types
//!
//! Foundation crate for PythonPal. Provides domain types, the fixed
//! tutor/achievement/challenge catalogs, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//! - [`ChatMessage`] - A single transcript entry with role and timestamp
//! - [`ChatRole`] - Who authored a transcript entry (User, Assistant)
//! - [`Tutor`] - A static tutor persona (name, avatar glyph, description)
//! - [`Achievement`] - A badge with a one-way earned flag
//! - [`Challenge`] - A coding exercise with starter code and an inert solution
//!
//! ### Catalogs (`catalog`)
//! - [`TUTORS`] - The fixed, ordered tutor roster
//! - [`achievements()`] / [`challenges()`] - Seed the mutable boards
//! - [`PLACEHOLDER_REPLY`] - The canned assistant response
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all PythonPal crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    achievements, challenges, tutor_index_by_name, DEFAULT_STARTER_CODE, FIRST_CODE_ACHIEVEMENT,
    PLACEHOLDER_REPLY, TUTORS,
};
pub use error::{Error, Result};
pub use types::{Achievement, AppPhase, Challenge, ChatMessage, ChatRole, Tutor};
