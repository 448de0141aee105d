//! The fixed content catalogs: tutors, achievements, and challenges
//!
//! Everything here is static product content. Mutable copies of the
//! achievement and challenge boards are seeded into application state at
//! startup; the tutor roster is borrowed directly.

use crate::types::{Achievement, Challenge, Tutor};

/// The fixed, ordered tutor roster. The first entry is the default selection.
pub const TUTORS: &[Tutor] = &[
    Tutor {
        name: "Py the Snake",
        avatar: "🐍",
        description: "A friendly python who loves to teach coding!",
    },
    Tutor {
        name: "Professor Binary",
        avatar: "🤖",
        description: "A wise robot who explains complex concepts simply",
    },
    Tutor {
        name: "Data the Dragon",
        avatar: "🐉",
        description: "A magical dragon who makes data structures fun!",
    },
];

/// Achievement unlocked the first time code is run
pub const FIRST_CODE_ACHIEVEMENT: u32 = 1;

/// The canned assistant reply, used until a real AI backend is connected
pub const PLACEHOLDER_REPLY: &str =
    "This is where the AI response would appear. Connect your preferred AI API to get real responses!";

/// Default playground buffer contents
pub const DEFAULT_STARTER_CODE: &str = "print(\"Hello, Python!\")";

/// Seed the achievement board (all badges unearned)
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            title: "First Code",
            description: "Wrote your first Python code",
            earned: false,
        },
        Achievement {
            id: 2,
            title: "Bug Hunter",
            description: "Fixed your first error",
            earned: false,
        },
        Achievement {
            id: 3,
            title: "Loop Master",
            description: "Completed a loop challenge",
            earned: false,
        },
    ]
}

/// Seed the challenge board
pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: 1,
            title: "Hello World",
            description: "Print \"Hello, World!\" to the console",
            starter_code: "# Write your code here\n",
            solution: "print(\"Hello, World!\")",
            completed: false,
        },
        Challenge {
            id: 2,
            title: "Simple Calculator",
            description: "Create a function that adds two numbers",
            starter_code: "def add_numbers(a, b):\n    # Your code here\n",
            solution: "def add_numbers(a, b):\n    return a + b",
            completed: false,
        },
    ]
}

/// Look up a tutor by name, case-insensitively
///
/// Returns the roster index so callers can store the lightweight selection
/// pointer rather than a clone.
pub fn tutor_index_by_name(name: &str) -> Option<usize> {
    TUTORS
        .iter()
        .position(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_nonempty_and_ordered() {
        assert_eq!(TUTORS.len(), 3);
        assert_eq!(TUTORS[0].name, "Py the Snake");
        assert_eq!(TUTORS[1].name, "Professor Binary");
        assert_eq!(TUTORS[2].name, "Data the Dragon");
    }

    #[test]
    fn test_achievements_seed_unearned() {
        let board = achievements();
        assert_eq!(board.len(), 3);
        assert!(board.iter().all(|a| !a.earned));
    }

    #[test]
    fn test_achievement_ids_unique() {
        let board = achievements();
        let mut ids: Vec<u32> = board.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), board.len());
    }

    #[test]
    fn test_first_code_achievement_exists() {
        assert!(achievements()
            .iter()
            .any(|a| a.id == FIRST_CODE_ACHIEVEMENT));
    }

    #[test]
    fn test_challenges_seed_incomplete() {
        let board = challenges();
        assert_eq!(board.len(), 2);
        assert!(board.iter().all(|c| !c.completed));
        assert!(board.iter().all(|c| !c.starter_code.is_empty()));
    }

    #[test]
    fn test_tutor_lookup_case_insensitive() {
        assert_eq!(tutor_index_by_name("py the snake"), Some(0));
        assert_eq!(tutor_index_by_name("PROFESSOR BINARY"), Some(1));
        assert_eq!(tutor_index_by_name("nobody"), None);
    }
}
