//! Status-bar tip lines
//!
//! One tip is picked at random at startup and displayed for the whole
//! session.

use rand::Rng;

/// Kid-friendly Python tips cycled through the status bar
const TIPS: &[&str] = &[
    "Tip: print() shows your message on the screen!",
    "Tip: lists keep your things in order, like a backpack.",
    "Tip: a loop repeats so you don't have to!",
    "Tip: computers count from 0. Weird, right?",
    "Tip: errors are clues, not failures. Read them!",
    "Tip: give your variables names that say what they hold.",
    "Tip: indentation tells Python what belongs together.",
    "Tip: try changing one thing and run it again.",
    "Tip: functions are spells you can cast again and again.",
    "Tip: ask your tutor anything. There are no silly questions!",
];

/// Pick a random tip for this session
pub fn pick() -> &'static str {
    let index = rand::thread_rng().gen_range(0..TIPS.len());
    TIPS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_returns_known_tip() {
        for _ in 0..20 {
            assert!(TIPS.contains(&pick()));
        }
    }

    #[test]
    fn test_pick_varies() {
        // With 10 tips and 40 draws, we should see more than one distinct tip
        let mut seen = std::collections::HashSet::new();
        for _ in 0..40 {
            seen.insert(pick());
        }
        assert!(seen.len() > 1, "expected varied tips, saw {}", seen.len());
    }
}
