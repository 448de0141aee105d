//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width for the full status bar display
pub const MIN_FULL_STATUS_WIDTH: u16 = 70;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub tutors: Rect,
    pub achievements: Rect,
    pub challenges: Rect,
    pub chat: Rect,
    /// Present only while the playground is open
    pub playground: Option<Rect>,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, playground_open: bool) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(5), // Tutor selector
        Constraint::Length(6), // Boards (achievements | challenges)
        Constraint::Min(8),    // Chat (| playground)
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    let boards =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[2]);

    let (chat, playground) = if playground_open {
        let main = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        (main[0], Some(main[1]))
    } else {
        (rows[3], None)
    };

    ScreenAreas {
        header: rows[0],
        tutors: rows[1],
        achievements: boards[0],
        challenges: boards[1],
        chat,
        playground,
        status: rows[4],
    }
}

/// Check if we should use the compact status bar
pub fn use_compact_status(area: Rect) -> bool {
    area.width < MIN_FULL_STATUS_WIDTH
}
