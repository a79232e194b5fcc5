//! TUI layout definitions.
//!
//! ```text
//! ┌────────────────────┬────────────────────┐
//! │      Groups        │     Requests       │
//! ├────────────────────┴────────────────────┤
//! │                                         │
//! │               Response                  │
//! │                                         │
//! ├─────────────────────────────────────────┤
//! │ Status Bar: keybindings, fetch state    │
//! └─────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout areas for the TUI.
#[derive(Debug, Clone)]
pub struct TuiLayout {
    pub groups: Rect,
    pub requests: Rect,
    pub response: Rect,
    pub status: Rect,
}

impl TuiLayout {
    /// Compute the layout for a given terminal area.
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35), // Lists
                Constraint::Min(5),         // Response (fill remaining)
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(vertical[0]);

        Self {
            groups: horizontal[0],
            requests: horizontal[1],
            response: vertical[1],
            status: vertical[2],
        }
    }
}
