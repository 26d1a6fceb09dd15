//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::session::Session;

use super::widgets::{render_header, render_help, render_status, render_table};

/// Main render function.
pub fn render(frame: &mut Frame, session: &Session) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Status
    ])
    .split(area);

    render_header(frame, chunks[0], session);
    if let Some(view) = session.active() {
        render_table(frame, chunks[1], view);
    }
    render_status(frame, chunks[2], session);

    if session.show_help() {
        render_help(frame, area);
    }
}
