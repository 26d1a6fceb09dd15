//! Status line: last error, or the active view's description.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::Session;
use crate::tui::style::Styles;

pub fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let line = match session.last_error() {
        Some(err) => Line::from(Span::styled(err.to_string(), Styles::critical())),
        None => {
            let description = session
                .active()
                .map(|v| v.description())
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(description, Styles::dim()),
                Span::styled("  h", Styles::help_key()),
                Span::styled(" help", Styles::dim()),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
