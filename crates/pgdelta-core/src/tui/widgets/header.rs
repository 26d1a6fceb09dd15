//! Header widget showing the view tabs, display mode and capture times.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::{format_clock, format_duration};
use crate::session::Session;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Mode
        Constraint::Min(20),    // Tabs
        Constraint::Length(48), // Interval and times
    ])
    .split(area);

    let relative = session.want_relative();
    let (mode_str, mode_style) = if relative {
        (" RELATIVE ", Styles::header().patch(Styles::modified_item()))
    } else {
        (" ABSOLUTE ", Styles::header())
    };
    frame.render_widget(Paragraph::new(mode_str).style(mode_style), chunks[0]);

    let active = session.active_view();
    let tabs: Vec<Span> = session
        .views()
        .iter()
        .enumerate()
        .flat_map(|(i, view)| {
            let style = if *view == active {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", view.name());
            vec![Span::styled(num, Styles::tab_inactive()), Span::styled(name, style)]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[1],
    );

    let (first, last) = session
        .active()
        .map(|v| (v.first_collect_time(), v.last_collect_time()))
        .unwrap_or((None, None));
    let since = if relative {
        format!("since {}", format_clock(first))
    } else {
        "lifetime".to_string()
    };
    let times = format!(
        "every {} | {} | updated {}",
        format_duration(i64::try_from(session.interval().as_secs()).unwrap_or(i64::MAX)),
        since,
        format_clock(last)
    );
    frame.render_widget(Paragraph::new(times).style(Styles::header()), chunks[2]);
}
