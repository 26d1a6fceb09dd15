//! Active view table: headings, rows and the totals line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::MetricView;

/// Renders `view` into `area`; rows that do not fit are cut off at the
/// bottom, the totals line always stays visible.
pub fn render_table(frame: &mut Frame, area: Rect, view: &dyn MetricView) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Headings
        Constraint::Min(1),    // Rows
        Constraint::Length(1), // Totals
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(view.headings()).style(Styles::table_header()),
        chunks[0],
    );

    let visible = chunks[1].height as usize;
    let rows: Vec<Line> = if view.is_empty() {
        vec![Line::styled("  (no rows)", Styles::dim())]
    } else {
        view.row_content()
            .into_iter()
            .take(visible)
            .map(Line::from)
            .collect()
    };
    frame.render_widget(Paragraph::new(rows).style(Styles::default()), chunks[1]);

    frame.render_widget(
        Paragraph::new(view.total_row_content()).style(Styles::totals()),
        chunks[2],
    );
}
