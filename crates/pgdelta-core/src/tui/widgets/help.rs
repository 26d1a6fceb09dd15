//! Help popup listing key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

const BINDINGS: &[(&str, &str)] = &[
    ("q Esc ^C", "quit"),
    ("Tab → >", "next view"),
    ("S-Tab ← <", "previous view"),
    ("+ =", "increase poll interval"),
    ("-", "decrease poll interval"),
    ("t", "toggle relative / absolute"),
    ("z", "reset baseline to now"),
    ("h ?", "toggle this help"),
];

/// Renders the help popup centered on screen.
pub fn render_help(frame: &mut Frame, area: Rect) {
    // 60% width clamped to 40..60 columns, never wider than the screen.
    let popup_width = (u32::from(area.width) * 60 / 100).clamp(40, 60) as u16;
    let popup_width = popup_width.min(area.width);
    let popup_height = (BINDINGS.len() as u16 + 6).min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", keys), Styles::help_key()),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Relative mode shows counters since the baseline;",
        Styles::dim(),
    )));
    lines.push(Line::from(Span::styled(
        "a server-side stats reset recaptures it.",
        Styles::dim(),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_help(f, f.area())).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn fits_narrow_terminal() {
        let terminal = draw(30, 20);
        assert!(screen_text(&terminal).contains("Help"));
    }

    #[test]
    fn fits_tiny_terminal() {
        draw(5, 2);
    }

    #[test]
    fn wide_terminal_keeps_popup_width_capped() {
        let terminal = draw(2000, 40);
        let text = screen_text(&terminal);
        assert!(text.contains("quit"));
        assert!(text.contains("next view"));
    }
}
