//! Main TUI application.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::event::{EventQueue, Wakeup};
use crate::session::{Control, Session};

use super::input::spawn_input_reader;
use super::render::render;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Interactive front-end over a [`Session`].
pub struct App {
    session: Session,
    events: EventQueue,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            events: EventQueue::new(),
        }
    }

    /// Runs until the user quits. The terminal is restored even when drawing
    /// fails.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Term) -> io::Result<()> {
        spawn_input_reader(self.events.sender());

        self.session.collect_active();
        info!(view = self.session.active_view().name(), "started");

        loop {
            terminal.draw(|frame| render(frame, &self.session))?;

            match self.events.next_timeout(self.session.time_to_wait()) {
                Wakeup::Tick => self.session.collect_active(),
                Wakeup::Event(event) => {
                    if self.session.handle_event(event) == Control::Quit {
                        break;
                    }
                }
            }
        }

        info!("finished");
        Ok(())
    }
}
