//! Main-loop state shared by the interactive and batch front-ends.
//!
//! A [`Session`] owns every view, the rotation selecting the active one and
//! the poll scheduler. Front-ends feed it timer ticks and [`Event`]s and read
//! formatted lines back; they never touch a metric table directly.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::event::Event;
use crate::fmt::{format_clock, format_duration};
use crate::schedule::PollScheduler;
use crate::view::{MetricView, UnknownViewError, View, ViewRotation};

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session {
    views: Vec<Box<dyn MetricView>>,
    rotation: ViewRotation,
    scheduler: PollScheduler,
    last_error: Option<String>,
    show_help: bool,
    screen: (u16, u16),
}

impl Session {
    /// Session over `views`, rotating in the order given.
    pub fn new(views: Vec<Box<dyn MetricView>>, interval: Duration) -> Self {
        let rotation = ViewRotation::new(views.iter().map(|v| v.view()).collect());
        Self {
            views,
            rotation,
            scheduler: PollScheduler::new(interval),
            last_error: None,
            show_help: false,
            screen: (0, 0),
        }
    }

    /// Selects the starting view; an empty name means the default view.
    pub fn select_view(&mut self, name: &str) -> Result<View, UnknownViewError> {
        self.rotation.set_by_name(name)
    }

    /// Views in rotation order.
    pub fn views(&self) -> &[View] {
        self.rotation.views()
    }

    pub fn active_view(&self) -> View {
        self.rotation.current()
    }

    /// Active metric table.
    pub fn active(&self) -> Option<&dyn MetricView> {
        let view = self.active_view();
        self.views
            .iter()
            .find(|v| v.view() == view)
            .map(|v| v.as_ref())
    }

    fn active_mut(&mut self) -> Option<&mut Box<dyn MetricView>> {
        let view = self.active_view();
        self.views.iter_mut().find(|v| v.view() == view)
    }

    pub fn scheduler(&self) -> &PollScheduler {
        &self.scheduler
    }

    pub fn interval(&self) -> Duration {
        self.scheduler.interval()
    }

    /// How long the loop may sleep before the next collection.
    pub fn time_to_wait(&self) -> Duration {
        self.scheduler.time_to_wait()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn screen_size(&self) -> (u16, u16) {
        self.screen
    }

    pub fn want_relative(&self) -> bool {
        self.active().is_some_and(|v| v.want_relative_stats())
    }

    /// Collects the active view and restarts the poll timer.
    ///
    /// A failed collection is recorded for the status line; the view keeps
    /// showing its last good results.
    pub fn collect_active(&mut self) {
        self.scheduler.mark_collected();
        let Some(view) = self.active_mut() else {
            return;
        };
        match view.collect() {
            Ok(()) => self.last_error = None,
            Err(e) => {
                warn!(view = view.name(), error = %e, "collection failed");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Applies one event.
    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Finished => return Control::Quit,
            Event::ViewNext => {
                let view = self.rotation.next();
                debug!(view = view.name(), "switched view");
                self.collect_active();
            }
            Event::ViewPrev => {
                let view = self.rotation.prev();
                debug!(view = view.name(), "switched view");
                self.collect_active();
            }
            Event::IncreasePollTime => {
                self.scheduler.increase_interval();
                debug!(interval_s = self.interval().as_secs(), "poll interval changed");
            }
            Event::DecreasePollTime => {
                self.scheduler.decrease_interval();
                debug!(interval_s = self.interval().as_secs(), "poll interval changed");
            }
            Event::Help => self.show_help = !self.show_help,
            Event::ToggleWantRelative => {
                let want = !self.want_relative();
                for view in &mut self.views {
                    view.set_want_relative_stats(want);
                }
                info!(relative = want, "display mode changed");
            }
            Event::ResetStatistics => {
                if let Some(view) = self.active_mut() {
                    view.set_first_from_last();
                }
            }
            Event::ResizeScreen { width, height } => self.screen = (width, height),
            Event::Error(msg) => {
                warn!(error = %msg, "input error");
                self.last_error = Some(msg);
            }
            Event::Unknown | Event::None => {}
        }
        Control::Continue
    }

    /// One-line summary of the active view: title, mode, interval and
    /// capture times.
    pub fn header_line(&self) -> String {
        let Some(view) = self.active() else {
            return String::new();
        };
        let mode = if view.want_relative_stats() {
            "relative"
        } else {
            "absolute"
        };
        let since = match view.first_collect_time() {
            Some(_) if view.want_relative_stats() => {
                format!("collecting since {}", format_clock(view.first_collect_time()))
            }
            _ => "lifetime counters".to_string(),
        };
        format!(
            "{} | {} | every {} | {} | last updated {}",
            view.view().title(),
            mode,
            format_duration(i64::try_from(self.interval().as_secs()).unwrap_or(i64::MAX)),
            since,
            format_clock(view.last_collect_time())
        )
    }

    /// Headings, rows and totals of the active view as plain text.
    pub fn render_text(&self) -> String {
        let Some(view) = self.active() else {
            return String::new();
        };
        let mut out = String::new();
        out.push_str(&self.header_line());
        out.push('\n');
        out.push_str(view.headings().trim_end());
        out.push('\n');
        for line in view.row_content() {
            if line.trim().is_empty() {
                continue;
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&view.total_row_content());
        out.push('\n');
        if let Some(err) = &self.last_error {
            out.push_str("error: ");
            out.push_str(err);
            out.push('\n');
        }
        out
    }

    /// Active view's results as JSON.
    pub fn render_json(&self) -> serde_json::Value {
        match self.active() {
            Some(view) => {
                let mut json = view.results_json();
                if let Some(err) = &self.last_error {
                    json["error"] = serde_json::Value::String(err.clone());
                }
                json
            }
            None => serde_json::Value::Null,
        }
    }
}
