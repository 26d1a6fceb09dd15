//! Views: one metric table per domain, presented through [`MetricView`].
//!
//! The display layer never sees row types. It holds `Box<dyn MetricView>`
//! and asks for formatted strings, so every domain renders the same way.

mod databases;
mod indexes;
mod rotation;
mod slru;
mod statements;
mod tables;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::collector::{CollectError, PgSource, SharedCollector, SnapshotSource};
use crate::engine::MetricTable;
use crate::model::{
    CounterRow, DatabaseRow, IndexUsageRow, SlruRow, StatementRow, TableIoRow, TableOpsRow,
    UserRow,
};

pub use rotation::{UnknownViewError, ViewRotation};

/// Known views, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    Databases,
    #[default]
    TableOps,
    TableIo,
    IndexUsage,
    Statements,
    Users,
    Slru,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Databases,
            View::TableOps,
            View::TableIo,
            View::IndexUsage,
            View::Statements,
            View::Users,
            View::Slru,
        ]
    }

    /// Name accepted by `--view`.
    pub fn name(&self) -> &'static str {
        match self {
            View::Databases => "databases",
            View::TableOps => "table_ops",
            View::TableIo => "table_io",
            View::IndexUsage => "index_usage",
            View::Statements => "statements",
            View::Users => "users",
            View::Slru => "slru",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Databases => "Database Activity",
            View::TableOps => "Table Operations",
            View::TableIo => "Table I/O",
            View::IndexUsage => "Index Usage",
            View::Statements => "Statement Latency",
            View::Users => "User Latency",
            View::Slru => "SLRU Caches",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        View::all().iter().copied().find(|v| v.name() == name)
    }
}

/// Column layout of one domain's rows.
pub trait Columns: CounterRow + Serialize {
    const VIEW: View;
    /// Statistics view the rows come from.
    const SOURCE: &'static str;

    fn headings() -> String;

    /// One formatted line; `totals` gives the denominator for the share column.
    fn content(&self, totals: &Self) -> String;
}

/// Uniform table contract consumed by the display layer.
pub trait MetricView {
    fn view(&self) -> View;

    fn name(&self) -> &'static str {
        self.view().name()
    }

    fn collect(&mut self) -> Result<(), CollectError>;
    fn set_first_from_last(&mut self);

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn want_relative_stats(&self) -> bool;
    fn set_want_relative_stats(&mut self, want_relative: bool);

    fn first_collect_time(&self) -> Option<DateTime<Utc>>;
    fn last_collect_time(&self) -> Option<DateTime<Utc>>;

    fn headings(&self) -> String;
    /// One line per result row; rows with a zero primary field are blank.
    fn row_content(&self) -> Vec<String>;
    fn total_row_content(&self) -> String;
    fn empty_row_content(&self) -> String;
    fn description(&self) -> String;

    /// Results, totals and timestamps as JSON.
    fn results_json(&self) -> serde_json::Value;
}

impl<R, S> MetricView for MetricTable<R, S>
where
    R: Columns,
    S: SnapshotSource<R>,
{
    fn view(&self) -> View {
        R::VIEW
    }

    fn collect(&mut self) -> Result<(), CollectError> {
        MetricTable::collect(self)
    }

    fn set_first_from_last(&mut self) {
        MetricTable::set_first_from_last(self)
    }

    fn len(&self) -> usize {
        MetricTable::len(self)
    }

    fn want_relative_stats(&self) -> bool {
        MetricTable::want_relative_stats(self)
    }

    fn set_want_relative_stats(&mut self, want_relative: bool) {
        MetricTable::set_want_relative_stats(self, want_relative)
    }

    fn first_collect_time(&self) -> Option<DateTime<Utc>> {
        MetricTable::first_collect_time(self)
    }

    fn last_collect_time(&self) -> Option<DateTime<Utc>> {
        MetricTable::last_collect_time(self)
    }

    fn headings(&self) -> String {
        R::headings()
    }

    fn row_content(&self) -> Vec<String> {
        let totals = self.totals();
        self.results()
            .iter()
            .map(|row| {
                if row.primary() == 0 {
                    self.empty_row_content()
                } else {
                    row.content(totals)
                }
            })
            .collect()
    }

    fn total_row_content(&self) -> String {
        let totals = self.totals();
        totals.content(totals)
    }

    fn empty_row_content(&self) -> String {
        " ".repeat(R::headings().chars().count())
    }

    fn description(&self) -> String {
        format!("{} ({}) {} rows", R::VIEW.title(), R::SOURCE, self.len())
    }

    fn results_json(&self) -> serde_json::Value {
        serde_json::json!({
            "view": R::VIEW.name(),
            "relative": self.want_relative_stats(),
            "first_collected": self.first_collect_time().map(|t| t.to_rfc3339()),
            "last_collected": self.last_collect_time().map(|t| t.to_rfc3339()),
            "rows": self.results(),
            "totals": self.totals(),
        })
    }
}

/// Builds one view per domain, all reading through `collector`.
pub fn pg_views(collector: SharedCollector, want_relative: bool) -> Vec<Box<dyn MetricView>> {
    fn table<R>(collector: &SharedCollector, want_relative: bool) -> Box<dyn MetricView>
    where
        R: Columns + 'static,
        PgSource: SnapshotSource<R>,
    {
        Box::new(MetricTable::<R, PgSource>::new(
            PgSource::new(collector.clone()),
            want_relative,
        ))
    }

    View::all()
        .iter()
        .map(|view| match view {
            View::Databases => table::<DatabaseRow>(&collector, want_relative),
            View::TableOps => table::<TableOpsRow>(&collector, want_relative),
            View::TableIo => table::<TableIoRow>(&collector, want_relative),
            View::IndexUsage => table::<IndexUsageRow>(&collector, want_relative),
            View::Statements => table::<StatementRow>(&collector, want_relative),
            View::Users => table::<UserRow>(&collector, want_relative),
            View::Slru => table::<SlruRow>(&collector, want_relative),
        })
        .collect()
}
