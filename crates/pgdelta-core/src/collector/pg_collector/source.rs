//! [`SnapshotSource`] implementations backed by a shared collector.

use std::cell::RefCell;
use std::rc::Rc;

use crate::collector::{CollectError, SnapshotSource};
use crate::model::{
    DatabaseRow, IndexUsageRow, SlruRow, Snapshot, StatementRow, TableIoRow, TableOpsRow, UserRow,
};

use super::PostgresCollector;

/// One connection shared by every table on the main loop thread.
pub type SharedCollector = Rc<RefCell<PostgresCollector>>;

/// Snapshot source reading one domain through a [`SharedCollector`].
///
/// The row type picked by the caller selects the statistics view.
#[derive(Clone)]
pub struct PgSource {
    collector: SharedCollector,
}

impl PgSource {
    pub fn new(collector: SharedCollector) -> Self {
        Self { collector }
    }
}

impl SnapshotSource<DatabaseRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<DatabaseRow>, CollectError> {
        self.collector.borrow_mut().collect_databases()
    }
}

impl SnapshotSource<TableOpsRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<TableOpsRow>, CollectError> {
        self.collector.borrow_mut().collect_table_ops()
    }
}

impl SnapshotSource<TableIoRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<TableIoRow>, CollectError> {
        self.collector.borrow_mut().collect_table_io()
    }
}

impl SnapshotSource<IndexUsageRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<IndexUsageRow>, CollectError> {
        self.collector.borrow_mut().collect_index_usage()
    }
}

impl SnapshotSource<StatementRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<StatementRow>, CollectError> {
        self.collector.borrow_mut().collect_statements()
    }
}

impl SnapshotSource<UserRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<UserRow>, CollectError> {
        self.collector.borrow_mut().collect_users()
    }
}

impl SnapshotSource<SlruRow> for PgSource {
    fn collect(&mut self) -> Result<Snapshot<SlruRow>, CollectError> {
        self.collector.borrow_mut().collect_slru()
    }
}
