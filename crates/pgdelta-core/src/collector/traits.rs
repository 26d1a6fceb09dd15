//! Source abstraction consumed by the engine.

use crate::model::Snapshot;

use super::CollectError;

/// Collects one snapshot of named counter rows.
///
/// Called synchronously once per cycle. Returning an empty snapshot is
/// valid (the backing view does not exist on this server); any other
/// failure is a [`CollectError`] and the caller decides whether to retry.
pub trait SnapshotSource<R> {
    fn collect(&mut self) -> Result<Snapshot<R>, CollectError>;
}

impl<R, S: SnapshotSource<R> + ?Sized> SnapshotSource<R> for Box<S> {
    fn collect(&mut self) -> Result<Snapshot<R>, CollectError> {
        (**self).collect()
    }
}
