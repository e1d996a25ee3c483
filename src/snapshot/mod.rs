//! Local snapshot of the last submitted agent configuration.

mod store;

pub use store::{Snapshot, SnapshotError};
