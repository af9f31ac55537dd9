//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, OutputResult, RoundSummaryRow};

/// Trait implemented by trace backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
