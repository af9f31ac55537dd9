//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rr_core::{AgentId, PositionError};
use rr_sim::{Outcome, SimObserver};
use rr_surface::Surface;

use crate::row::{AgentSnapshotRow, RoundSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes per-round agent snapshots and round
/// summaries to any [`OutputWriter`] backend.
///
/// `SimObserver` methods cannot fail, so writer errors are stored.  Call
/// [`finish`][Self::finish] after `sim.run()` returns, whether or not the run
/// aborted; it flushes the writer and surfaces the first stored error.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    blocked:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            blocked:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and report the first error seen during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.take_error() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_start(&mut self, _round: u64) {
        self.blocked = 0;
    }

    fn on_blocked(&mut self, _round: u64, _agent: AgentId, _error: &PositionError) {
        self.blocked += 1;
    }

    fn on_round_end(&mut self, round: u64, progressed: usize) {
        let row = RoundSummaryRow {
            round,
            progressed: progressed as u64,
            blocked:    self.blocked,
        };
        let result = self.writer.write_round_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: u64, surface: &Surface) {
        let rows: Vec<AgentSnapshotRow> = surface
            .agents()
            .iter()
            .map(|agent| {
                let state = agent.state();
                AgentSnapshotRow {
                    round,
                    agent_id: state.id.0,
                    x:        state.position.x,
                    y:        state.position.y,
                    heading:  state.heading.symbol(),
                    cursor:   state.processed as u64,
                    pending:  state.pending as u64,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _outcome: &Outcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
