//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `round_summaries.csv`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, RoundSummaryRow};

/// Writes the round trace as two CSV streams, files by default.
pub struct CsvWriter<W: Write = File> {
    snapshots: Writer<W>,
    summaries: Writer<W>,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Create `dir` if needed, open (or truncate) the two CSV files, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Self::from_writers(
            File::create(dir.join("agent_snapshots.csv"))?,
            File::create(dir.join("round_summaries.csv"))?,
        )
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write the header rows to two arbitrary sinks.
    pub fn from_writers(snapshots: W, summaries: W) -> OutputResult<Self> {
        let mut snapshots = Writer::from_writer(snapshots);
        snapshots.write_record(["round", "agent_id", "x", "y", "heading", "cursor", "pending"])?;

        let mut summaries = Writer::from_writer(summaries);
        summaries.write_record(["round", "progressed", "blocked"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.round.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                row.cursor.to_string(),
                row.pending.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.progressed.to_string(),
            row.blocked.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.snapshots.flush()?;
        self.summaries.flush()?;
        // Only a successful flush counts; a failed one is retried.
        self.finished = true;
        Ok(())
    }
}
