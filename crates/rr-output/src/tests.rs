//! Unit and integration tests for rr-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, RoundSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, round: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            round,
            agent_id,
            x:       agent_id as i64,
            y:       -1,
            heading: 'E',
            cursor:  round,
            pending: 3,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("round_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("round_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["round", "agent_id", "x", "y", "heading", "cursor", "pending"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("round_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["round", "progressed", "blocked"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 2), snap_row(1, 2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][1], "1");
        assert_eq!(&records[1][3], "-1");
        assert_eq!(&records[1][4], "E");
    }

    #[test]
    fn csv_summary_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_round_summary(&RoundSummaryRow { round: 1, progressed: 2, blocked: 1 }).unwrap();
        w.write_round_summary(&RoundSummaryRow { round: 2, progressed: 0, blocked: 0 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("round_summaries.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][2], "1");
        assert_eq!(&records[1][1], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    /// A sink whose every write fails.
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn failed_flush_is_reported_again() {
        // Headers sit in the csv buffer until the flush.
        let mut w = CsvWriter::from_writers(Broken, Broken).unwrap();
        assert!(w.finish().is_err());
        assert!(w.finish().is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use rr_agent::AgentSpec;
    use rr_core::{Coordinate, Heading, Instruction, MoveSymbol, Policy};
    use rr_sim::{SimBuilder, SimObserver};

    use crate::row::{AgentSnapshotRow, RoundSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<AgentSnapshotRow>,
        summaries: Vec<RoundSummaryRow>,
        finishes:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Fails every summary write.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_round_summary(&mut self, _row: &RoundSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn spec(x: i64, y: i64, heading: Heading, program: &str) -> AgentSpec {
        let instructions = Instruction::parse_program(program, MoveSymbol::F).unwrap();
        AgentSpec::new(Coordinate::new(x, y), heading, instructions)
    }

    #[test]
    fn blocked_agents_are_counted_per_round() {
        // Agent 1 tries to step onto agent 0, which never moves.
        let mut sim = SimBuilder::new(Coordinate::new(5, 5))
            .agent(spec(1, 1, Heading::North, ""))
            .agent(spec(1, 0, Heading::North, "F"))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let outcome = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(outcome.rounds, 1);
        assert_eq!(writer.summaries, [RoundSummaryRow { round: 1, progressed: 0, blocked: 1 }]);
        assert_eq!(writer.snapshots.len(), 2);
        assert_eq!(writer.finishes, 1);
    }

    #[test]
    fn blocked_count_resets_between_rounds() {
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let err = rr_core::PositionError::occupied(Coordinate::new(0, 0));
        obs.on_round_start(1);
        obs.on_blocked(1, rr_core::AgentId(0), &err);
        obs.on_round_end(1, 0);
        obs.on_round_start(2);
        obs.on_round_end(2, 1);

        let writer = obs.into_writer();
        assert_eq!(writer.summaries[0].blocked, 1);
        assert_eq!(writer.summaries[1].blocked, 0);
    }

    #[test]
    fn snapshots_carry_agent_state() {
        let mut sim = SimBuilder::new(Coordinate::new(5, 5))
            .agent(spec(1, 2, Heading::North, "RF"))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();

        let writer = obs.into_writer();
        let last = writer.snapshots.last().unwrap();
        assert_eq!((last.x, last.y, last.heading), (2, 2, 'E'));
        assert_eq!((last.cursor, last.pending), (2, 0));
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut sim = SimBuilder::new(Coordinate::new(5, 5))
            .agent(spec(0, 0, Heading::North, "FF"))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter);
        sim.run(&mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_reports_stored_error() {
        let mut obs = SimOutputObserver::new(FailingWriter);
        obs.on_round_end(1, 0);
        assert!(obs.finish().is_err());
        assert!(obs.finish().is_ok());
    }

    #[test]
    fn csv_trace_of_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(Coordinate::new(5, 5))
            .policy(Policy::RoundRobin)
            .agent(spec(1, 2, Heading::North, "LFLFLFLFF"))
            .agent(spec(3, 3, Heading::East, "FFRFFRFRRF"))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let outcome = sim.run(&mut obs).unwrap();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("round_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len() as u64, outcome.rounds);
        assert_eq!(&summaries[summaries.len() - 1][1], "0");

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, outcome.rounds * 2);
    }
}
