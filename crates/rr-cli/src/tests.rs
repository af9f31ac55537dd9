//! Tests for the CLI's config loading and request handling.

#[cfg(test)]
mod config_tests {
    use rr_core::{MoveSymbol, Policy, RunConfig};

    use crate::config::{load, parse, with_overrides};

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(load(None).unwrap(), RunConfig::default());
    }

    #[test]
    fn toml_values_are_kebab_case() {
        let config = parse("policy = \"sequential\"\nmove_symbol = \"M\"\n").unwrap();
        assert_eq!(config.policy, Policy::Sequential);
        assert_eq!(config.move_symbol, MoveSymbol::M);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse("move_symbol = \"M\"").unwrap();
        assert_eq!(config.policy, Policy::RoundRobin);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(parse("policy = \"random\"").is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = parse("policy = \"sequential\"").unwrap();
        let config = with_overrides(file, Some(Policy::RoundRobin), None);
        assert_eq!(config.policy, Policy::RoundRobin);
        assert_eq!(config.move_symbol, MoveSymbol::F);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rover.toml");
        std::fs::write(&path, "policy = \"sequential\"").unwrap();
        assert_eq!(load(Some(&path)).unwrap().policy, Policy::Sequential);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Some(std::path::Path::new("/nonexistent/rover.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}

#[cfg(test)]
mod handle_tests {
    use rr_core::{MoveSymbol, Policy, RunConfig};
    use rr_output::{AgentSnapshotRow, OutputError, OutputResult, OutputWriter, RoundSummaryRow};

    use crate::app::{handle, handle_traced};

    /// Rejects every round summary.
    struct FullDisk;

    impl OutputWriter for FullDisk {
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

    const EXAMPLE: &str = "5 5\n1 2 N\nLFLFLFLFF\n3 3 E\nFFRFFRFRRF";

    #[test]
    fn round_robin_response() {
        let out = handle(EXAMPLE, &RunConfig::default(), None).unwrap();
        assert_eq!(out, "DONE\n1 3 N\n5 1 E");
    }

    #[test]
    fn sequential_response_with_m() {
        let config = RunConfig { policy: Policy::Sequential, move_symbol: MoveSymbol::M };
        let out = handle("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM", &config, None).unwrap();
        assert_eq!(out, "1 3 N\n5 1 E");
    }

    #[test]
    fn malformed_request_is_an_error() {
        let err = handle("5 5", &RunConfig::default(), None).unwrap_err();
        assert!(err.to_string().starts_with("request is not well formatted"));
    }

    #[test]
    fn trace_directory_is_populated() {
        let dir = tempfile::tempdir().unwrap();
        let trace = dir.path().join("trace");
        handle(EXAMPLE, &RunConfig::default(), Some(&trace)).unwrap();
        assert!(trace.join("agent_snapshots.csv").exists());
        assert!(trace.join("round_summaries.csv").exists());
    }

    #[test]
    fn trace_is_written_when_run_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig { policy: Policy::Sequential, ..RunConfig::default() };
        let err = handle("5 5\n0 0 N\nFFFFFF", &config, Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("outside the surface"));

        let summaries = std::fs::read_to_string(dir.path().join("round_summaries.csv")).unwrap();
        assert!(summaries.starts_with("round,progressed,blocked"));
    }

    #[test]
    fn run_error_wins_when_trace_also_fails() {
        let config = RunConfig { policy: Policy::Sequential, ..RunConfig::default() };
        let err = handle_traced("5 5\n0 0 N\nF\n0 5 N\nF", &config, FullDisk).unwrap_err();
        assert_eq!(err.to_string(), "position outside the surface limits: 0 6");
    }

    #[test]
    fn trace_error_reported_when_run_succeeds() {
        let err = handle_traced(EXAMPLE, &RunConfig::default(), FullDisk).unwrap_err();
        assert_eq!(err.to_string(), "failed to write trace");
        assert!(format!("{err:#}").contains("disk full"));
    }
}
