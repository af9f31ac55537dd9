//! Request handling shared by `main` and the tests.

use std::path::Path;

use anyhow::{Context, Result};
use rr_core::RunConfig;
use rr_output::{CsvWriter, OutputWriter, SimOutputObserver};
use rr_request::{respond, respond_with};
use tracing::{info, warn};

/// Run one request and return the response text.
///
/// With `trace` set, per-round CSV files are written to that directory.
pub fn handle(text: &str, config: &RunConfig, trace: Option<&Path>) -> Result<String> {
    let Some(dir) = trace else {
        return Ok(respond(text, config)?);
    };

    let writer = CsvWriter::new(dir)
        .with_context(|| format!("failed to create trace files in {}", dir.display()))?;
    let response = handle_traced(text, config, writer)?;
    info!(dir = %dir.display(), "trace written");
    Ok(response)
}

/// Run one request while recording its trace to `writer`.
///
/// The trace is flushed even when the run fails.  If both fail, the run
/// error is returned and the trace error is logged.
pub fn handle_traced<W: OutputWriter>(text: &str, config: &RunConfig, writer: W) -> Result<String> {
    let mut observer = SimOutputObserver::new(writer);
    let response = respond_with(text, config, &mut observer);
    let flushed = observer.finish();

    match (response, flushed) {
        (Ok(response), Ok(())) => Ok(response),
        (Ok(_), Err(e)) => Err(e).context("failed to write trace"),
        (Err(e), Ok(())) => Err(e.into()),
        (Err(e), Err(trace)) => {
            warn!(error = %trace, "failed to write trace");
            Err(e.into())
        }
    }
}
