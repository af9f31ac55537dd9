//! One request in, one response out.

use rr_core::RunConfig;
use rr_sim::{NoopObserver, SimObserver};

use crate::{RequestResult, encode, load};

/// Decode `text`, run it under `config`, and encode the result.
///
/// Every run gets its own surface; nothing is shared between calls.
pub fn respond(text: &str, config: &RunConfig) -> RequestResult<String> {
    respond_with(text, config, &mut NoopObserver)
}

/// Like [`respond`] but forwards simulation callbacks to `observer`.
pub fn respond_with<O: SimObserver>(
    text:     &str,
    config:   &RunConfig,
    observer: &mut O,
) -> RequestResult<String> {
    let mut sim = load(text, config)?;
    let outcome = sim.run(observer)?;
    Ok(encode(&outcome))
}
