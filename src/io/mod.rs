// Purpose - the audio device side: the live output context and its shared instance

pub mod output;

#[cfg(test)]
mod log_capture;

pub use output::{OutputConfig, OutputContext};

use std::sync::OnceLock;

use crate::error::OutputError;

static SHARED: OnceLock<Option<OutputContext>> = OnceLock::new();

/// The process-wide output context, opened on first use.
///
/// Returns `None` when no output could be opened. That outcome is cached too:
/// a machine without an audio device gets one warning, not one per call.
pub fn shared() -> Option<&'static OutputContext> {
    SHARED
        .get_or_init(|| usable(OutputContext::open(OutputConfig::default())))
        .as_ref()
}

/// Turn an open attempt into the cached value: a failure is logged once and
/// becomes "no output".
fn usable(opened: Result<OutputContext, OutputError>) -> Option<OutputContext> {
    match opened {
        Ok(ctx) => Some(ctx),
        Err(err) => {
            tracing::warn!(error = %err, "audio output unavailable; tones are disabled");
            None
        }
    }
}
