// Purpose: tone dispatch, and the destinations tones are scheduled on.
// Sits above the graph layer: builds a tone's graph and hands it off.

pub mod mixer;
pub mod offline;

pub use mixer::GraphMixer;
pub use offline::OfflineContext;

use crate::{
    graph::GraphNode,
    io,
    tones::{self, SoundId},
};

/// Where scheduled graphs play.
///
/// A destination owns the clock every tone is laid out against, and takes
/// ownership of each graph until it has played out.
pub trait Destination {
    /// The instant, in seconds, that a graph scheduled now should start at.
    /// Monotonic.
    ///
    /// Live outputs report a time far enough ahead of what is playing that a
    /// graph scheduled right away still renders from its first frame.
    fn current_time(&self) -> f64;

    /// Hand a graph over to be played. Fire and forget.
    fn schedule(&self, graph: Box<dyn GraphNode>);
}

impl<D: Destination + ?Sized> Destination for &D {
    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn schedule(&self, graph: Box<dyn GraphNode>) {
        (**self).schedule(graph)
    }
}

/// Play a notification tone on the shared audio output.
///
/// Returns immediately. Without an audio output this does nothing.
pub fn play_tone(id: SoundId) {
    play_tone_on(io::shared(), id);
}

/// Play a notification tone on `destination`.
///
/// `None` stands for "no audio output available" and is a silent no-op.
pub fn play_tone_on<D: Destination + ?Sized>(destination: Option<&D>, id: SoundId) {
    let Some(destination) = destination else {
        tracing::debug!(sound = %id, "no audio output; tone skipped");
        return;
    };

    let now = destination.current_time();
    match tones::build(id, now) {
        Ok(graph) => {
            tracing::debug!(sound = %id, start = now, "scheduling tone");
            destination.schedule(graph);
        }
        Err(err) => {
            tracing::error!(sound = %id, error = %err, "failed to build tone graph");
        }
    }
}
