//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what a scheduled tone
//! needs: start/stop windows, automated parameters, modulation routings and
//! block-based rendering against an absolute destination clock. The
//! `extensions` module adds fluent helpers so tones can be authored with a
//! clear, chainable API.

/// Multiply two signals together (gain stages, ring modulation).
pub mod amplify;
/// Fluent combinators (`.amplify()`, `.mix()`, `.modulate()`).
pub mod extensions;
/// Gain stage driven by an automated parameter.
pub mod gain;
/// Additive summing of parallel graphs.
pub mod mix;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Scheduled audio-band oscillators.
pub mod oscillator;

pub use node::{end_time, GraphNode, Modulatable, RenderCtx};
