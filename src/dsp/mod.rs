//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components stay focused on the signal math: waveform generation and
//! parameter automation. Graph nodes layer scheduling and routing on top.

/// Time-stamped parameter automation (set, linear and exponential ramps).
pub mod automation;
/// Oscillator waveforms driven by a phase accumulator.
pub mod oscillator;

pub use automation::{AudioParam, AutomationEvent};
pub use oscillator::{OscillatorBlock, OscillatorWaveform};
