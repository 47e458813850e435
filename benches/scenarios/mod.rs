//! Full tone benchmarks.
//!
//! These render the graphs exactly as `play_tone` schedules them, one block
//! at a time, to check each tone's cost per callback.

mod tones;

pub use tones::{bench_overlap, bench_tones};
