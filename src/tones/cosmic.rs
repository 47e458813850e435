//! Cosmos - a futuristic sci-fi sweep.
//!
//! # How It Works
//!
//! 1. Sawtooth oscillator for a bright, buzzy body
//! 2. Pitch sweeps down exponentially, 1200 Hz → 200 Hz over 0.6 s
//! 3. A 15 Hz sine LFO wobbles that pitch by ±500 Hz
//! 4. Gain fades linearly 0.1 → 0.05 → 0 in two 0.3 s segments
//!
//! The LFO is a source like any other, so it gets its own stop at the same
//! instant as the main oscillator. Without it the graph would never finish.

use crate::{
    error::ScheduleError,
    graph::{
        amplify::Amplify,
        extensions::NodeExt,
        gain::GainNode,
        modulate::Modulate,
        oscillator::{OscNode, OscParam},
    },
};

pub type Cosmic = Amplify<Modulate<OscNode, OscNode>, GainNode>;

const LENGTH: f64 = 0.6;
const LFO_RATE: f32 = 15.0;
const LFO_DEPTH: f32 = 500.0;

/// Build the sweep starting at `t`.
pub fn cosmic(t: f64) -> Result<Cosmic, ScheduleError> {
    let end = t + LENGTH;

    let mut osc = OscNode::sawtooth();
    osc.frequency_mut()
        .set_value_at_time(1200.0, t)?
        .exponential_ramp_to_value_at_time(200.0, end)?;
    osc.start(t)?;
    osc.stop(end)?;

    let mut lfo = OscNode::sine().with_frequency(LFO_RATE);
    lfo.start(t)?;
    lfo.stop(end)?;

    let mut env = GainNode::new();
    env.gain_mut()
        .set_value_at_time(0.1, t)?
        .linear_ramp_to_value_at_time(0.05, t + 0.3)?
        .linear_ramp_to_value_at_time(0.0, end)?;

    Ok(osc
        .modulate(lfo, OscParam::Frequency, LFO_DEPTH)
        .amplify(env))
}
