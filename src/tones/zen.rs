//! Zen gong - a deep, resonant meditation bell.
//!
//! Two-operator FM: a 280 Hz sine modulator drives the frequency of a
//! 200 Hz sine carrier through a gain stage that sets the modulation index.
//!
//! # How It Works
//!
//! 1. Carrier fixed at 200 Hz, modulator fixed at 280 Hz. The 7:5 ratio is
//!    not harmonic, so the sidebands sound metallic.
//! 2. Index starts at 300 Hz of deviation (bright strike) and decays
//!    exponentially to 1 over 2 s. The tone clears toward a pure sine.
//! 3. Master gain: 0 → 0.5 in 50 ms, then a long exponential decay to 0.001
//!    at 4 s.
//! 4. Carrier and modulator start and stop together.

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

pub type Zen = Amplify<Modulate<OscNode, Amplify<OscNode, GainNode>>, GainNode>;

const CARRIER_FREQ: f32 = 200.0;
const MODULATOR_FREQ: f32 = 280.0;
const INDEX_DECAY: f64 = 2.0;
const LENGTH: f64 = 4.0;

/// Build the bell starting at `t`.
pub fn zen(t: f64) -> Result<Zen, ScheduleError> {
    let end = t + LENGTH;

    let mut carrier = OscNode::sine().with_frequency(CARRIER_FREQ);
    let mut modulator = OscNode::sine().with_frequency(MODULATOR_FREQ);

    let mut index = GainNode::new();
    index
        .gain_mut()
        .set_value_at_time(300.0, t)?
        .exponential_ramp_to_value_at_time(1.0, t + INDEX_DECAY)?;

    let mut master = GainNode::new();
    master
        .gain_mut()
        .set_value_at_time(0.0, t)?
        .linear_ramp_to_value_at_time(0.5, t + 0.05)?
        .exponential_ramp_to_value_at_time(0.001, end)?;

    carrier.start(t)?;
    modulator.start(t)?;
    carrier.stop(end)?;
    modulator.stop(end)?;

    Ok(carrier
        .modulate(modulator.amplify(index), OscParam::Frequency, 1.0)
        .amplify(master))
}
