//! Nebula - a soft, rising ambient chord.
//!
//! An A major 7 chord (A4, C#5, E5, G#5) on triangle waves. Each voice
//! enters 50 ms after the previous one, so the chord blooms upward instead
//! of landing all at once.
//!
//! # How It Works
//!
//! 1. Four triangle oscillators, one per chord tone
//! 2. Voice `i` starts at `t + i × 0.05`
//! 3. Slow linear attack: 0 → 0.15 over 0.5 s
//! 4. Long exponential release: 0.15 → 0.001 by 2.5 s after the voice started
//! 5. Every voice stops together at `t + 3.0`

use crate::{
    error::ScheduleError,
    graph::{amplify::Amplify, extensions::NodeExt, gain::GainNode, mix::Bus, oscillator::OscNode},
};

pub type Ethereal = Bus<Amplify<OscNode, GainNode>>;

/// A4, C#5, E5, G#5
pub const CHORD: [f32; 4] = [440.0, 554.37, 659.25, 830.61];

const STAGGER: f64 = 0.05;
const ATTACK: f64 = 0.5;
const RELEASE_END: f64 = 2.5;
const LENGTH: f64 = 3.0;
const PEAK_GAIN: f32 = 0.15;

/// Build the chord swell starting at `t`.
pub fn ethereal(t: f64) -> Result<Ethereal, ScheduleError> {
    CHORD
        .iter()
        .enumerate()
        .map(|(i, &freq)| voice(freq, t + i as f64 * STAGGER, t + LENGTH))
        .collect::<Result<Vec<_>, _>>()
        .map(Bus::new)
}

fn voice(freq: f32, start: f64, stop: f64) -> Result<Amplify<OscNode, GainNode>, ScheduleError> {
    let mut osc = OscNode::triangle().with_frequency(freq);

    let mut env = GainNode::new();
    env.gain_mut()
        .set_value_at_time(0.0, start)?
        .linear_ramp_to_value_at_time(PEAK_GAIN, start + ATTACK)?
        .exponential_ramp_to_value_at_time(0.001, start + RELEASE_END)?;

    osc.start(start)?;
    osc.stop(stop)?;

    Ok(osc.amplify(env))
}
