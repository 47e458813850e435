//! 8-bit - a retro video game success sound.
//!
//! A C major arpeggio (C5, E5, G5, C6) on a square wave, each note held for
//! exactly 100 ms. Every change is an instant step, no glides, which is what
//! gives it the chiptune feel.

use crate::{
    error::ScheduleError,
    graph::{amplify::Amplify, extensions::NodeExt, gain::GainNode, oscillator::OscNode},
};

pub type Digital = Amplify<OscNode, GainNode>;

/// C5, E5, G5, C6
const ARPEGGIO: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
const STEP: f64 = 0.1;
const LEVEL: f32 = 0.1;
const LENGTH: f64 = 0.4;

/// Build the arpeggio starting at `t`.
pub fn digital(t: f64) -> Result<Digital, ScheduleError> {
    let mut osc = OscNode::square();
    for (i, &freq) in ARPEGGIO.iter().enumerate() {
        osc.frequency_mut().set_value_at_time(freq, t + i as f64 * STEP)?;
    }

    let mut gate = GainNode::with_gain(LEVEL);
    gate.gain_mut()
        .set_value_at_time(LEVEL, t)?
        .set_value_at_time(0.0, t + LENGTH)?;

    osc.start(t)?;
    osc.stop(t + LENGTH)?;

    Ok(osc.amplify(gate))
}
