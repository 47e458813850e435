//! Classic beep - the standard double digital alarm.
//!
//! # How It Works
//!
//! 1. Sine oscillator, pitch dropping one octave (880 Hz → 440 Hz)
//! 2. Exponential sweep, so the drop sounds even rather than sagging
//! 3. Gain starts at 0.3 and decays exponentially to 0.01 with the sweep
//! 4. The same beep again, 150 ms after the first one started
//!
//! ```text
//!   beep 1            beep 2
//!  ├──────┤          ├──────┤
//!  0     0.1  0.15  0.25
//! ```

use crate::{
    error::ScheduleError,
    graph::{amplify::Amplify, extensions::NodeExt, gain::GainNode, mix::Mix, oscillator::OscNode},
};

/// One sine blip through its decay envelope.
pub type Beep = Amplify<OscNode, GainNode>;
pub type Classic = Mix<Beep, Beep>;

const BEEP_LENGTH: f64 = 0.1;
const SECOND_BEEP_OFFSET: f64 = 0.15;

/// Build the double beep, first beep starting at `t`.
pub fn classic(t: f64) -> Result<Classic, ScheduleError> {
    Ok(beep(t)?.mix(beep(t + SECOND_BEEP_OFFSET)?))
}

fn beep(start: f64) -> Result<Beep, ScheduleError> {
    let end = start + BEEP_LENGTH;

    let mut osc = OscNode::sine();
    osc.frequency_mut()
        .set_value_at_time(880.0, start)?
        .exponential_ramp_to_value_at_time(440.0, end)?;

    let mut env = GainNode::new();
    env.gain_mut()
        .set_value_at_time(0.3, start)?
        .exponential_ramp_to_value_at_time(0.01, end)?;

    osc.start(start)?;
    osc.stop(end)?;

    Ok(osc.amplify(env))
}
