use crate::{
    dsp::{
        automation::AudioParam,
        oscillator::{OscillatorBlock, OscillatorWaveform},
    },
    error::ScheduleError,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Scheduled Oscillator
====================

OscNode is the only sound SOURCE in the graph. Everything else (gain
stages, mixers, modulation routings) shapes or combines what sources emit.

A source is silent until its start instant and silent again from its stop
instant on. Both are absolute destination times, so a whole tone is laid out
up front and then handed to the destination to play by itself:

    let mut osc = OscNode::sine();
    osc.frequency_mut()
        .set_value_at_time(880.0, t)?
        .exponential_ramp_to_value_at_time(440.0, t + 0.1)?;
    osc.start(t)?;
    osc.stop(t + 0.1)?;

                  start               stop
    output  ──────┬~~~~~~~~~~~~~~~~~~~┬──────────
                  t                   t + 0.1

The phase is zero at the first rendered frame at or after the start
instant, so every playback of the same schedule produces the same samples.


Frequency
---------

The frequency is an AudioParam (default 440 Hz). On top of its scheduled
value, a modulation signal can be added per frame through `.modulate()`:

    computed_frequency[i] = frequency.value_at(t_i) + modulation[i]

That sum is what makes vibrato, pitch LFOs and FM synthesis possible. It is
clamped to ±Nyquist. Negative frequencies simply run the waveform
backwards.


Lifetime
--------

`is_active()` stays true until a rendered block reaches the stop instant.
A node that was never started reports inactive straight away: it can
never make a sound, so holding it would only leak.
*/

pub struct OscNode {
    osc: OscillatorBlock,
    frequency: AudioParam,
    start_time: Option<f64>,
    stop_time: Option<f64>,
    /// Destination time just past the last rendered frame
    rendered_until: f64,
    modulation: Vec<f32>,
    modulation_len: usize,
}

/// Parameters that can be modulated on an oscillator
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

impl OscNode {
    fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            frequency: AudioParam::new(440.0),
            start_time: None,
            stop_time: None,
            rendered_until: f64::NEG_INFINITY,
            modulation: vec![0.0; MAX_BLOCK_SIZE],
            modulation_len: 0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Sawtooth)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    /// Set the default frequency, used wherever no automation event applies.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.frequency.set_value(freq);
        self
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.osc.waveform()
    }

    pub fn frequency(&self) -> &AudioParam {
        &self.frequency
    }

    pub fn frequency_mut(&mut self) -> &mut AudioParam {
        &mut self.frequency
    }

    /// Schedule the instant the source begins to sound. Only once per node.
    pub fn start(&mut self, at: f64) -> Result<(), ScheduleError> {
        if self.start_time.is_some() {
            return Err(ScheduleError::AlreadyStarted);
        }
        check_time(at)?;
        self.start_time = Some(at);
        Ok(())
    }

    /// Schedule the instant the source falls silent. A later call replaces it.
    pub fn stop(&mut self, at: f64) -> Result<(), ScheduleError> {
        if self.start_time.is_none() {
            return Err(ScheduleError::NotStarted);
        }
        check_time(at)?;
        self.stop_time = Some(at);
        Ok(())
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn stop_time(&self) -> Option<f64> {
        self.stop_time
    }

    /// Whether the source sounds at destination time `time`.
    pub fn is_playing_at(&self, time: f64) -> bool {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) => time >= start && time < stop,
            (Some(start), None) => time >= start,
            _ => false,
        }
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let nyquist = ctx.sample_rate * 0.5;
        let modulated = self.modulation_len >= out.len();

        for (i, sample) in out.iter_mut().enumerate() {
            let time = ctx.time_at(i);
            if !self.is_playing_at(time) {
                *sample = 0.0;
                continue;
            }

            let mut frequency = self.frequency.value_at(time);
            if modulated {
                frequency += self.modulation[i];
            }
            let frequency = frequency.clamp(-nyquist, nyquist);

            *sample = self.osc.next_sample(frequency, ctx.sample_rate);
        }

        // Modulation applies to one block only
        self.modulation_len = 0;
        self.rendered_until = ctx.time_at(out.len());
    }

    fn is_active(&self) -> bool {
        match (self.start_time, self.stop_time) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(stop)) => self.rendered_until < stop,
        }
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        visit(self);
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn set_modulation(&mut self, param: Self::Param, signal: &[f32]) {
        match param {
            OscParam::Frequency => {
                let len = signal.len().min(self.modulation.len());
                self.modulation[..len].copy_from_slice(&signal[..len]);
                self.modulation_len = len;
            }
        }
    }
}

fn check_time(time: f64) -> Result<(), ScheduleError> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidTime { time })
    }
}
