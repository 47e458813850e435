#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Phase Accumulator Oscillator
============================

Every periodic waveform here is a function of a single number: the phase.

Vocabulary
----------

  phase       Position within one cycle, kept in [0.0, 1.0). A phase of 0.25
              means a quarter of the way through the cycle.

  increment   How far the phase moves per sample:

                  increment = frequency / sample_rate

              At 440 Hz and 48 kHz the increment is 440 / 48000 ≈ 0.00917,
              so one cycle takes ~109 samples.

  wrap        After each step the phase is folded back into [0.0, 1.0).
              We use rem_euclid so that NEGATIVE frequencies (possible when
              a deep LFO drags the pitch below zero) run the phase backwards
              instead of escaping the range.


Waveform Shapes (one cycle, phase 0 → 1)
----------------------------------------

  Sine        sin(2π·phase)
              Starts at 0, rises to +1 at 0.25.

  Triangle    0 → +1 → -1 → 0
              Starts at 0 and rises, same zero crossing as the sine.

                   ╱╲
                  ╱  ╲
              ───╱────╲────╱
                        ╲╱

  Sawtooth    0 → +1, snap to -1, → 0
              Starts at 0 and rises, so it also lines up with the sine.

  Square      +1 for the first half, -1 for the second.


All shapes start at the zero crossing (or the rising edge for the square),
which keeps the first sample after a scheduled start free of clicks for the
three smooth shapes.

These are naive (non band-limited) waveforms. For short notification tones
the aliasing of the upper harmonics is acceptable.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl OscillatorWaveform {
    /// Evaluate the waveform at `phase` in [0.0, 1.0).
    #[inline]
    pub fn sample(self, phase: f64) -> f32 {
        match self {
            OscillatorWaveform::Sine => (std::f64::consts::TAU * phase).sin() as f32,
            OscillatorWaveform::Triangle => {
                let value = if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                };
                value as f32
            }
            OscillatorWaveform::Sawtooth => {
                let value = if phase < 0.5 {
                    2.0 * phase
                } else {
                    2.0 * phase - 2.0
                };
                value as f32
            }
            OscillatorWaveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f64,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self { waveform, phase: 0.0 }
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

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    /// Emit the current sample, then advance the phase by one sample at `frequency`.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let value = self.waveform.sample(self.phase);
        let increment = frequency as f64 / sample_rate as f64;
        self.phase = (self.phase + increment).rem_euclid(1.0);
        value
    }

    /// Fill `out` at a fixed frequency.
    pub fn render(&mut self, out: &mut [f32], frequency: f32, sample_rate: f32) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(frequency, sample_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn sine_matches_reference() {
        let sample_rate = 48_000.0;
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer, 440.0, sample_rate);

        let n = 12;
        let expected = (TAU * 440.0 * n as f32 / sample_rate).sin();
        assert!(
            (buffer[n] - expected).abs() < 1e-5,
            "expected {expected}, got {}",
            buffer[n]
        );
    }

    #[test]
    fn every_waveform_starts_at_rising_edge() {
        assert_eq!(OscillatorWaveform::Sine.sample(0.0), 0.0);
        assert_eq!(OscillatorWaveform::Triangle.sample(0.0), 0.0);
        assert_eq!(OscillatorWaveform::Sawtooth.sample(0.0), 0.0);
        assert_eq!(OscillatorWaveform::Square.sample(0.0), 1.0);
    }

    #[test]
    fn triangle_peaks_at_quarter_cycle() {
        assert!((OscillatorWaveform::Triangle.sample(0.25) - 1.0).abs() < 1e-6);
        assert!((OscillatorWaveform::Triangle.sample(0.75) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn output_stays_in_unit_range() {
        for waveform in [
            OscillatorWaveform::Sine,
            OscillatorWaveform::Triangle,
            OscillatorWaveform::Sawtooth,
            OscillatorWaveform::Square,
        ] {
            let mut osc = OscillatorBlock::new(waveform);
            let mut buffer = vec![0.0f32; 2048];
            osc.render(&mut buffer, 997.0, 48_000.0);
            assert!(
                buffer.iter().all(|s| (-1.0..=1.0).contains(s)),
                "{waveform:?} left [-1, 1]"
            );
        }
    }

    #[test]
    fn negative_frequency_keeps_phase_wrapped() {
        let mut osc = OscillatorBlock::sawtooth();
        let mut buffer = vec![0.0f32; 512];
        osc.render(&mut buffer, -300.0, 48_000.0);
        assert!(buffer.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
        // Running backwards, the saw first drops below zero
        assert!(buffer[1] < 0.0);
    }

    #[test]
    fn square_has_half_duty_cycle() {
        let mut osc = OscillatorBlock::square();
        let mut buffer = vec![0.0f32; 480];
        // 100 Hz at 48 kHz: exactly one cycle per 480 samples
        osc.render(&mut buffer, 100.0, 48_000.0);
        let high = buffer.iter().filter(|&&s| s > 0.0).count();
        assert!((239..=241).contains(&high), "high for {high} of 480 samples");
    }
}
