use crate::{
    dsp::automation::AudioParam,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Gain Node
=========

A GainNode renders its gain curve: one multiplier per frame. On its own it
is a control signal, not sound. Put it behind a source with `.amplify()` and
it becomes a VCA:

    output[i] = signal[i] × gain[i]

The curve comes from an AudioParam (default 1.0, unity), so the same node
covers a flat level, an attack/decay envelope, or a modulation index:

    // Percussive decay: loud, then fade
    let mut env = GainNode::new();
    env.gain_mut()
        .set_value_at_time(0.3, t)?
        .exponential_ramp_to_value_at_time(0.01, t + 0.1)?;
    let beep = OscNode::sine().amplify(env);

    // FM index: scales a modulator's ±1 output to ±300 Hz
    let mut index = GainNode::new();
    index.gain_mut().set_value_at_time(300.0, t)?;
    let modulator = OscNode::sine().with_frequency(280.0).amplify(index);

A gain node has no lifetime of its own. It reports active forever and leaves
it to the sources it shapes to decide when the graph is done.
*/

pub struct GainNode {
    gain: AudioParam,
    modulation: Vec<f32>,
    modulation_len: usize,
}

/// Parameters that can be modulated on a gain stage
#[derive(Clone, Copy, Debug)]
pub enum GainParam {
    /// Linear gain multiplier
    Gain,
}

impl GainNode {
    pub fn new() -> Self {
        Self::with_gain(1.0)
    }

    /// Gain stage with a fixed default level.
    pub fn with_gain(gain: f32) -> Self {
        Self {
            gain: AudioParam::new(gain),
            modulation: vec![0.0; MAX_BLOCK_SIZE],
            modulation_len: 0,
        }
    }

    pub fn gain(&self) -> &AudioParam {
        &self.gain
    }

    pub fn gain_mut(&mut self) -> &mut AudioParam {
        &mut self.gain
    }
}

impl Default for GainNode {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphNode for GainNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let modulated = self.modulation_len >= out.len();
        for (i, sample) in out.iter_mut().enumerate() {
            let mut gain = self.gain.value_at(ctx.time_at(i));
            if modulated {
                gain += self.modulation[i];
            }
            *sample = gain;
        }
        self.modulation_len = 0;
    }
}

impl Modulatable for GainNode {
    type Param = GainParam;

    fn set_modulation(&mut self, param: Self::Param, signal: &[f32]) {
        match param {
            GainParam::Gain => {
                let len = signal.len().min(self.modulation.len());
                self.modulation[..len].copy_from_slice(&signal[..len]);
                self.modulation_len = len;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_by_default() {
        let mut gain = GainNode::new();
        let mut buffer = vec![0.0f32; 16];
        gain.render_block(&mut buffer, &RenderCtx::new(48_000.0, 0.0));
        assert!(buffer.iter().all(|&g| g == 1.0));
    }

    #[test]
    fn renders_scheduled_curve() {
        let mut gain = GainNode::new();
        gain.gain_mut()
            .set_value_at_time(0.0, 0.0)
            .unwrap()
            .linear_ramp_to_value_at_time(0.5, 0.05)
            .unwrap();

        let mut buffer = vec![0.0f32; 100];
        gain.render_block(&mut buffer, &RenderCtx::new(1_000.0, 0.0));

        assert_eq!(buffer[0], 0.0);
        assert!((buffer[25] - 0.25).abs() < 1e-6);
        assert!((buffer[99] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn modulation_offsets_gain() {
        let mut gain = GainNode::with_gain(0.5);
        gain.set_modulation(GainParam::Gain, &[0.25; 8]);

        let mut buffer = vec![0.0f32; 8];
        gain.render_block(&mut buffer, &RenderCtx::new(1_000.0, 0.0));
        assert!(buffer.iter().all(|&g| (g - 0.75).abs() < 1e-6));

        // Consumed after one block
        gain.render_block(&mut buffer, &RenderCtx::new(1_000.0, 0.008));
        assert!(buffer.iter().all(|&g| (g - 0.5).abs() < 1e-6));
    }
}
