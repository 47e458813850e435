use crate::{
    graph::{
        node::{GraphNode, RenderCtx},
        oscillator::OscNode,
    },
    MAX_BLOCK_SIZE,
};

/// Multiply a signal by a modulator, frame by frame.
///
/// With a [`GainNode`](crate::graph::gain::GainNode) as the modulator this is
/// a source routed through a gain stage.
pub struct Amplify<N, M> {
    pub signal: N,
    pub modulator: M,
    temp_buffer: Vec<f32>,
}

impl<N, M> Amplify<N, M> {
    pub fn new(signal: N, modulator: M) -> Self {
        Self {
            signal,
            modulator,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N: GraphNode, M: GraphNode> GraphNode for Amplify<N, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.signal.render_block(out, ctx);

        // Slice temp buffer to match output size (RT-safe, no allocation)
        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.modulator.render_block(frames, ctx);

        for (o, m) in out.iter_mut().zip(frames.iter()) {
            *o *= *m;
        }
    }

    fn is_active(&self) -> bool {
        // A product is silent as soon as either side is
        self.signal.is_active() && self.modulator.is_active()
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        self.signal.visit_sources(visit);
        self.modulator.visit_sources(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, gain::GainNode};

    #[test]
    fn scales_signal_by_gain() {
        let mut osc = OscNode::square().with_frequency(100.0);
        osc.start(0.0).unwrap();
        osc.stop(1.0).unwrap();
        let mut node = osc.amplify(GainNode::with_gain(0.1));

        let mut buffer = vec![0.0f32; 64];
        node.render_block(&mut buffer, &RenderCtx::new(48_000.0, 0.0));
        assert!(buffer.iter().all(|&s| (s.abs() - 0.1).abs() < 1e-6));
    }

    #[test]
    fn follows_signal_lifetime() {
        let mut osc = OscNode::sine();
        osc.start(0.0).unwrap();
        osc.stop(0.01).unwrap();
        let mut node = osc.amplify(GainNode::new());
        assert!(node.is_active());

        let mut buffer = vec![0.0f32; 32];
        node.render_block(&mut buffer, &RenderCtx::new(1_000.0, 0.0));
        assert!(!node.is_active());
    }

    #[test]
    fn visits_sources_on_both_sides() {
        let ring = OscNode::sine().amplify(OscNode::triangle());
        let mut count = 0;
        ring.visit_sources(&mut |_| count += 1);
        assert_eq!(count, 2);
    }
}
