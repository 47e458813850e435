use crate::graph::oscillator::OscNode;

/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - time: Destination time of the first frame in the block, in seconds
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub time: f64,
}

impl RenderCtx {
    pub fn new(sample_rate: f32, time: f64) -> Self {
        Self { sample_rate, time }
    }

    /// Destination time of frame `index` within the block.
    #[inline]
    pub fn time_at(&self, index: usize) -> f64 {
        self.time + index as f64 / self.sample_rate as f64
    }
}

/// Trait for nodes whose parameters accept an audio-rate modulation signal
pub trait Modulatable: Send {
    type Param: Copy + Send;

    /// Signal added on top of the scheduled value of `param` for the next
    /// rendered block. One value per frame.
    fn set_modulation(&mut self, param: Self::Param, signal: &[f32]);
}

/// Core trait for audio processing graph nodes
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Check if this node can still produce sound
    ///
    /// Destinations release a graph once this turns false.
    fn is_active(&self) -> bool {
        true
    }

    /// Visit every scheduled source in the graph.
    ///
    /// Default implementation visits nothing (passive nodes).
    fn visit_sources(&self, _visit: &mut dyn FnMut(&OscNode)) {}
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        (**self).visit_sources(visit)
    }
}

/// Latest stop instant over every source in `node`.
///
/// `None` when a source was never told to stop (or never started), which
/// means the graph has no bounded lifetime.
pub fn end_time(node: &dyn GraphNode) -> Option<f64> {
    let mut end: Option<f64> = Some(f64::NEG_INFINITY);
    let mut sources = 0usize;
    node.visit_sources(&mut |osc| {
        sources += 1;
        end = match (end, osc.start_time(), osc.stop_time()) {
            (Some(current), Some(_), Some(stop)) => Some(current.max(stop)),
            _ => None,
        };
    });
    if sources == 0 {
        return None;
    }
    end
}
