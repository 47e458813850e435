use std::cell::{Cell, RefCell};

use crate::{
    graph::{GraphNode, RenderCtx},
    synth::{mixer::GraphMixer, Destination},
    MAX_BLOCK_SIZE,
};

/// A destination that renders into memory instead of a device.
///
/// The clock only moves when you render, so everything scheduled on it is
/// deterministic. Graphs are released as soon as they have played out, same
/// as on the live output.
///
/// ```
/// use tonekit::{play_tone_on, OfflineContext, SoundId};
///
/// let mut ctx = OfflineContext::new(48_000.0);
/// play_tone_on(Some(&ctx), SoundId::Digital);
/// let samples = ctx.render(0.5);
/// assert!(samples.iter().any(|s| s.abs() > 0.0));
/// assert_eq!(ctx.active_graphs(), 0);
/// ```
pub struct OfflineContext {
    sample_rate: f32,
    frames: Cell<u64>,
    pending: RefCell<Vec<Box<dyn GraphNode>>>,
    mixer: GraphMixer,
}

impl OfflineContext {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            frames: Cell::new(0),
            pending: RefCell::new(Vec::new()),
            mixer: GraphMixer::new(),
        }
    }

    /// Render `seconds` of output, rounded to whole frames.
    pub fn render(&mut self, seconds: f64) -> Vec<f32> {
        let frames = (seconds * self.sample_rate as f64).round().max(0.0) as usize;
        let mut out = vec![0.0; frames];
        self.render_into(&mut out);
        out
    }

    /// Render `out.len()` frames and advance the clock by as many.
    pub fn render_into(&mut self, out: &mut [f32]) {
        for graph in self.pending.get_mut().drain(..) {
            self.mixer.add(graph);
        }

        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            let ctx = RenderCtx::new(self.sample_rate, self.current_time());
            self.mixer.render_block(block, &ctx);
            self.frames.set(self.frames.get() + block.len() as u64);
        }
    }

    /// Graphs scheduled and not yet released.
    pub fn active_graphs(&self) -> usize {
        self.mixer.len() + self.pending.borrow().len()
    }
}

impl Destination for OfflineContext {
    fn current_time(&self) -> f64 {
        self.frames.get() as f64 / self.sample_rate as f64
    }

    fn schedule(&self, graph: Box<dyn GraphNode>) {
        self.pending.borrow_mut().push(graph);
    }
}
