use crate::{
    graph::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Sums every scheduled graph into one output and drops graphs once they
/// have played out.
///
/// Playbacks do not know about each other: two tones scheduled back to back
/// simply overlap and add.
pub struct GraphMixer {
    graphs: Vec<Box<dyn GraphNode>>,
    limit: usize,
    temp_buffer: Vec<f32>,
}

impl GraphMixer {
    /// A mixer with no limit on how many graphs it holds.
    pub fn new() -> Self {
        Self {
            graphs: Vec::new(),
            limit: usize::MAX,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Pre-size the active list for `capacity` graphs. [`is_full`](Self::is_full)
    /// reports when that many are held.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graphs: Vec::with_capacity(capacity),
            limit: capacity,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn add(&mut self, graph: Box<dyn GraphNode>) {
        self.graphs.push(graph);
    }

    /// Number of graphs still held.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// True once the active list holds as many graphs as it was sized for.
    pub fn is_full(&self) -> bool {
        self.graphs.len() >= self.limit
    }

    /// Render one block (at most `MAX_BLOCK_SIZE` frames) of the sum of all
    /// graphs, then drop the ones that finished.
    pub fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.render_block_with(out, ctx, drop);
    }

    /// Like [`render_block`](Self::render_block), but finished graphs are
    /// handed to `release` instead of being dropped here.
    pub fn render_block_with(
        &mut self,
        out: &mut [f32],
        ctx: &RenderCtx,
        mut release: impl FnMut(Box<dyn GraphNode>),
    ) {
        out.fill(0.0);
        let frames = &mut self.temp_buffer[..out.len()];

        for graph in &mut self.graphs {
            frames.fill(0.0);
            graph.render_block(frames, ctx);
            for (o, s) in out.iter_mut().zip(frames.iter()) {
                *o += *s;
            }
        }

        // In place, keeping summing order
        let mut i = 0;
        while i < self.graphs.len() {
            if self.graphs[i].is_active() {
                i += 1;
            } else {
                release(self.graphs.remove(i));
            }
        }
    }
}

impl Default for GraphMixer {
    fn default() -> Self {
        Self::new()
    }
}
