use crate::{
    graph::{
        node::{GraphNode, Modulatable, RenderCtx},
        oscillator::OscNode,
    },
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects a modulation source to a parameter on another node. The source's
output is scaled by `depth` and added to the parameter's scheduled value,
one value per frame:

    param[i] = scheduled_value(t_i) + modulator[i] × depth

Example with a 15 Hz sine LFO, depth 500, on a 1200 Hz oscillator:

    LFO = -1.0  →  1200 + (-1 × 500) =  700 Hz
    LFO =  0.0  →  1200 + ( 0 × 500) = 1200 Hz
    LFO = +1.0  →  1200 + (+1 × 500) = 1700 Hz

The pitch wobbles ±500 Hz fifteen times a second around the scheduled sweep.


Sample-Rate Modulation
----------------------

The modulation is applied PER FRAME, not once per block. That matters
twice here:

  - A 15 Hz LFO with 500 Hz depth changes the pitch by several Hz per
    millisecond. Averaging over a block would flatten the wobble into steps.

  - FM synthesis drives the carrier's frequency with an AUDIO-RATE modulator
    (280 Hz in the zen bell). Block-rate modulation would not produce the
    sidebands at all.


FM Synthesis
------------

Route a modulator through a gain stage (the modulation index) into a
carrier's frequency, with depth 1.0:

    let modulator = OscNode::sine().with_frequency(280.0).amplify(index);
    let bell = OscNode::sine()
        .with_frequency(200.0)
        .modulate(modulator, OscParam::Frequency, 1.0);

The index is how far, in Hz, the carrier swings. A large index spreads
energy into many sidebands (bright, clangy). As it decays toward 1 the
sidebands collapse and the tone settles into a pure sine. The 200:280 ratio
is not an integer ratio, so the sidebands fall between harmonics and the
result sounds inharmonic and metallic, like a bell.
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub source: S,
    pub modulator: L,
    pub param: S::Param,
    pub depth: f32,
    mod_buffer: Vec<f32>,
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, modulator: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            modulator,
            param,
            depth,
            mod_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let len = out.len();
        let frames = &mut self.mod_buffer[..len];

        self.modulator.render_block(frames, ctx);
        for m in frames.iter_mut() {
            *m *= self.depth;
        }

        self.source.set_modulation(self.param, frames);
        self.source.render_block(out, ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        self.source.visit_sources(visit);
        self.modulator.visit_sources(visit);
    }
}
