use crate::{
    graph::{
        node::{GraphNode, RenderCtx},
        oscillator::OscNode,
    },
    MAX_BLOCK_SIZE,
};

/*
Summing
=======

Connecting several sources to the same destination adds them together:

    output[i] = a[i] + b[i] + ...

There is no balance control and no normalisation. Each voice is expected
to carry its own gain stage, the same way every tone routine puts a gain
node between its oscillator and the output. Four voices at 0.15 peak can
reach 0.6 together, and that is intended.

Two flavours:

  Mix<A, B>   Two nodes of any type. Chain it for more:
                  beep_a.mix(beep_b)

  Bus<N>      Any number of nodes of the SAME type, kept in a Vec. Used
              for chords, where every voice is built by the same routine:
                  Bus::from_iter(freqs.iter().map(|&f| voice(f)))

Both forward lifetime and source visits to every member: the sum is active
while any member is.
*/

pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Mix {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Mix<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.source_b.render_block(frames, ctx);

        for (o, b) in out.iter_mut().zip(frames.iter()) {
            *o += *b;
        }
    }

    fn is_active(&self) -> bool {
        self.source_a.is_active() || self.source_b.is_active()
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        self.source_a.visit_sources(visit);
        self.source_b.visit_sources(visit);
    }
}

pub struct Bus<N> {
    pub voices: Vec<N>,
    temp_buffer: Vec<f32>,
}

impl<N> Bus<N> {
    pub fn new(voices: Vec<N>) -> Self {
        Self {
            voices,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N> FromIterator<N> for Bus<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<N: GraphNode> GraphNode for Bus<N> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        out.fill(0.0);
        let frames = &mut self.temp_buffer[..out.len()];

        for voice in &mut self.voices {
            frames.fill(0.0);
            voice.render_block(frames, ctx);
            for (o, v) in out.iter_mut().zip(frames.iter()) {
                *o += *v;
            }
        }
    }

    fn is_active(&self) -> bool {
        self.voices.iter().any(|v| v.is_active())
    }

    fn visit_sources(&self, visit: &mut dyn FnMut(&OscNode)) {
        for voice in &self.voices {
            voice.visit_sources(visit);
        }
    }
}
