use crate::graph::{
    amplify::Amplify,
    mix::Mix,
    modulate::Modulate,
    node::{GraphNode, Modulatable},
};

pub trait NodeExt: GraphNode + Sized {
    fn amplify<M>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }

    fn modulate<M: GraphNode>(
        self,
        modulator: M,
        param: <Self as Modulatable>::Param,
        depth: f32,
    ) -> Modulate<Self, M>
    where
        Self: Modulatable,
    {
        Modulate::new(self, modulator, param, depth)
    }

    fn mix<M: GraphNode>(self, source: M) -> Mix<Self, M> {
        Mix::new(self, source)
    }
}

impl<T: GraphNode> NodeExt for T {}
