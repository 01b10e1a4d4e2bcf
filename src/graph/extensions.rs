use crate::graph::{amplify::Amplify, node::GraphNode, through::Through};

/// Fluent combinators for building voice graphs.
///
/// ```ignore
/// OscNode::sawtooth(55.0)
///     .through(FilterNode::lowpass(sweep))
///     .amplify(EnvNode::decay(0.8, 0.2))
/// ```
pub trait NodeExt: GraphNode + Sized {
    fn amplify<M: GraphNode>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }

    fn through<F: GraphNode>(self, effect: F) -> Through<Self, F> {
        Through::new(self, effect)
    }
}

impl<T: GraphNode> NodeExt for T {}
