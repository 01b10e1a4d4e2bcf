use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// Renders envelope levels; used as the modulator of an [`Amplify`].
///
/// [`Amplify`]: crate::graph::amplify::Amplify
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    pub fn new(env: Envelope) -> Self {
        Self { env }
    }

    pub fn decay(peak: f32, decay: f32) -> Self {
        Self::new(Envelope::decay(peak, decay))
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
    }
}
