use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Multiplies a signal by a modulator, sample by sample.
///
/// With an [`EnvNode`] as modulator this is the voice's gain stage.
///
/// [`EnvNode`]: crate::graph::envelope::EnvNode
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

        // Walk oversized blocks in temp-buffer sized chunks (no allocation)
        let mut offset = 0;
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let frames = &mut self.temp_buffer[..chunk.len()];
            let chunk_ctx = RenderCtx::new(ctx.sample_rate, ctx.sample_time(offset));
            self.modulator.render_block(frames, &chunk_ctx);

            for (o, m) in chunk.iter_mut().zip(frames.iter()) {
                *o *= *m;
            }
            offset += chunk.len();
        }
    }
}
