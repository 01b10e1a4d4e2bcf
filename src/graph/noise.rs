use crate::{
    dsp::noise::NoiseBuffer,
    graph::node::{GraphNode, RenderCtx},
};

/// Plays a pre-generated noise buffer from the start, once.
pub struct NoiseNode {
    buffer: NoiseBuffer,
    position: usize,
}

impl NoiseNode {
    pub fn new(buffer: NoiseBuffer) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }
}

impl GraphNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            *sample = self.buffer.get(self.position);
            self.position = self.position.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn plays_buffer_then_silence() {
        let buffer = NoiseBuffer::generate(100, &mut StdRng::seed_from_u64(9));
        let mut node = NoiseNode::new(buffer);
        let ctx = RenderCtx::new(1_000.0, 0.0);

        let mut first = vec![0.0f32; 64];
        node.render_block(&mut first, &ctx);
        let mut second = vec![0.0f32; 64];
        node.render_block(&mut second, &ctx);

        assert!(first.iter().any(|s| s.abs() > 0.0));
        assert!(second[36..].iter().all(|&s| s == 0.0));
    }
}
