use crate::{
    dsp::{filter::Lowpass, ramp::ExpCurve},
    graph::node::{GraphNode, RenderCtx},
};

/// Lowpass whose cutoff follows a curve over the voice's lifetime.
///
/// ```ignore
/// // Bass pluck: open to 1 kHz in 50 ms, close back to 200 Hz by 200 ms
/// OscNode::sawtooth(55.0)
///     .through(FilterNode::lowpass(ExpCurve::sweep(200.0, 1000.0, 0.05, 200.0, 0.2)))
/// ```
pub struct FilterNode {
    filter: Lowpass,
    cutoff: ExpCurve,
}

impl FilterNode {
    pub fn lowpass(cutoff: ExpCurve) -> Self {
        Self {
            filter: Lowpass::new(),
            cutoff,
        }
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for (i, sample) in out.iter_mut().enumerate() {
            let cutoff = self.cutoff.value_at(ctx.sample_time(i) as f32);
            *sample = self.filter.next_sample(*sample, cutoff, ctx.sample_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, oscillator::OscNode};

    fn energy(buffer: &[f32]) -> f32 {
        buffer.iter().map(|s| s * s).sum::<f32>() / buffer.len() as f32
    }

    #[test]
    fn sweep_is_brightest_near_its_peak() {
        let sample_rate = 48_000.0;
        let mut pluck = OscNode::sawtooth(220.0).through(FilterNode::lowpass(ExpCurve::sweep(
            200.0, 1000.0, 0.05, 200.0, 0.2,
        )));

        // 10 ms windows: around the 1 kHz peak vs. the closed tail
        let mut buffer = vec![0.0f32; 9_600];
        pluck.render_block(&mut buffer, &RenderCtx::new(sample_rate, 0.0));

        let peak_window = &buffer[2_160..2_640]; // 45..55 ms
        let tail_window = &buffer[9_120..9_600]; // 190..200 ms

        assert!(energy(peak_window) > energy(tail_window));
    }
}
