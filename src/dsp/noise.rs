use rand::Rng;

/// A one-shot buffer of white noise.
///
/// Samples are drawn uniformly from [-1, 1] once, when the buffer is built,
/// then played back in order. Reading past the end yields silence.
pub struct NoiseBuffer {
    samples: Vec<f32>,
}

impl NoiseBuffer {
    pub fn generate<R: Rng>(len: usize, rng: &mut R) -> Self {
        let samples = (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.samples.get(index).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn samples_are_uniform_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = NoiseBuffer::generate(9_600, &mut rng);

        assert_eq!(noise.len(), 9_600);
        assert!((0..noise.len()).all(|i| noise.get(i).abs() <= 1.0));

        let mean = (0..noise.len()).map(|i| noise.get(i)).sum::<f32>() / noise.len() as f32;
        assert!(mean.abs() < 0.05, "mean too far from zero: {mean}");
    }

    #[test]
    fn same_seed_same_noise() {
        let a = NoiseBuffer::generate(64, &mut StdRng::seed_from_u64(1));
        let b = NoiseBuffer::generate(64, &mut StdRng::seed_from_u64(1));
        assert!((0..64).all(|i| a.get(i) == b.get(i)));
    }

    #[test]
    fn silent_past_the_end() {
        let noise = NoiseBuffer::generate(8, &mut StdRng::seed_from_u64(3));
        assert_eq!(noise.get(8), 0.0);
        assert_eq!(noise.get(1_000), 0.0);
    }
}
