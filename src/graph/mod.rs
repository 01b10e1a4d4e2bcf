//! Composable building blocks for voice graphs.
//!
//! Graph nodes wrap the DSP primitives with block rendering over voice-local
//! time. Every voice the engine plays is one small graph:
//!
//! ```text
//! source (OscNode | NoiseNode) → [FilterNode] → Amplify × EnvNode
//! ```

/// Multiply two signals together (gain stage).
pub mod amplify;
/// Decay envelope as a renderable node.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.through()`).
pub mod extensions;
/// Lowpass with a swept cutoff.
pub mod filter;
/// Core traits shared by all graph nodes.
pub mod node;
/// White-noise burst source.
pub mod noise;
/// Pitched tone source.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, RenderCtx};
