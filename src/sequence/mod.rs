//! Sequence generation module.
//!
//! Provides the generator, its input/output models and the pregenerated
//! table for the canonical seeds.

pub mod generator;
pub mod model;
pub mod table;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use generator::generate;
pub use model::{Bounds, Sequence, Strategy, DEFAULT_START_A, DEFAULT_START_B};
pub use table::{pregenerated, MAX_PREGENERATED, PREGENERATED_LEN};
