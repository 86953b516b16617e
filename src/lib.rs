//! fibseq - Fibonacci-style sequence generation behind a request boundary.
//!
//! The crate is built around one pure function, [`generate`], plus the thin
//! adapters needed to put it behind a URL query:
//!
//! - **Cached path**: the canonical seeds `(0, 1)` are answered by slicing a
//!   table evaluated at compile time
//! - **Computed path**: any other seeds are extended on demand, bounded by the
//!   caller's limit and by [`MAX_PREGENERATED`]
//! - **Boundary**: [`request`] parses `n`, `startx` and `starty` out of a query
//!   string and [`response`] turns the outcome into status, content type and body
//!
//! # Example
//!
//! ```rust
//! use fibseq::{generate, Bounds};
//!
//! // Canonical seeds come straight from the table
//! let seq = generate(10, 0, 1).unwrap();
//! assert_eq!(seq.as_slice(), &[0, 1, 1, 2, 3, 5, 8]);
//!
//! // Custom seeds are ordered, then grown until the limit
//! let seq = Bounds::new(5).with_seeds(3, 2).generate().unwrap();
//! assert_eq!(seq.as_slice(), &[2, 3, 5]);
//!
//! // Negative input is rejected
//! assert!(generate(-1, 0, 1).is_err());
//! ```

pub mod error;
pub mod request;
pub mod response;

// Sequence module
pub mod sequence;

// Re-exports for convenience
pub use error::{FibError, FibResult};
pub use request::parse_query;
pub use response::{handle_query, respond, Response, Status};
pub use sequence::{generate, pregenerated, Bounds, Sequence, Strategy, MAX_PREGENERATED};

#[cfg(feature = "wasm")]
pub use sequence::wasm::fibonacci;
