//! # tdl
//!
//! True Damerau-Levenshtein edit distance.
//!
//! ## Features
//!
//! - Insertions, deletions, substitutions and adjacent transpositions at unit cost
//! - Edits on transposed characters are allowed (unlike optimal string alignment)
//! - Reusable engine with a workspace allocated once per instance
//! - Explicit capacity errors instead of sentinel distances
//!
//! ```
//! use tdl::DamerauLevenshtein;
//!
//! let mut engine = DamerauLevenshtein::new(64).unwrap();
//! assert_eq!(engine.distance("ca", "abc").unwrap(), 2);
//!
//! // One-off calls can use the shared engine.
//! assert_eq!(tdl::distance("ab", "ba").unwrap(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod shared;

pub use config::{DEFAULT_MAX_SIZE, EngineConfig};
pub use engine::DamerauLevenshtein;
pub use error::{Result, TdlError};
pub use shared::distance;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
