//! Shift-escaped multi-page character encoding and decoding.
//!
//! This is the engine crate of shiftpage: it owns page registration and the
//! character↔unit algorithms. Text maps to 16-bit raw code units drawn from
//! one or more ordered [`page::CodePage`]s; the reserved value
//! [`SHIFT_SENTINEL`], repeated `p` times before a payload unit, selects
//! page `p`.
//!
//! # Design Principles
//!
//! - **Configuration fails loudly** - registration errors carry the page id,
//!   offset, and colliding slot.
//! - **Data degrades quietly** - unmappable characters and undecodable units
//!   are dropped and reported as diagnostics, never as errors, so a pass over
//!   ordinary text cannot abort.
//! - **Exact inverses on mappable text** - `decode(encode(t)) == t` whenever
//!   every character of `t` is registered somewhere.
//!
//! # Example
//!
//! ```
//! use codec::{CodePageRegistry, SHIFT_SENTINEL};
//!
//! let mut registry = CodePageRegistry::new();
//! registry.add_page("ab").unwrap();
//! registry.add_page("xy").unwrap();
//!
//! let encoded = registry.encode("ax");
//! assert_eq!(encoded.units, vec![0, SHIFT_SENTINEL, 0]);
//! assert_eq!(registry.decode(&encoded.units).text, "ax");
//! ```

mod diag;
mod error;
mod mapfile;
mod registry;

pub use diag::{Decoded, Encoded, SkippedChar, SkippedUnit};
pub use error::{MapfileError, RegistryError, RegistryResult};
pub use mapfile::unescape_mapping_line;
pub use registry::{CodePageRegistry, SHIFT_SENTINEL};

/// Codec version, surfaced in unmappable-character diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
