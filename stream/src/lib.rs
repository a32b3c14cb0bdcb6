//! Streaming encode/decode adapters for the shiftpage codec.
//!
//! [`StreamEncoder`] and [`StreamDecoder`] apply a
//! [`codec::CodePageRegistry`] incrementally to buffered `std::io` sinks and
//! sources. On the wire each raw code unit is one little-endian `u16`; the
//! shift framing is exactly the registry's.
//!
//! The adapters borrow the registry and own no codec state, only transient
//! line-buffering state. Build the registry first, then hand it to as many
//! adapters as needed.
//!
//! # Example
//!
//! ```
//! use codec::CodePageRegistry;
//! use stream::{StreamDecoder, StreamEncoder};
//!
//! let registry = CodePageRegistry::with_builtin_pages();
//!
//! let mut encoder = StreamEncoder::new(Vec::new(), &registry);
//! encoder.write_text("hello").unwrap();
//! encoder.write_line_separator().unwrap();
//! let bytes = encoder.into_inner().unwrap();
//!
//! let mut decoder = StreamDecoder::new(std::io::Cursor::new(bytes), &registry);
//! assert_eq!(decoder.read_line().unwrap(), Some("hello".to_string()));
//! assert_eq!(decoder.read_line().unwrap(), None);
//! ```

mod decoder;
mod encoder;
mod error;

pub use decoder::StreamDecoder;
pub use encoder::StreamEncoder;
pub use error::{StreamError, StreamResult};
