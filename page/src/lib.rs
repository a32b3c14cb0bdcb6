//! Fixed-capacity code-page slot tables for the shiftpage codec.
//!
//! This crate provides [`CodePage`], an ordered table of 65,535 slots each
//! holding one character or nothing. It is the leaf data structure of the
//! codec: it knows nothing about shift framing or streams, only slot
//! arithmetic.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every placement is range-checked up front.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use page::{CodePage, PAGE_CAPACITY};
//!
//! let mut page = CodePage::new();
//! page.place("abc", 0).unwrap();
//! page.pack_into("xy").unwrap();
//!
//! assert_eq!(page.first_slot_of('x'), Some(3));
//! assert_eq!(page.used_slots(), 5);
//! assert_eq!(page.capacity(), PAGE_CAPACITY);
//! ```

mod error;
mod page;

pub use error::{PageError, PageResult};
pub use page::{CodePage, PAGE_CAPACITY};
