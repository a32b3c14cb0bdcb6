//! Diagnostic-carrying results for the best-effort encode/decode paths.
//!
//! Unmappable input never aborts a pass. Instead the offending character or
//! unit is dropped and recorded, so callers can observe exactly what was
//! lost. This replaces the original design of printing to a global error
//! stream.

use std::fmt;

use crate::VERSION;

/// The result of an encode pass: the raw unit sequence plus everything that
/// had to be dropped to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoded {
    /// The raw code units, shift framing included.
    pub units: Vec<u16>,
    /// Characters with no slot in any registered page, in input order.
    pub skipped: Vec<SkippedChar>,
}

impl Encoded {
    /// Returns `true` if no character was dropped.
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The result of a decode pass: the text plus every unit that was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// The decoded text.
    pub text: String,
    /// Units that resolved to an empty slot or an unregistered page.
    pub skipped: Vec<SkippedUnit>,
}

impl Decoded {
    /// Returns `true` if no unit was dropped.
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A character dropped during encoding because no registered page holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChar {
    /// The unmappable character.
    pub ch: char,
    /// Character index within the input text.
    pub position: usize,
}

impl fmt::Display for SkippedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no mapping for character {:?} at position {} (shiftpage v{VERSION})",
            self.ch, self.position
        )
    }
}

/// A unit dropped during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedUnit {
    /// The raw payload unit.
    pub unit: u16,
    /// The page selected by the preceding sentinel run.
    pub page: usize,
    /// Unit index within the input sequence.
    pub position: usize,
}

impl fmt::Display for SkippedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no character at slot {} of page {} for unit at position {} (shiftpage v{VERSION})",
            self.unit, self.page, self.position
        )
    }
}
