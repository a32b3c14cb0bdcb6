//! Incremental encoding to a raw unit sink.

use std::io::{BufWriter, Write};

use codec::{CodePageRegistry, SkippedChar};

use crate::error::{StreamError, StreamResult};

const DEFAULT_BUFFER_SIZE: usize = 8192;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Encodes text incrementally into a sink of raw code units.
///
/// Units are written as little-endian `u16` values. The platform line
/// separator is encoded once at construction, so
/// [`write_line_separator`](Self::write_line_separator) costs no registry
/// lookups; its characters must be mappable (the built-in default page maps
/// them) or the separator write is silently empty.
///
/// Output is buffered; it is flushed by [`flush`](Self::flush) and
/// [`into_inner`](Self::into_inner), or on drop.
#[derive(Debug)]
pub struct StreamEncoder<'a, W: Write> {
    registry: &'a CodePageRegistry,
    sink: BufWriter<W>,
    line_separator: Vec<u16>,
}

impl<'a, W: Write> StreamEncoder<'a, W> {
    /// Creates an encoder over `sink` with the default buffer size.
    pub fn new(sink: W, registry: &'a CodePageRegistry) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, sink, registry)
    }

    /// Creates an encoder over `sink` with the given buffer size in bytes.
    pub fn with_capacity(capacity: usize, sink: W, registry: &'a CodePageRegistry) -> Self {
        Self {
            registry,
            sink: BufWriter::with_capacity(capacity, sink),
            line_separator: registry.encode(LINE_SEPARATOR).units,
        }
    }

    /// Encodes a single character and writes its unit sequence.
    ///
    /// Returns the drop diagnostics: one entry if the character is
    /// unmappable, in which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the sink fails.
    pub fn write_char(&mut self, c: char) -> StreamResult<Vec<SkippedChar>> {
        let mut buf = [0u8; 4];
        self.write_text(c.encode_utf8(&mut buf))
    }

    /// Encodes `text` in one registry pass and writes the unit sequence.
    ///
    /// Unmappable characters are dropped from the output and returned as
    /// diagnostics; the write itself always proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the sink fails.
    pub fn write_text(&mut self, text: &str) -> StreamResult<Vec<SkippedChar>> {
        let encoded = self.registry.encode(text);
        for unit in &encoded.units {
            self.sink.write_all(&unit.to_le_bytes())?;
        }
        Ok(encoded.skipped)
    }

    /// Writes the pre-encoded platform line separator.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the sink fails.
    pub fn write_line_separator(&mut self) -> StreamResult<()> {
        for unit in &self.line_separator {
            self.sink.write_all(&unit.to_le_bytes())?;
        }
        Ok(())
    }

    /// Flushes buffered output to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the sink fails.
    pub fn flush(&mut self) -> StreamResult<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Flushes and consumes the encoder, returning the wrapped sink.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the final flush fails.
    pub fn into_inner(self) -> StreamResult<W> {
        self.sink
            .into_inner()
            .map_err(|e| StreamError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CodePageRegistry {
        let mut registry = CodePageRegistry::new();
        registry.add_page("ab\r\n").unwrap();
        registry.add_page("xy").unwrap();
        registry
    }

    fn units_of(bytes: &[u8]) -> Vec<u16> {
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    #[test]
    fn write_char_emits_framed_units() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        assert!(encoder.write_char('a').unwrap().is_empty());
        assert!(encoder.write_char('x').unwrap().is_empty());
        let bytes = encoder.into_inner().unwrap();
        assert_eq!(units_of(&bytes), vec![0, 0xFFFF, 0]);
    }

    #[test]
    fn write_text_single_pass() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        assert!(encoder.write_text("abx").unwrap().is_empty());
        let bytes = encoder.into_inner().unwrap();
        assert_eq!(units_of(&bytes), vec![0, 1, 0xFFFF, 0]);
    }

    #[test]
    fn write_text_reports_dropped_chars() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        let skipped = encoder.write_text("a!b").unwrap();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].ch, '!');
        let bytes = encoder.into_inner().unwrap();
        assert_eq!(units_of(&bytes), vec![0, 1]);
    }

    #[test]
    fn write_unmappable_char_writes_nothing() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        let skipped = encoder.write_char('€').unwrap();
        assert_eq!(skipped.len(), 1);
        let bytes = encoder.into_inner().unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn line_separator_is_encoded_through_page_zero() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        encoder.write_line_separator().unwrap();
        let bytes = encoder.into_inner().unwrap();
        let expected = registry.encode(LINE_SEPARATOR).units;
        assert_eq!(units_of(&bytes), expected);
        assert!(!expected.is_empty(), "separator must be mappable here");
    }

    #[test]
    fn flush_pushes_buffered_units() {
        let registry = registry();
        let mut encoder = StreamEncoder::new(Vec::new(), &registry);
        encoder.write_text("ab").unwrap();
        encoder.flush().unwrap();
        let bytes = encoder.into_inner().unwrap();
        assert_eq!(units_of(&bytes).len(), 2);
    }
}
