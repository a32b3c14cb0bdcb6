//! Incremental decoding from a raw unit source.

use std::io::{self, BufReader, Read};

use codec::{CodePageRegistry, SHIFT_SENTINEL};

use crate::error::{StreamError, StreamResult};

const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Decodes characters incrementally from a source of raw code units.
///
/// Units are read as little-endian `u16` values. The decoder accumulates each
/// shift-sentinel run and resolves it together with its payload unit through
/// a single registry [`decode`](CodePageRegistry::decode) call, so its output
/// matches a whole-buffer decode exactly.
///
/// The only state carried between calls is the `\r\n` normalization flag used
/// by [`read_line`](Self::read_line).
#[derive(Debug)]
pub struct StreamDecoder<'a, R: Read> {
    registry: &'a CodePageRegistry,
    source: BufReader<R>,
    skip_line_feed: bool,
}

impl<'a, R: Read> StreamDecoder<'a, R> {
    /// Creates a decoder over `source` with the default buffer size.
    pub fn new(source: R, registry: &'a CodePageRegistry) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, source, registry)
    }

    /// Creates a decoder over `source` with the given buffer size in bytes.
    pub fn with_capacity(capacity: usize, source: R, registry: &'a CodePageRegistry) -> Self {
        Self {
            registry,
            source: BufReader::with_capacity(capacity, source),
            skip_line_feed: false,
        }
    }

    /// Reads the next decodable character.
    ///
    /// Units that resolve to an empty slot or an unregistered page are
    /// skipped and reading continues, mirroring the registry's drop policy.
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the source fails, or
    /// [`StreamError::TruncatedUnit`] if it ends on an odd byte.
    pub fn read_char(&mut self) -> StreamResult<Option<char>> {
        let mut run: Vec<u16> = Vec::new();
        while let Some(unit) = self.read_raw_unit()? {
            run.push(unit);
            if unit == SHIFT_SENTINEL {
                continue;
            }
            let decoded = self.registry.decode(&run);
            if let Some(c) = decoded.text.chars().next() {
                return Ok(Some(c));
            }
            // Undecodable unit: the sentinel run is spent, start over.
            run.clear();
        }
        Ok(None)
    }

    /// Reads characters up to the next line terminator.
    ///
    /// `\n` and `\r` each end a line; `\r\n` counts as a single terminator
    /// even when the two characters arrive in separate calls. Returns
    /// `Ok(None)` only if the source was already exhausted, so an empty line
    /// is `Ok(Some(""))`, distinct from end of stream. The terminator is not
    /// included in the returned line.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`read_char`](Self::read_char).
    pub fn read_line(&mut self) -> StreamResult<Option<String>> {
        let mut line = String::new();
        let mut read_any = false;
        let mut pending_skip = std::mem::take(&mut self.skip_line_feed);
        loop {
            let Some(c) = self.read_char()? else {
                return Ok(read_any.then_some(line));
            };
            if pending_skip {
                pending_skip = false;
                if c == '\n' {
                    // Second half of a \r\n split across calls.
                    continue;
                }
            }
            read_any = true;
            match c {
                '\n' => return Ok(Some(line)),
                '\r' => {
                    self.skip_line_feed = true;
                    return Ok(Some(line));
                }
                _ => line.push(c),
            }
        }
    }

    /// Consumes the decoder, returning the wrapped source.
    ///
    /// Unconsumed buffered bytes are discarded.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    fn read_raw_unit(&mut self) -> StreamResult<Option<u16>> {
        let mut buf = [0u8; 2];
        let mut filled = 0;
        while filled < 2 {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(StreamError::TruncatedUnit),
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(u16::from_le_bytes(buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn unit_bytes(units: &[u16]) -> Vec<u8> {
        units.iter().flat_map(|unit| unit.to_le_bytes()).collect()
    }

    fn registry() -> CodePageRegistry {
        let mut registry = CodePageRegistry::new();
        registry.add_page("ab\r\n").unwrap();
        registry.add_page("xy").unwrap();
        registry
    }

    #[test]
    fn read_char_page_zero() {
        let registry = registry();
        let bytes = unit_bytes(&[0, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_char().unwrap(), Some('a'));
        assert_eq!(decoder.read_char().unwrap(), Some('b'));
        assert_eq!(decoder.read_char().unwrap(), None);
    }

    #[test]
    fn read_char_follows_sentinel_run() {
        let registry = registry();
        let bytes = unit_bytes(&[SHIFT_SENTINEL, 0, 0]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_char().unwrap(), Some('x'));
        assert_eq!(decoder.read_char().unwrap(), Some('a'));
    }

    #[test]
    fn read_char_skips_undecodable_unit() {
        let registry = registry();
        let bytes = unit_bytes(&[900, 0]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_char().unwrap(), Some('a'));
        assert_eq!(decoder.read_char().unwrap(), None);
    }

    #[test]
    fn read_char_truncated_unit() {
        let registry = registry();
        let mut bytes = unit_bytes(&[0]);
        bytes.push(0xAA);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_char().unwrap(), Some('a'));
        assert!(matches!(
            decoder.read_char(),
            Err(StreamError::TruncatedUnit)
        ));
    }

    #[test]
    fn read_line_splits_on_line_feed() {
        let registry = registry();
        // "a\nb"
        let bytes = unit_bytes(&[0, 3, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(decoder.read_line().unwrap(), Some("b".to_string()));
        assert_eq!(decoder.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_crlf_is_one_terminator() {
        let registry = registry();
        // "a\r\nb"
        let bytes = unit_bytes(&[0, 2, 3, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(decoder.read_line().unwrap(), Some("b".to_string()));
        assert_eq!(decoder.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_lone_cr_then_char() {
        let registry = registry();
        // "a\rb": the character after \r starts the next line as-is.
        let bytes = unit_bytes(&[0, 2, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(decoder.read_line().unwrap(), Some("b".to_string()));
    }

    #[test]
    fn read_line_empty_line_is_not_end_of_stream() {
        let registry = registry();
        // "a\n\nb"
        let bytes = unit_bytes(&[0, 3, 3, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(decoder.read_line().unwrap(), Some(String::new()));
        assert_eq!(decoder.read_line().unwrap(), Some("b".to_string()));
        assert_eq!(decoder.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_trailing_crlf_yields_no_phantom_line() {
        let registry = registry();
        // "a\r\n"
        let bytes = unit_bytes(&[0, 2, 3]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("a".to_string()));
        assert_eq!(decoder.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_without_terminator_at_eof() {
        let registry = registry();
        let bytes = unit_bytes(&[0, 1]);
        let mut decoder = StreamDecoder::new(Cursor::new(bytes), &registry);
        assert_eq!(decoder.read_line().unwrap(), Some("ab".to_string()));
        assert_eq!(decoder.read_line().unwrap(), None);
    }

    #[test]
    fn into_inner_returns_source() {
        let registry = registry();
        let decoder = StreamDecoder::new(Cursor::new(Vec::new()), &registry);
        let cursor = decoder.into_inner();
        assert_eq!(cursor.position(), 0);
    }
}
