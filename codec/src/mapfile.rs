//! Mapping-file parsing and the built-in fallback pages.
//!
//! A mapping file is line-oriented text: each non-empty line is the character
//! sequence for one page, in slot order starting at offset 0. Control
//! characters are written with the escapes `\n \r \f \b \t \' \" \\`.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{MapfileError, RegistryResult};
use crate::registry::CodePageRegistry;

/// The built-in Latin/punctuation page, used when no mapping file is given.
const BUILTIN_LATIN: &str = "abcdefghijklmnopqrstuvwxyz+-*/= ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&()_`~[{]};:'\",<.>?\\|\n\t\u{8}\r";

/// The built-in Japanese syllabary page.
const BUILTIN_KANA: &str = "ーぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをんァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶ゛゜";

/// Expands the mapping-file escape sequences in one line.
///
/// Recognized escapes are `\n \r \f \b \t \' \" \\`. An unrecognized escape
/// (or a trailing backslash) is kept literally.
#[must_use]
pub fn unescape_mapping_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('b') => out.push('\u{8}'),
            Some('t') => out.push('\t'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl CodePageRegistry {
    /// Builds the fallback registry: the Latin/punctuation page as page 0,
    /// the Japanese syllabary page as page 1.
    #[must_use]
    pub fn with_builtin_pages() -> Self {
        let mut registry = Self::new();
        // Infallible: both sequences are far below page capacity.
        registry.add_page(BUILTIN_LATIN).expect("latin page fits");
        registry.add_page(BUILTIN_KANA).expect("kana page fits");
        registry
    }

    /// Parses mapping-file contents: one page per non-empty line, registered
    /// in file order at offset 0.
    ///
    /// # Errors
    ///
    /// Propagates registration failures (a line longer than a page).
    pub fn from_mapping_str(contents: &str) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            registry.add_page(&unescape_mapping_line(line))?;
        }
        Ok(registry)
    }

    /// Loads a registry from a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`MapfileError::Io`] if the file cannot be read and
    /// [`MapfileError::Registry`] if a line fails to register.
    pub fn from_mapping_file(path: impl AsRef<Path>) -> Result<Self, MapfileError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_mapping_str(&contents)?)
    }

    /// Loads a registry from a mapping file, falling back to the built-in
    /// pages when the file is missing or effectively blank.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`from_mapping_file`](Self::from_mapping_file),
    /// except a missing file is not an error.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Result<Self, MapfileError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::with_builtin_pages()),
            Err(e) => return Err(e.into()),
        };
        if contents.lines().all(str::is_empty) {
            return Ok(Self::with_builtin_pages());
        }
        Ok(Self::from_mapping_str(&contents)?)
    }
}
