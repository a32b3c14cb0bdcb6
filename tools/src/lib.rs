//! Command-line helpers for the shiftpage codec.
//!
//! This crate backs the `shiftpage-tools` binary:
//!
//! - Encode a text file into a raw unit stream through a mapping
//! - Decode a unit stream back into text
//! - Inspect a mapping: page count, slot usage, effective sizes
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use codec::{CodePageRegistry, Decoded, Encoded};
use serde::Serialize;

/// Loads the registry for a command: from a mapping file when one is given,
/// otherwise the built-in pages.
pub fn load_registry(mapping: Option<&Path>) -> Result<CodePageRegistry> {
    match mapping {
        Some(path) => CodePageRegistry::from_mapping_file(path)
            .with_context(|| format!("load mapping {}", path.display())),
        None => Ok(CodePageRegistry::with_builtin_pages()),
    }
}

/// Encodes `text` and returns the result alongside its wire bytes
/// (little-endian `u16` per unit).
#[must_use]
pub fn encode_text(registry: &CodePageRegistry, text: &str) -> (Encoded, Vec<u8>) {
    let encoded = registry.encode(text);
    let bytes = encoded
        .units
        .iter()
        .flat_map(|unit| unit.to_le_bytes())
        .collect();
    (encoded, bytes)
}

/// Decodes wire bytes (little-endian `u16` per unit) back into text.
///
/// # Errors
///
/// Fails on an odd byte count, which cannot be a whole unit sequence.
pub fn decode_unit_bytes(registry: &CodePageRegistry, bytes: &[u8]) -> Result<Decoded> {
    if bytes.len() % 2 != 0 {
        bail!(
            "input is {} bytes, not a whole number of 16-bit units",
            bytes.len()
        );
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(registry.decode(&units))
}

/// Per-registry inspection report.
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    pub pages: Vec<PageReport>,
}

/// Per-page inspection entry.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    /// Page id; also the sentinel count its characters are framed with.
    pub index: usize,
    /// Occupied slot count.
    pub used_slots: usize,
    /// Highest occupied slot index plus one (0 for an empty page).
    pub size: usize,
    /// The lowest occupied slots, control characters escaped.
    pub sample: String,
}

const SAMPLE_LEN: usize = 24;

/// Builds an inspection report for every registered page.
#[must_use]
pub fn inspect_registry(registry: &CodePageRegistry) -> MappingReport {
    let pages = (0..registry.page_count())
        .filter_map(|index| registry.page(index).map(|page| (index, page)))
        .map(|(index, page)| {
            let sample: String = (0..page.size().min(SAMPLE_LEN))
                .filter_map(|slot| page.slot(slot as u16))
                .flat_map(char::escape_default)
                .collect();
            PageReport {
                index,
                used_slots: page.used_slots(),
                size: page.size(),
                sample,
            }
        })
        .collect();
    MappingReport { pages }
}

/// Formats a report for terminal output.
#[must_use]
pub fn format_report_pretty(report: &MappingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pages: {}", report.pages.len());
    for page in &report.pages {
        let _ = writeln!(
            out,
            "page {}: {} slots used, size {}",
            page.index, page.used_slots, page.size
        );
        let _ = writeln!(out, "  sample: {}", page.sample);
    }
    out
}
