//! Ordered code-page registry and the shift-escaped encode/decode algorithms.

use page::CodePage;

use crate::diag::{Decoded, Encoded, SkippedChar, SkippedUnit};
use crate::error::{RegistryError, RegistryResult};

/// The reserved raw value that shifts page selection.
///
/// Repeated `p` times immediately before a payload unit, it selects page `p`.
/// It is never a valid slot index: pages hold 65,535 slots, indices
/// `0..=65534`.
pub const SHIFT_SENTINEL: u16 = 0xFFFF;

/// An ordered collection of [`CodePage`]s with shift-escaped encoding.
///
/// Page order is fixed at registration time and defines the sentinel count
/// each page's characters are framed with; pages are never reordered or
/// removed. The intended discipline is register-then-read: build the registry
/// up front, then share it immutably with the stream adapters.
///
/// Encoding scans pages in order and picks the first page containing the
/// character, so earlier pages cost fewer sentinel units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePageRegistry {
    pages: Vec<CodePage>,
}

impl CodePageRegistry {
    /// Creates a registry with no pages.
    ///
    /// At least one page must be added before encode/decode traffic begins;
    /// on an empty registry the best-effort paths drop everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page with the given id, if registered.
    #[must_use]
    pub fn page(&self, page: usize) -> Option<&CodePage> {
        self.pages.get(page)
    }

    /// Registers a new page holding `seq` starting at slot 0.
    ///
    /// Returns the id of the new page.
    ///
    /// # Errors
    ///
    /// Propagates [`page::PageError::CapacityExceeded`] if `seq` is longer
    /// than a page.
    pub fn add_page(&mut self, seq: &str) -> RegistryResult<usize> {
        self.add_page_at(seq, 0)
    }

    /// Registers a new page holding `seq` starting at `offset`.
    ///
    /// Returns the id of the new page.
    ///
    /// # Errors
    ///
    /// Propagates [`page::PageError::CapacityExceeded`] if the sequence does
    /// not fit at `offset`.
    pub fn add_page_at(&mut self, seq: &str, offset: usize) -> RegistryResult<usize> {
        let id = self.pages.len();
        let mut page = CodePage::new();
        page.place(seq, offset)
            .map_err(|source| RegistryError::Page { page: id, source })?;
        self.pages.push(page);
        Ok(id)
    }

    /// Appends `seq` to an existing page, auto-packing each character into
    /// the lowest free slot.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownPage`] for an unregistered id, or
    /// wraps [`page::PageError::PageFull`] if the page cannot hold `seq`.
    pub fn append(&mut self, page: usize, seq: &str) -> RegistryResult<()> {
        let target = self.page_mut(page)?;
        target
            .pack_into(seq)
            .map_err(|source| RegistryError::Page { page, source })
    }

    /// Appends `seq` to an existing page at an explicit offset, refusing to
    /// overwrite occupied slots.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownPage`] for an unregistered id, or
    /// wraps [`page::PageError::SlotCollision`] /
    /// [`page::PageError::CapacityExceeded`] from the placement.
    pub fn append_at(&mut self, page: usize, seq: &str, offset: usize) -> RegistryResult<()> {
        let target = self.page_mut(page)?;
        target
            .place_at(seq, offset)
            .map_err(|source| RegistryError::Page { page, source })
    }

    /// Encodes `text` into a raw unit sequence.
    ///
    /// Each character resolves to the first page containing it (lowest slot
    /// on duplicates) and is framed with one sentinel per page index.
    /// Characters absent from every page are dropped and recorded in
    /// [`Encoded::skipped`]; encoding always continues.
    #[must_use]
    pub fn encode(&self, text: &str) -> Encoded {
        let mut encoded = Encoded::default();
        for (position, ch) in text.chars().enumerate() {
            let found = self
                .pages
                .iter()
                .enumerate()
                .find_map(|(id, page)| page.first_slot_of(ch).map(|slot| (id, slot)));
            match found {
                Some((id, slot)) => {
                    encoded
                        .units
                        .extend(std::iter::repeat(SHIFT_SENTINEL).take(id));
                    encoded.units.push(slot);
                }
                None => encoded.skipped.push(SkippedChar { ch, position }),
            }
        }
        encoded
    }

    /// Decodes a raw unit sequence back into text.
    ///
    /// A run of `p` sentinels selects page `p` for the following payload
    /// unit. Units addressing an empty slot or an unregistered page are
    /// dropped and recorded in [`Decoded::skipped`]; a trailing sentinel run
    /// with no payload unit is dropped silently. Decoding always continues.
    #[must_use]
    pub fn decode(&self, units: &[u16]) -> Decoded {
        let mut decoded = Decoded::default();
        let mut i = 0;
        while i < units.len() {
            let run_start = i;
            while i < units.len() && units[i] == SHIFT_SENTINEL {
                i += 1;
            }
            let Some(&unit) = units.get(i) else {
                break;
            };
            let page = i - run_start;
            match self.pages.get(page).and_then(|p| p.slot(unit)) {
                Some(ch) => decoded.text.push(ch),
                None => decoded.skipped.push(SkippedUnit {
                    unit,
                    page,
                    position: i,
                }),
            }
            i += 1;
        }
        decoded
    }

    fn page_mut(&mut self, page: usize) -> RegistryResult<&mut CodePage> {
        let registered = self.pages.len();
        self.pages
            .get_mut(page)
            .ok_or(RegistryError::UnknownPage { page, registered })
    }
}
