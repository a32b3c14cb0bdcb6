//! Fixed-capacity slot table mapping slot indices to characters.

use crate::error::{PageError, PageResult};

/// Number of slots in every code page.
///
/// Slot indices therefore range over `0..=65534`, which keeps the raw value
/// `0xFFFF` free for use as the shift sentinel in the encoded stream.
pub const PAGE_CAPACITY: usize = 65_535;

/// A fixed-capacity ordered table mapping slot index to character.
///
/// Pages start empty and are filled by [`place`](Self::place),
/// [`place_at`](Self::place_at), and [`pack_into`](Self::pack_into).
/// A character may occupy multiple slots; lookups always resolve to the
/// lowest occupied index.
#[derive(Clone, PartialEq, Eq)]
pub struct CodePage {
    slots: Vec<Option<char>>,
}

impl Default for CodePage {
    fn default() -> Self {
        Self {
            slots: vec![None; PAGE_CAPACITY],
        }
    }
}

impl CodePage {
    /// Creates an empty page with all slots free.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of slots in the page.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        PAGE_CAPACITY
    }

    /// Returns `true` if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns the effective size of the page: the highest occupied slot
    /// index plus one, or 0 for an empty page.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |index| index + 1)
    }

    /// Returns the character stored at `slot`, if any.
    ///
    /// An out-of-range slot (including the sentinel value `0xFFFF`) is `None`.
    #[must_use]
    pub fn slot(&self, slot: u16) -> Option<char> {
        self.slots.get(usize::from(slot)).copied().flatten()
    }

    /// Returns the lowest slot index holding `c`, or `None` if the page does
    /// not contain it.
    #[must_use]
    pub fn first_slot_of(&self, c: char) -> Option<u16> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(c))
            .map(|index| index as u16)
    }

    /// Returns the lowest free slot index, or `None` if the page is full.
    #[must_use]
    pub fn next_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Writes `seq` into consecutive slots starting at `offset`.
    ///
    /// Occupied target slots are overwritten; this is the primitive used to
    /// fill a freshly created page.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::CapacityExceeded`] if the range would extend past
    /// the end of the page.
    pub fn place(&mut self, seq: &str, offset: usize) -> PageResult<()> {
        let len = seq.chars().count();
        self.check_range(offset, len)?;
        for (k, c) in seq.chars().enumerate() {
            self.slots[offset + k] = Some(c);
        }
        Ok(())
    }

    /// Writes `seq` into consecutive slots starting at `offset`, refusing to
    /// overwrite.
    ///
    /// The whole target range is checked before any slot is written, so a
    /// failed placement leaves the page unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::CapacityExceeded`] if the range would extend past
    /// the end of the page, or [`PageError::SlotCollision`] naming the first
    /// occupied slot in the range.
    pub fn place_at(&mut self, seq: &str, offset: usize) -> PageResult<()> {
        let len = seq.chars().count();
        self.check_range(offset, len)?;
        for index in offset..offset + len {
            if self.slots[index].is_some() {
                return Err(PageError::SlotCollision { offset, index });
            }
        }
        for (k, c) in seq.chars().enumerate() {
            self.slots[offset + k] = Some(c);
        }
        Ok(())
    }

    /// Writes each character of `seq`, in order, into the lowest free slot.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::PageFull`] if the occupied-slot count plus the
    /// sequence length exceeds the page capacity. This gate reproduces the
    /// capacity arithmetic the rest of the format was built against.
    pub fn pack_into(&mut self, seq: &str) -> PageResult<()> {
        let requested = seq.chars().count();
        let used = self.used_slots();
        if used + requested > PAGE_CAPACITY {
            return Err(PageError::PageFull {
                requested,
                used,
                capacity: PAGE_CAPACITY,
            });
        }
        let mut cursor = 0;
        for c in seq.chars() {
            // The gate above guarantees a free slot exists.
            while self.slots[cursor].is_some() {
                cursor += 1;
            }
            self.slots[cursor] = Some(c);
        }
        Ok(())
    }

    fn check_range(&self, offset: usize, len: usize) -> PageResult<()> {
        if offset + len > PAGE_CAPACITY {
            return Err(PageError::CapacityExceeded {
                offset,
                len,
                capacity: PAGE_CAPACITY,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodePage")
            .field("used_slots", &self.used_slots())
            .field("size", &self.size())
            .finish()
    }
}
