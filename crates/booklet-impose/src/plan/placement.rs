//! Placement resolution
//!
//! Maps the logical-position sequence onto the source document: real
//! pages become copies, padding positions become blank fillers sized
//! to the reference page.

use crate::types::PageSize;

/// What to place at one output position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Copy the 0-indexed source page into the next output slot.
    CopySource { index: usize },
    /// Insert an empty page of the given size.
    Blank { size: PageSize },
}

/// The complete, ordered placement plan for one booklet.
///
/// Immutable once computed. Every source page index appears in
/// exactly one `CopySource` entry; the remaining entries are `Blank`
/// padding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputPlan {
    source_pages: usize,
    entries: Vec<Placement>,
}

impl OutputPlan {
    pub(crate) fn new(source_pages: usize, entries: Vec<Placement>) -> Self {
        Self {
            source_pages,
            entries,
        }
    }

    /// Placements in output order.
    pub fn entries(&self) -> &[Placement] {
        &self.entries
    }

    /// Number of output pages (the padded page count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of real pages in the source document.
    pub fn source_pages(&self) -> usize {
        self.source_pages
    }

    /// Number of physical sheets the plan fills.
    pub fn sheet_count(&self) -> usize {
        self.entries.len() / 4
    }

    /// Number of blank filler pages in the plan.
    pub fn blank_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Placement::Blank { .. }))
            .count()
    }
}

/// Resolve each logical position to a placement.
///
/// Positions are 1-indexed; a position within the source page count
/// becomes a copy of that page (0-indexed), anything beyond it a
/// blank of the reference size. The position sequence is a
/// permutation of `[1, n]`, so each source index is emitted exactly
/// once.
pub fn resolve_placements(
    positions: &[usize],
    page_count: usize,
    reference: PageSize,
) -> Vec<Placement> {
    positions
        .iter()
        .map(|&position| {
            let index = position - 1;
            if index < page_count {
                Placement::CopySource { index }
            } else {
                Placement::Blank { size: reference }
            }
        })
        .collect()
}
