//! Plan computation for booklet imposition
//!
//! The pure half of the pipeline: padding, sheet ordering, and
//! placement resolution. Nothing here touches a document; the result
//! is an [`OutputPlan`] consumed by [`crate::assemble::assemble`].

mod placement;
mod sheet;

pub use placement::{OutputPlan, Placement, resolve_placements};
pub use sheet::{Sheet, logical_positions, normalized_page_count, sheet_order};

use crate::types::{PageSize, Result};

/// Compute the full placement plan for a booklet.
///
/// Pads `page_count` to a multiple of 4, derives the saddle-stitch
/// sheet order, and resolves every position to a page copy or a blank
/// of `reference_size`. Fails with
/// [`InvalidDocument`](crate::BookletError::InvalidDocument) if
/// `page_count` is zero; otherwise deterministic and side-effect
/// free.
pub fn impose_booklet(page_count: usize, reference_size: PageSize) -> Result<OutputPlan> {
    let normalized = normalized_page_count(page_count)?;
    let positions = logical_positions(normalized);
    let entries = resolve_placements(&positions, page_count, reference_size);
    Ok(OutputPlan::new(page_count, entries))
}
