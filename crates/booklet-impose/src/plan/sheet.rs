//! Sheet ordering for saddle-stitch imposition
//!
//! A saddle-stitch booklet is printed 2-up duplex with a short-edge
//! flip: each physical sheet carries four logical pages, and the
//! sheets are folded and nested so that collated pages read in
//! ascending order.
//!
//! **Sheet layout (n = padded page count, sheet i of n/4):**
//!
//! ```text
//! Front:                     Back:
//! +----------+----------+    +----------+----------+
//! | n-2(i-1) |   2i-1   |    |    2i    | n-2i+1   |
//! +----------+----------+    +----------+----------+
//! ```
//!
//! For n=4 the single sheet carries `[4, 1, 2, 3]`; for n=8 the two
//! sheets carry `[8, 1, 2, 7]` and `[6, 3, 4, 5]`. The outermost
//! pages print first so that the innermost sheet ends up at the
//! center of the fold.

use crate::types::{BookletError, Result};

/// Round a page count up to the next multiple of 4.
///
/// Every physical sheet holds exactly four logical pages, so the
/// booklet is padded with blanks up to this count. An empty document
/// cannot be imposed.
pub fn normalized_page_count(page_count: usize) -> Result<usize> {
    if page_count == 0 {
        return Err(BookletError::InvalidDocument(
            "document has no pages".to_string(),
        ));
    }
    Ok(((page_count + 3) / 4) * 4)
}

/// The four logical page positions (1-indexed) carried by one
/// physical sheet, in print order: front-left, front-right,
/// back-left, back-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub front_left: usize,
    pub front_right: usize,
    pub back_left: usize,
    pub back_right: usize,
}

impl Sheet {
    /// Positions in print order.
    pub fn positions(&self) -> [usize; 4] {
        [
            self.front_left,
            self.front_right,
            self.back_left,
            self.back_right,
        ]
    }
}

/// Calculate the sheet-by-sheet page assignment for a padded count.
///
/// `normalized_count` must be a positive multiple of 4 (see
/// [`normalized_page_count`]). Total function: every value in
/// `[1, normalized_count]` appears in exactly one position.
pub fn sheet_order(normalized_count: usize) -> Vec<Sheet> {
    debug_assert!(normalized_count > 0 && normalized_count % 4 == 0);

    let sheets = normalized_count / 4;
    (1..=sheets)
        .map(|i| Sheet {
            front_left: normalized_count - 2 * (i - 1),
            front_right: 2 * i - 1,
            back_left: 2 * i,
            back_right: normalized_count - 2 * i + 1,
        })
        .collect()
}

/// The flattened logical-position sequence for a padded count.
pub fn logical_positions(normalized_count: usize) -> Vec<usize> {
    sheet_order(normalized_count)
        .iter()
        .flat_map(|sheet| sheet.positions())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_counts() {
        assert_eq!(normalized_page_count(1).unwrap(), 4);
        assert_eq!(normalized_page_count(4).unwrap(), 4);
        assert_eq!(normalized_page_count(5).unwrap(), 8);
        assert_eq!(normalized_page_count(8).unwrap(), 8);
        assert_eq!(normalized_page_count(9).unwrap(), 12);
        assert_eq!(normalized_page_count(100).unwrap(), 100);
    }

    #[test]
    fn test_zero_pages_rejected() {
        match normalized_page_count(0) {
            Err(BookletError::InvalidDocument(_)) => {}
            other => panic!("Expected InvalidDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_single_sheet_order() {
        let sheets = sheet_order(4);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].positions(), [4, 1, 2, 3]);
    }

    #[test]
    fn test_two_sheet_order() {
        assert_eq!(logical_positions(8), vec![8, 1, 2, 7, 6, 3, 4, 5]);
    }

    #[test]
    fn test_positions_are_a_permutation() {
        for n in [4, 8, 12, 16, 40, 100] {
            let mut positions = logical_positions(n);
            positions.sort_unstable();
            let expected: Vec<usize> = (1..=n).collect();
            assert_eq!(positions, expected, "not a permutation for n={}", n);
        }
    }

    #[test]
    fn test_front_carries_outermost_pair() {
        // The first printed side of each sheet pairs the highest
        // remaining page with the lowest.
        let sheets = sheet_order(12);
        assert_eq!(sheets[0].front_left, 12);
        assert_eq!(sheets[0].front_right, 1);
        assert_eq!(sheets[1].front_left, 10);
        assert_eq!(sheets[1].front_right, 3);
        assert_eq!(sheets[2].front_left, 8);
        assert_eq!(sheets[2].front_right, 5);
    }
}
