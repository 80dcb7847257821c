use crate::plan::normalized_page_count;
use crate::types::Result;

/// Statistics about a booklet imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Page count after padding to a multiple of 4
    pub padded_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Number of physical sheets
    pub sheets: usize,
}

/// Calculate statistics for the imposition
pub fn calculate_statistics(page_count: usize) -> Result<BookletStatistics> {
    let padded_pages = normalized_page_count(page_count)?;

    Ok(BookletStatistics {
        source_pages: page_count,
        padded_pages,
        blank_pages_added: padded_pages - page_count,
        sheets: padded_pages / 4,
    })
}
