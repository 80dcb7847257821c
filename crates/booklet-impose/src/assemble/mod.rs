//! Plan execution against a document backend
//!
//! The assembler walks an [`OutputPlan`] and drives a
//! [`DocumentProvider`], the capability boundary behind which all
//! actual document manipulation lives. The default provider is the
//! lopdf-backed [`PdfProvider`]; tests substitute their own.

mod provider;

pub use provider::PdfProvider;

use crate::plan::{OutputPlan, Placement};
use crate::types::{BookletError, PageHandle, PageSize, Result};

/// Capabilities the assembler needs from a document backend.
///
/// `copy_page` and `create_blank_page` stage a page and hand back an
/// opaque [`PageHandle`]; `append_page` commits it to the output
/// order. `serialize` is terminal: one output document per provider.
pub trait DocumentProvider {
    /// Number of pages in the source document.
    fn page_count(&self) -> usize;

    /// Size of the given source page (0-indexed).
    fn page_size(&self, index: usize) -> Result<PageSize>;

    /// Stage a copy of the given source page (0-indexed).
    fn copy_page(&mut self, index: usize) -> Result<PageHandle>;

    /// Stage an empty page of the given size.
    fn create_blank_page(&mut self, size: PageSize) -> Result<PageHandle>;

    /// Append a staged page to the output document.
    fn append_page(&mut self, handle: PageHandle) -> Result<()>;

    /// Finalize the output document and return its bytes.
    fn serialize(&mut self) -> Result<Vec<u8>>;
}

/// Execute a placement plan and return the serialized output.
///
/// Atomic: the first failing provider operation aborts the run with
/// [`BookletError::Assembly`] and no byte buffer is produced. The
/// source document is never mutated.
pub fn assemble(plan: &OutputPlan, provider: &mut impl DocumentProvider) -> Result<Vec<u8>> {
    for (slot, entry) in plan.entries().iter().enumerate() {
        let handle = match *entry {
            Placement::CopySource { index } => provider.copy_page(index).map_err(|e| {
                BookletError::Assembly(format!("copying source page {}: {}", index, e))
            })?,
            Placement::Blank { size } => provider
                .create_blank_page(size)
                .map_err(|e| BookletError::Assembly(format!("creating blank page: {}", e)))?,
        };
        provider
            .append_page(handle)
            .map_err(|e| BookletError::Assembly(format!("appending output page {}: {}", slot, e)))?;
    }

    provider
        .serialize()
        .map_err(|e| BookletError::Assembly(format!("serializing output: {}", e)))
}
