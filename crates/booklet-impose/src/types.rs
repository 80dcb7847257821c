use lopdf::ObjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Assembly failed: {0}")]
    Assembly(String),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US Letter (8.5" × 11"), the fallback when a page carries no
    /// usable MediaBox.
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Opaque handle to a page staged in an output document.
///
/// Issued by a [`DocumentProvider`](crate::assemble::DocumentProvider)
/// and meaningful only to the provider that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHandle(pub ObjectId);

/// Phase of a single booklet request.
///
/// A request only moves forward through these stages; `Failed` is
/// terminal and reachable from `Validating` (empty document) or
/// `Assembling` (provider failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validating,
    Computing,
    Assembling,
    Done,
    Failed,
}
