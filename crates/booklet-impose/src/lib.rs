pub mod assemble;
pub mod impose;
pub mod plan;
mod stats;
mod types;

pub use assemble::{DocumentProvider, PdfProvider, assemble};
pub use impose::{impose, impose_sync, load_pdf, write_booklet};
pub use plan::{OutputPlan, Placement, Sheet, impose_booklet};
pub use stats::{BookletStatistics, calculate_statistics};
pub use types::*;
