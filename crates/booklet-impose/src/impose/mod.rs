//! Booklet imposition pipeline
//!
//! This module drives the whole process for one document:
//! 1. Validate the source (page count, reference size)
//! 2. Compute the placement plan
//! 3. Assemble the output and serialize it
//!
//! Each invocation threads an explicit session through the
//! `Idle → Validating → Computing → Assembling → Done` stages, with
//! `Failed` terminal from `Validating` or `Assembling`.

mod io;

pub use io::{load_pdf, write_booklet};

use crate::assemble::{DocumentProvider, PdfProvider, assemble};
use crate::plan::impose_booklet;
use crate::types::{BookletError, Result, Stage};
use lopdf::Document;

/// Impose a document into saddle-stitch booklet order.
///
/// Runs the blocking pipeline on a worker thread and returns the
/// serialized output bytes.
pub async fn impose(document: &Document) -> Result<Vec<u8>> {
    let document = document.clone();
    tokio::task::spawn_blocking(move || impose_sync(&document)).await?
}

/// Blocking variant of [`impose`].
pub fn impose_sync(document: &Document) -> Result<Vec<u8>> {
    let mut session = Session::new();
    match run(document, &mut session) {
        Ok(bytes) => {
            session.enter(Stage::Done);
            Ok(bytes)
        }
        Err(e) => {
            session.enter(Stage::Failed);
            Err(e)
        }
    }
}

fn run(document: &Document, session: &mut Session) -> Result<Vec<u8>> {
    session.enter(Stage::Validating);
    let mut provider = PdfProvider::new(document);
    let page_count = provider.page_count();
    if page_count == 0 {
        return Err(BookletError::InvalidDocument(
            "document has no pages".to_string(),
        ));
    }
    // Blank fillers are sized to the first page.
    let reference = provider.page_size(0)?;

    session.enter(Stage::Computing);
    let plan = impose_booklet(page_count, reference)?;
    log::debug!(
        "imposing {} pages onto {} sheets ({} blanks)",
        page_count,
        plan.sheet_count(),
        plan.blank_count()
    );

    session.enter(Stage::Assembling);
    assemble(&plan, &mut provider)
}

/// One request's position in the pipeline. Stages only move forward.
struct Session {
    stage: Stage,
}

impl Session {
    fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    fn enter(&mut self, stage: Stage) {
        log::debug!("booklet pipeline: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }
}
