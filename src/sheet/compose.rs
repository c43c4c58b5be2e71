//! # Document Composer
//!
//! Walks a snapshot of the catalog, renders every card at its planned
//! placement, and closes pages on the planner's break signal.
//!
//! The last page is closed explicitly when it holds at least one card, so
//! a partial page never depends on the sink flushing it.

use tracing::info;

use super::layout::plan;
use super::pdf::PdfSink;
use super::render::{DrawingSink, LabelStyle, render};
use crate::catalog::CardRecord;
use crate::error::Result;
use crate::logos::LogoImage;

/// Render `records` into `sink`. Returns the number of pages emitted.
pub fn compose_into<S: DrawingSink>(
    records: &[CardRecord],
    logo: &LogoImage,
    style: &LabelStyle,
    sink: &mut S,
) -> usize {
    let mut pages = 0;
    let mut page_open = false;

    for (record, placement) in records.iter().zip(plan(records.len())) {
        if !page_open {
            sink.begin_page();
            page_open = true;
        }

        render(record, &placement, logo, style, sink);

        if placement.ends_page() {
            sink.end_page();
            page_open = false;
            pages += 1;
        }
    }

    if page_open {
        sink.end_page();
        pages += 1;
    }

    pages
}

/// Compose the label sheet PDF for `records`.
pub fn compose(records: &[CardRecord], logo: &LogoImage) -> Result<Vec<u8>> {
    let mut sink = PdfSink::new();
    let pages = compose_into(records, logo, &LabelStyle::default(), &mut sink);
    let bytes = sink.finalize()?;

    info!(cards = records.len(), pages, bytes = bytes.len(), "label sheet composed");
    Ok(bytes)
}
