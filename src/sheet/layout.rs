//! # Grid Layout Planner
//!
//! Assigns each record, by its position in catalog order, to a page and a
//! grid cell.
//!
//! For global index `i`:
//!
//! ```text
//! position = i % 8      page = i / 8
//! col = position % 2    row  = position / 2
//! x = col * card_width
//! y = page_height - (row + 1) * card_height
//! ```
//!
//! A page break follows every eighth card. A trailing partial page has no
//! break of its own; the composer closes it when the document ends.

use serde::Serialize;

use super::geometry::{CARDS_PER_PAGE, COLUMNS, card_height, card_width, page_height};

/// Where one record lands on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Global index in catalog order.
    pub index: usize,
    pub page: usize,
    pub col: usize,
    pub row: usize,
    /// Left edge of the card, in points.
    pub x: f32,
    /// Bottom edge of the card, in points.
    pub y: f32,
}

impl Placement {
    /// Compute the placement of global index `index`.
    pub fn at(index: usize) -> Self {
        let position = index % CARDS_PER_PAGE;
        let col = position % COLUMNS;
        let row = position / COLUMNS;

        Self {
            index,
            page: index / CARDS_PER_PAGE,
            col,
            row,
            x: col as f32 * card_width(),
            y: page_height() - (row + 1) as f32 * card_height(),
        }
    }

    /// Slot on the page, 0..8.
    pub fn position(&self) -> usize {
        self.index % CARDS_PER_PAGE
    }

    /// Whether the page is closed right after this card.
    pub fn ends_page(&self) -> bool {
        self.position() == CARDS_PER_PAGE - 1
    }

    /// Top edge of the card, in points.
    pub fn top(&self) -> f32 {
        self.y + card_height()
    }
}

/// Place `n` records.
pub fn plan(n: usize) -> Vec<Placement> {
    (0..n).map(Placement::at).collect()
}

/// Number of pages needed for `n` records.
pub fn page_count(n: usize) -> usize {
    n.div_ceil(CARDS_PER_PAGE)
}
