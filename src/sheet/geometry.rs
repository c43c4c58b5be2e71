//! # Sheet Geometry
//!
//! Physical layout of the label sheet. There is exactly one layout: an A4
//! portrait page cut into a 2 × 4 grid of 105 × 74.25 mm cards, which tiles
//! the page edge to edge.
//!
//! ```text
//! ├──── 105mm ────┼──── 105mm ────┤
//! ┌───────────────┬───────────────┐ ┬
//! │   0 (c0,r0)   │   1 (c1,r0)   │ 74.25mm
//! ├───────────────┼───────────────┤ ┴
//! │   2 (c0,r1)   │   3 (c1,r1)   │
//! ├───────────────┼───────────────┤
//! │   4 (c0,r2)   │   5 (c1,r2)   │
//! ├───────────────┼───────────────┤
//! │   6 (c0,r3)   │   7 (c1,r3)   │
//! └───────────────┴───────────────┘
//! ```
//!
//! All drawing coordinates are PDF points with the origin at the bottom-left
//! of the page.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to points.
#[inline]
pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// Page width (A4 portrait).
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// Page height (A4 portrait).
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const CARD_WIDTH_MM: f32 = 105.0;
pub const CARD_HEIGHT_MM: f32 = 74.25;

pub const COLUMNS: usize = 2;
pub const ROWS: usize = 4;
pub const CARDS_PER_PAGE: usize = COLUMNS * ROWS;

pub fn page_width() -> f32 {
    mm(PAGE_WIDTH_MM)
}

pub fn page_height() -> f32 {
    mm(PAGE_HEIGHT_MM)
}

pub fn card_width() -> f32 {
    mm(CARD_WIDTH_MM)
}

pub fn card_height() -> f32 {
    mm(CARD_HEIGHT_MM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_in_points() {
        assert!((page_width() - 595.276).abs() < 0.01);
        assert!((page_height() - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_grid_tiles_page() {
        assert_eq!(CARD_WIDTH_MM * COLUMNS as f32, PAGE_WIDTH_MM);
        assert_eq!(CARD_HEIGHT_MM * ROWS as f32, PAGE_HEIGHT_MM);
        assert_eq!(CARDS_PER_PAGE, 8);
    }
}
