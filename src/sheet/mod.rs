//! # Label Sheet
//!
//! Layout and rendering of catalog records onto A4 sheets of 2 × 4 cards.
//!
//! ## Pipeline
//!
//! ```text
//! records ──► layout::plan ──► render::render ──► DrawingSink ──► PDF bytes
//!                 (page, col, row, x, y)   (border, logo, text)
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | Fixed page and card dimensions |
//! | [`layout`] | Grid placement and page breaks |
//! | [`text`] | Metrics and word wrap |
//! | [`render`] | Card drawing and the sink trait |
//! | [`pdf`] | PDF sink |
//! | [`compose`] | Whole-document driver |

pub mod compose;
pub mod geometry;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod text;

pub use compose::{compose, compose_into};
pub use layout::{Placement, plan};
pub use pdf::PdfSink;
pub use render::{DrawingSink, LabelStyle, Rect, TextBlock};
