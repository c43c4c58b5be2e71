//! # Placard - Exhibition Label Sheets
//!
//! Placard keeps a small in-memory catalog of exhibition labels and prints
//! them onto A4 sheets of 2 × 4 identical cards. It provides:
//!
//! - **Catalog**: copy-on-write record store with add, delete, and import
//! - **Import**: tolerant delimited-text ingestion with date normalization
//! - **Layout**: deterministic grid pagination
//! - **Rendering**: border, logo, and wrapped label text per card, as PDF
//! - **Server**: web form, JSON API, and downloads
//!
//! ## Quick Start
//!
//! ```
//! use placard::{catalog::Catalog, logos};
//!
//! let mut catalog = Catalog::new(logos::default_logo());
//! catalog.import(b"title,author,height,width,medium,date\nDawn,Lin,30,40,oil,2024-5-6\n")?;
//!
//! let record = &catalog.list()[0];
//! assert_eq!(record.fields.date, "2024/05/06");
//!
//! let pdf = catalog.export()?;
//! std::fs::write(std::env::temp_dir().join("cards.pdf"), pdf)?;
//! # Ok::<(), placard::error::LabelError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Records, store, date normalizer, importer |
//! | [`sheet`] | Layout planner, renderer, PDF composer |
//! | [`logos`] | Card logo registry |
//! | [`preview`] | HTML preview markup |
//! | [`server`] | HTTP front end |
//! | [`error`] | Error types |

pub mod catalog;
pub mod error;
pub mod logos;
pub mod preview;
pub mod server;
pub mod sheet;

// Re-exports for convenience
pub use catalog::{CardFields, CardRecord, Catalog};
pub use error::LabelError;
