//! # Catalog
//!
//! The session's label catalog: an explicit state object wrapping the
//! current [`RecordStore`] snapshot.
//!
//! Every mutation swaps in a new store and reports what changed through a
//! [`StoreChange`] value. Readers holding a snapshot from [`Catalog::snapshot`]
//! never observe later mutations.
//!
//! ## Example
//!
//! ```
//! use placard::catalog::{CardFields, Catalog};
//! use placard::logos;
//!
//! let mut catalog = Catalog::new(logos::default_logo());
//! catalog.add(CardFields { title: "Dawn".into(), ..Default::default() }, 2)?;
//! assert_eq!(catalog.snapshot().len(), 2);
//!
//! let pdf = catalog.export()?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), placard::LabelError>(())
//! ```

pub mod date;
pub mod import;
pub mod record;
pub mod store;

pub use date::normalize_date;
pub use import::import_records;
pub use record::{CardFields, CardRecord};
pub use store::RecordStore;

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::{LabelError, Result};
use crate::logos::LogoImage;
use crate::{preview, sheet};

/// Largest number of copies a single add may create.
pub const MAX_QUANTITY: u32 = 1000;

/// What a catalog mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StoreChange {
    Added { ids: Vec<String> },
    Removed { id: String },
    Imported { ids: Vec<String> },
}

/// Session state: the current record store plus the sheet logo.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<RecordStore>,
    logo: Arc<LogoImage>,
}

impl Catalog {
    /// Create an empty catalog rendering with `logo`.
    pub fn new(logo: LogoImage) -> Self {
        Self {
            store: Arc::new(RecordStore::new()),
            logo: Arc::new(logo),
        }
    }

    /// Current store. Later mutations do not affect the returned value.
    pub fn snapshot(&self) -> Arc<RecordStore> {
        Arc::clone(&self.store)
    }

    /// Records in catalog order.
    pub fn list(&self) -> Vec<CardRecord> {
        self.store.records().to_vec()
    }

    pub fn logo(&self) -> Arc<LogoImage> {
        Arc::clone(&self.logo)
    }

    /// Add `quantity` copies of `fields`, each under its own id.
    ///
    /// `quantity` must be in `1..=MAX_QUANTITY`.
    pub fn add(&mut self, mut fields: CardFields, quantity: u32) -> Result<StoreChange> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(LabelError::InvalidQuantity(quantity));
        }
        fields.date = normalize_date(&fields.date);

        let batch = vec![fields; quantity as usize];
        let (next, ids) = self.store.with_appended(batch);
        self.store = Arc::new(next);

        info!(count = ids.len(), total = self.store.len(), "cards added");
        Ok(StoreChange::Added { ids })
    }

    /// Remove the card `id`.
    pub fn delete(&mut self, id: &str) -> Result<StoreChange> {
        let (next, removed) = self
            .store
            .without(id)
            .ok_or_else(|| LabelError::CardNotFound(id.to_string()))?;
        self.store = Arc::new(next);

        info!(id = %removed.id, total = self.store.len(), "card deleted");
        Ok(StoreChange::Removed { id: removed.id })
    }

    /// Import an uploaded delimited text file.
    ///
    /// The store is unchanged when the file fails to parse.
    pub fn import(&mut self, file_bytes: &[u8]) -> Result<StoreChange> {
        let text = std::str::from_utf8(file_bytes)
            .map_err(|e| LabelError::Parse(format!("file is not valid UTF-8: {}", e)))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let (next, ids) = import_records(text, &self.store)?;
        self.store = Arc::new(next);

        info!(count = ids.len(), total = self.store.len(), "cards imported");
        Ok(StoreChange::Imported { ids })
    }

    /// Compose the label sheet PDF from the current snapshot.
    pub fn export(&self) -> Result<Vec<u8>> {
        let snapshot = self.snapshot();
        sheet::compose(snapshot.records(), &self.logo)
    }

    /// On-screen preview markup, one card per record.
    pub fn preview_html(&self) -> String {
        preview::card_list(self.store.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logos;

    fn catalog() -> Catalog {
        Catalog::new(logos::default_logo())
    }

    fn titled(title: &str) -> CardFields {
        CardFields {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_quantity() {
        let mut catalog = catalog();
        let change = catalog.add(titled("Dawn"), 3).unwrap();

        let StoreChange::Added { ids } = change else {
            panic!("expected Added");
        };
        assert_eq!(ids.len(), 3);
        assert_eq!(catalog.list().len(), 3);
        assert!(catalog.list().iter().all(|r| r.fields.title == "Dawn"));
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.add(titled("Dawn"), 0),
            Err(LabelError::InvalidQuantity(0))
        ));
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_add_quantity_upper_bound() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.add(titled("Dawn"), u32::MAX),
            Err(LabelError::InvalidQuantity(u32::MAX))
        ));
        assert!(matches!(
            catalog.add(titled("Dawn"), MAX_QUANTITY + 1),
            Err(LabelError::InvalidQuantity(_))
        ));
        assert!(catalog.list().is_empty());

        catalog.add(titled("Dawn"), MAX_QUANTITY).unwrap();
        assert_eq!(catalog.list().len(), MAX_QUANTITY as usize);
    }

    #[test]
    fn test_add_normalizes_date() {
        let mut catalog = catalog();
        let fields = CardFields {
            date: "2024-5-6".into(),
            ..Default::default()
        };
        catalog.add(fields, 1).unwrap();
        assert_eq!(catalog.list()[0].fields.date, "2024/05/06");
    }

    #[test]
    fn test_delete() {
        let mut catalog = catalog();
        catalog.add(titled("a"), 1).unwrap();
        catalog.add(titled("b"), 1).unwrap();
        let id = catalog.list()[0].id.clone();

        let change = catalog.delete(&id).unwrap();

        assert_eq!(change, StoreChange::Removed { id });
        assert_eq!(catalog.list().len(), 1);
        assert_eq!(catalog.list()[0].fields.title, "b");
    }

    #[test]
    fn test_delete_unknown() {
        let mut catalog = catalog();
        catalog.add(titled("a"), 1).unwrap();
        assert!(matches!(
            catalog.delete("missing"),
            Err(LabelError::CardNotFound(_))
        ));
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut catalog = catalog();
        catalog.add(titled("a"), 2).unwrap();
        let snapshot = catalog.snapshot();

        catalog.add(titled("b"), 1).unwrap();
        let id = snapshot.records()[0].id.clone();
        catalog.delete(&id).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(catalog.snapshot().len(), 2);
        assert!(snapshot.contains(&id));
    }

    #[test]
    fn test_import_with_bom() {
        let mut catalog = catalog();
        let bytes = "\u{feff}title,author\nDawn,Lin\n".as_bytes();
        let change = catalog.import(bytes).unwrap();

        assert!(matches!(change, StoreChange::Imported { ref ids } if ids.len() == 1));
        assert_eq!(catalog.list()[0].fields.title, "Dawn");
    }

    #[test]
    fn test_import_invalid_utf8() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.import(&[0x74, 0xff, 0xfe]),
            Err(LabelError::Parse(_))
        ));
    }

    #[test]
    fn test_export_produces_pdf() {
        let mut catalog = catalog();
        catalog.add(titled("Dawn"), 1).unwrap();
        let bytes = catalog.export().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_change_serializes_tagged() {
        let change = StoreChange::Removed { id: "abc".into() };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["change"], "removed");
        assert_eq!(json["id"], "abc");
    }
}
