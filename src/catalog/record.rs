//! Card record types.

use serde::{Deserialize, Serialize};

/// The user-editable fields of one exhibition label.
///
/// Dimensions are kept as text and shown verbatim; the unit is always
/// centimetres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFields {
    pub title: String,
    pub author: String,
    pub height: String,
    pub width: String,
    pub medium: String,
    /// `YYYY/MM/DD` when normalized, the raw input otherwise, or empty.
    pub date: String,
}

impl CardFields {
    /// Format the dimensions line, e.g. `"30 cm x 40 cm"`.
    pub fn size_line(&self) -> String {
        format!("{} cm x {} cm", self.height, self.width)
    }
}

/// One label in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Short random token, unique for the lifetime of the catalog.
    pub id: String,
    #[serde(flatten)]
    pub fields: CardFields,
}

impl CardRecord {
    pub fn new(id: impl Into<String>, fields: CardFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
