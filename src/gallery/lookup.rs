// SPDX-License-Identifier: MPL-2.0
//! Heading and type-name lookups.
//!
//! Lookups return a [`LookupError`] instead of failing during rendering. What
//! the gallery shows for an unresolvable document is decided by
//! [`LookupMissPolicy`].

use crate::domain::{DocumentType, DocumentTypeId, DocumentViewModel, ItemLocalId, Order};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading of documents that are not tied to a line item.
pub const ORDER_DOCUMENT_HEADING: &str = "Order Document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    UnknownDocumentType(DocumentTypeId),
    UnknownOrderItem(ItemLocalId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownDocumentType(id) => write!(f, "No document type with id {id}"),
            LookupError::UnknownOrderItem(id) => write!(f, "No order item with local id {id}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Returns the name of the document type `type_id`.
///
/// # Errors
///
/// [`LookupError::UnknownDocumentType`] when no type has that id.
pub fn document_type_name(
    types: &[DocumentType],
    type_id: DocumentTypeId,
) -> Result<&str, LookupError> {
    types
        .iter()
        .find(|t| t.id == type_id)
        .map(|t| t.name.as_str())
        .ok_or(LookupError::UnknownDocumentType(type_id))
}

/// Builds the heading shown above a document.
///
/// Order-wide documents read "Order Document"; item documents read
/// "Item {no}" followed by ": {location}" when the item has a location.
/// A local id of 0 is treated as "no item".
///
/// # Errors
///
/// [`LookupError::UnknownOrderItem`] when the document points at an item the
/// order does not contain.
pub fn document_heading(order: &Order, doc: &DocumentViewModel) -> Result<String, LookupError> {
    let Some(local_id) = doc.item_local_id.filter(|id| id.value() != 0) else {
        return Ok(ORDER_DOCUMENT_HEADING.to_string());
    };

    let item = order
        .find_item(local_id)
        .ok_or(LookupError::UnknownOrderItem(local_id))?;

    Ok(match item.location() {
        Some(location) => format!("Item {}: {}", item.item_no, location),
        None => format!("Item {}", item.item_no),
    })
}

/// What to render for a document whose type or item cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMissPolicy {
    /// Render the tile with a placeholder label.
    #[default]
    Placeholder,
    /// Leave the document out of the gallery.
    Hide,
}

/// A label that either resolved or needs a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Resolved(String),
    Unresolved,
}

impl Label {
    /// Returns the resolved text, or `placeholder` when unresolved.
    #[must_use]
    pub fn or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Label::Resolved(text) => text,
            Label::Unresolved => placeholder,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Label::Resolved(_))
    }
}

impl<E> From<Result<String, E>> for Label {
    fn from(result: Result<String, E>) -> Self {
        result.map_or(Label::Unresolved, Label::Resolved)
    }
}

/// Text shown on a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLabels {
    pub heading: Label,
    pub type_name: Label,
}

impl TileLabels {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.heading.is_resolved() && self.type_name.is_resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentId, OrderItem};

    fn order(location: Option<&str>) -> Order {
        Order::new(vec![OrderItem::new(
            ItemLocalId::new(3),
            7,
            location.map(str::to_string),
        )])
    }

    fn doc(item: Option<u32>) -> DocumentViewModel {
        DocumentViewModel {
            id: DocumentId::new(1),
            type_id: DocumentTypeId::new(2),
            name: "scan".into(),
            description: String::new(),
            blob: None,
            item_local_id: item.map(ItemLocalId::new),
        }
    }

    #[test]
    fn order_wide_documents_get_fixed_heading() {
        assert_eq!(document_heading(&order(None), &doc(None)), Ok("Order Document".into()));
        assert_eq!(document_heading(&order(None), &doc(Some(0))), Ok("Order Document".into()));
    }

    #[test]
    fn item_heading_without_location() {
        assert_eq!(document_heading(&order(Some("")), &doc(Some(3))), Ok("Item 7".into()));
        assert_eq!(document_heading(&order(None), &doc(Some(3))), Ok("Item 7".into()));
    }

    #[test]
    fn item_heading_with_location() {
        assert_eq!(
            document_heading(&order(Some("Bay A")), &doc(Some(3))),
            Ok("Item 7: Bay A".into())
        );
    }

    #[test]
    fn unknown_item_is_a_lookup_error() {
        assert_eq!(
            document_heading(&order(None), &doc(Some(9))),
            Err(LookupError::UnknownOrderItem(ItemLocalId::new(9)))
        );
    }

    #[test]
    fn type_name_lookup() {
        let types = vec![
            DocumentType::new(DocumentTypeId::new(1), "Photo"),
            DocumentType::new(DocumentTypeId::new(2), "Invoice"),
        ];
        assert_eq!(document_type_name(&types, DocumentTypeId::new(2)), Ok("Invoice"));
        assert_eq!(
            document_type_name(&types, DocumentTypeId::new(5)),
            Err(LookupError::UnknownDocumentType(DocumentTypeId::new(5)))
        );
    }

    #[test]
    fn label_falls_back_to_placeholder() {
        let resolved = Label::from(Ok::<_, LookupError>("Item 7".to_string()));
        let missing = Label::from(Err::<String, _>(LookupError::UnknownOrderItem(
            ItemLocalId::new(9),
        )));
        assert_eq!(resolved.or("Unknown item"), "Item 7");
        assert_eq!(missing.or("Unknown item"), "Unknown item");
    }

    #[test]
    fn policy_serializes_in_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            policy: LookupMissPolicy,
        }
        let text = toml::to_string(&Wrapper {
            policy: LookupMissPolicy::Hide,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "policy = \"hide\"");
    }
}
