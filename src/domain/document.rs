// SPDX-License-Identifier: MPL-2.0
//! Documents attached to an order.
//!
//! [`OrderDocument`] is the record handed out by the documents service;
//! [`DocumentViewModel`] is the projection the gallery keeps and renders.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use super::order::ItemLocalId;

/// Content type that routes a document to the PDF group.
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u32);

impl DocumentId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentTypeId(u32);

impl DocumentTypeId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named classification applied to documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    pub id: DocumentTypeId,
    pub name: String,
}

impl DocumentType {
    pub fn new(id: DocumentTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Binary content together with its content type.
///
/// The bytes are shared, so cloning a blob (and therefore a view model)
/// never copies the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    mime: String,
    bytes: Arc<[u8]>,
}

impl Blob {
    pub fn new(mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true when the content type is `application/pdf`.
    ///
    /// Parameters such as `; charset=binary` are ignored and the comparison
    /// is case-insensitive.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        let essence = self.mime.split(';').next().unwrap_or_default().trim();
        essence.eq_ignore_ascii_case(PDF_MIME)
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Record returned by the documents service.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDocument {
    pub id: DocumentId,
    pub type_id: DocumentTypeId,
    pub name: String,
    pub description: String,
    pub date_added: DateTime<Utc>,
    /// Line item the document belongs to, when it is not order-wide.
    pub item_local_id: Option<ItemLocalId>,
    /// Attached content, when the service could provide it.
    pub content: Option<Blob>,
}

/// How a document is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Image,
    Pdf,
}

/// Document as held and rendered by the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentViewModel {
    pub id: DocumentId,
    pub type_id: DocumentTypeId,
    pub name: String,
    pub description: String,
    pub blob: Option<Blob>,
    pub item_local_id: Option<ItemLocalId>,
}

impl DocumentViewModel {
    /// Returns the group this document belongs to.
    ///
    /// Documents without content belong to no group and are not rendered.
    #[must_use]
    pub fn kind(&self) -> Option<DocumentKind> {
        self.blob.as_ref().map(|blob| {
            if blob.is_pdf() {
                DocumentKind::Pdf
            } else {
                DocumentKind::Image
            }
        })
    }
}

impl From<OrderDocument> for DocumentViewModel {
    fn from(doc: OrderDocument) -> Self {
        Self {
            id: doc.id,
            type_id: doc.type_id,
            name: doc.name,
            description: doc.description,
            blob: doc.content,
            item_local_id: doc.item_local_id,
        }
    }
}
