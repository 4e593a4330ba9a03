// SPDX-License-Identifier: MPL-2.0
//! Documents described by a TOML manifest on disk.
//!
//! The manifest lists the order's line items, the document type catalogue
//! and the documents themselves. Document files are resolved relative to the
//! manifest and read once at load time.
//!
//! ```toml
//! default_type_id = 1
//!
//! [[order.items]]
//! local_id = 3
//! item_no = 7
//! location = "Bay A"
//!
//! [[document_types]]
//! id = 1
//! name = "Photo"
//!
//! [[documents]]
//! id = 10
//! type_id = 1
//! name = "Front"
//! description = "Front view after delivery"
//! date_added = "2024-05-01T10:00:00Z"
//! item_local_id = 3
//! file = "front.png"
//! ```

use crate::application::port::{DocumentsService, ServiceError};
use crate::domain::{
    Blob, DocumentId, DocumentType, DocumentTypeId, ItemLocalId, Order, OrderDocument, OrderItem,
    PDF_MIME,
};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use futures_util::future::{self, BoxFuture};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

/// Content type used when the extension says nothing useful.
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    default_type_id: Option<u32>,
    #[serde(default)]
    order: ManifestOrder,
    #[serde(default)]
    document_types: Vec<ManifestType>,
    #[serde(default)]
    documents: Vec<ManifestDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestOrder {
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    local_id: u32,
    item_no: u32,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ManifestType {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    id: u32,
    type_id: u32,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "Utc::now")]
    date_added: DateTime<Utc>,
    item_local_id: Option<u32>,
    file: Option<String>,
}

/// Shared, mutable set of documents for one order.
#[derive(Debug)]
pub struct DocumentStore {
    order: Order,
    document_types: Vec<DocumentType>,
    default_type_id: Option<DocumentTypeId>,
    documents: RwLock<Vec<OrderDocument>>,
    next_id: AtomicU32,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl DocumentStore {
    /// A store with no order items, no types and no documents.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            order: Order::default(),
            document_types: Vec::new(),
            default_type_id: None,
            documents: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Loads the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the manifest cannot be read and
    /// [`Error::Manifest`] when it is malformed or has duplicate ids.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_manifest_str(&content, base_dir)
    }

    /// Parses manifest text, resolving document files against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] when the text is malformed or has
    /// duplicate ids.
    pub fn from_manifest_str(content: &str, base_dir: &Path) -> Result<Self> {
        let manifest: ManifestFile =
            toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))?;

        let mut seen_types = HashSet::new();
        let mut document_types = Vec::with_capacity(manifest.document_types.len());
        for entry in manifest.document_types {
            if !seen_types.insert(entry.id) {
                return Err(Error::Manifest(format!("duplicate document type id {}", entry.id)));
            }
            document_types.push(DocumentType::new(DocumentTypeId::new(entry.id), entry.name));
        }

        let order = Order::new(
            manifest
                .order
                .items
                .into_iter()
                .map(|item| {
                    OrderItem::new(ItemLocalId::new(item.local_id), item.item_no, item.location)
                })
                .collect(),
        );

        let mut seen_documents = HashSet::new();
        let mut documents = Vec::with_capacity(manifest.documents.len());
        for entry in manifest.documents {
            if !seen_documents.insert(entry.id) {
                return Err(Error::Manifest(format!("duplicate document id {}", entry.id)));
            }
            let content = entry
                .file
                .as_deref()
                .and_then(|file| read_blob(&base_dir.join(file)));
            documents.push(OrderDocument {
                id: DocumentId::new(entry.id),
                type_id: DocumentTypeId::new(entry.type_id),
                name: entry.name,
                description: entry.description,
                date_added: entry.date_added,
                item_local_id: entry.item_local_id.map(ItemLocalId::new),
                content,
            });
        }

        let next_id = seen_documents
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Error::Manifest("document id space exhausted".into()))?;
        let default_type_id = manifest
            .default_type_id
            .map(DocumentTypeId::new)
            .or_else(|| document_types.first().map(|t| t.id));

        Ok(Self {
            order,
            document_types,
            default_type_id,
            documents: RwLock::new(documents),
            next_id: AtomicU32::new(next_id),
        })
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub fn document_types(&self) -> &[DocumentType] {
        &self.document_types
    }

    /// Copies the current documents.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unavailable`] if a writer panicked.
    pub fn documents(&self) -> std::result::Result<Vec<OrderDocument>, ServiceError> {
        self.documents
            .read()
            .map(|docs| docs.clone())
            .map_err(|_| poisoned())
    }

    /// Replaces a document's content with a new file.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Malformed`] when no document has `id`.
    pub fn replace_content(
        &self,
        id: DocumentId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> std::result::Result<(), ServiceError> {
        let mut docs = self.documents.write().map_err(|_| poisoned())?;
        let doc = docs
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| ServiceError::Malformed(format!("no document with id {id}")))?;
        doc.content = Some(Blob::new(mime_for(file_name), bytes));
        doc.date_added = Utc::now();
        Ok(())
    }

    /// Removes a document. Returns `false` when it was not present.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unavailable`] if a writer panicked.
    pub fn remove(&self, id: DocumentId) -> std::result::Result<bool, ServiceError> {
        let mut docs = self.documents.write().map_err(|_| poisoned())?;
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() != before)
    }

    /// Adds a new order-wide document with the default type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Malformed`] when the store has no document
    /// type to file the attachment under or no document id is left.
    pub fn attach(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> std::result::Result<DocumentId, ServiceError> {
        let type_id = self.default_type_id.ok_or_else(|| {
            ServiceError::Malformed("no document type available for attachments".into())
        })?;
        let id = self
            .next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map(DocumentId::new)
            .map_err(|_| ServiceError::Malformed("document id space exhausted".into()))?;
        let document = OrderDocument {
            id,
            type_id,
            name: file_name.to_string(),
            description: String::new(),
            date_added: Utc::now(),
            item_local_id: None,
            content: Some(Blob::new(mime_for(file_name), bytes)),
        };
        self.documents
            .write()
            .map_err(|_| poisoned())?
            .push(document);
        Ok(id)
    }
}

fn poisoned() -> ServiceError {
    ServiceError::Unavailable("document store lock poisoned".into())
}

/// Content type derived from a file name's extension.
#[must_use]
pub fn mime_for(file_name: &str) -> String {
    let path = Path::new(file_name);
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        return PDF_MIME.to_string();
    }
    image_rs::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MIME.to_string())
}

/// Reads a document file; unreadable files yield no content.
fn read_blob(path: &Path) -> Option<Blob> {
    match fs::read(path) {
        Ok(bytes) => {
            let name = path.file_name()?.to_string_lossy();
            Some(Blob::new(mime_for(&name), bytes))
        }
        Err(err) => {
            eprintln!("[WARN] Cannot read document file {}: {err}", path.display());
            None
        }
    }
}

/// [`DocumentsService`] answering from a shared [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct ManifestDocumentsService {
    store: Arc<DocumentStore>,
}

impl ManifestDocumentsService {
    #[must_use]
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

impl DocumentsService for ManifestDocumentsService {
    fn get_all_documents(
        &self,
    ) -> BoxFuture<'static, std::result::Result<Vec<OrderDocument>, ServiceError>> {
        Box::pin(future::ready(self.store.documents()))
    }

    fn get_available_document_types(&self) -> Vec<DocumentType> {
        self.store.document_types().to_vec()
    }
}
