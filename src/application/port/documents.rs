// SPDX-License-Identifier: MPL-2.0
//! Documents service port.

use crate::domain::{DocumentType, OrderDocument};
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors reported by a [`DocumentsService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backing store could not be reached.
    Unavailable(String),

    /// The store answered with data that could not be read.
    Malformed(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unavailable(msg) => write!(f, "Documents unavailable: {msg}"),
            ServiceError::Malformed(msg) => write!(f, "Malformed documents: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Source of an order's documents and of the document type catalogue.
///
/// # Example
///
/// ```ignore
/// use documents_gallery::application::port::DocumentsService;
///
/// async fn count_documents(service: &dyn DocumentsService) -> usize {
///     service.get_all_documents().await.map(|docs| docs.len()).unwrap_or(0)
/// }
/// ```
pub trait DocumentsService: Send + Sync {
    /// Fetches every document attached to the order.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the documents cannot be listed.
    fn get_all_documents(&self) -> BoxFuture<'static, Result<Vec<OrderDocument>, ServiceError>>;

    /// Returns the known document types.
    ///
    /// Must cover every `type_id` the service hands out; misses are handled
    /// by the gallery's lookup policy.
    fn get_available_document_types(&self) -> Vec<DocumentType>;
}
