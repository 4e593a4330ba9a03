// SPDX-License-Identifier: MPL-2.0
//! Splitting documents into the image and PDF groups.
//!
//! Service order is preserved. Documents without content are in neither
//! group and are therefore never rendered.

use crate::domain::{DocumentKind, DocumentViewModel};

/// Documents with non-PDF content, in service order.
#[must_use]
pub fn images(documents: &[DocumentViewModel]) -> Vec<&DocumentViewModel> {
    of_kind(documents, DocumentKind::Image)
}

/// Documents with `application/pdf` content, in service order.
#[must_use]
pub fn pdf_documents(documents: &[DocumentViewModel]) -> Vec<&DocumentViewModel> {
    of_kind(documents, DocumentKind::Pdf)
}

fn of_kind(documents: &[DocumentViewModel], kind: DocumentKind) -> Vec<&DocumentViewModel> {
    documents
        .iter()
        .filter(|doc| doc.kind() == Some(kind))
        .collect()
}

/// Both groups computed in a single pass.
#[derive(Debug, Default)]
pub struct Groups<'a> {
    pub images: Vec<&'a DocumentViewModel>,
    pub pdfs: Vec<&'a DocumentViewModel>,
}

impl Groups<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.pdfs.is_empty()
    }
}

#[must_use]
pub fn group(documents: &[DocumentViewModel]) -> Groups<'_> {
    let mut groups = Groups::default();
    for doc in documents {
        match doc.kind() {
            Some(DocumentKind::Image) => groups.images.push(doc),
            Some(DocumentKind::Pdf) => groups.pdfs.push(doc),
            None => {}
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Blob, DocumentId, DocumentTypeId, PDF_MIME};

    fn doc(id: u32, mime: Option<&str>) -> DocumentViewModel {
        DocumentViewModel {
            id: DocumentId::new(id),
            type_id: DocumentTypeId::new(1),
            name: format!("doc-{id}"),
            description: String::new(),
            blob: mime.map(|m| Blob::new(m, vec![0u8; 4])),
            item_local_id: None,
        }
    }

    fn ids(docs: &[&DocumentViewModel]) -> Vec<u32> {
        docs.iter().map(|d| d.id.value()).collect()
    }

    fn mixed() -> Vec<DocumentViewModel> {
        vec![
            doc(1, Some("image/jpeg")),
            doc(2, Some(PDF_MIME)),
            doc(3, None),
            doc(4, Some("image/png")),
            doc(5, Some(PDF_MIME)),
            doc(6, Some("")),
        ]
    }

    #[test]
    fn images_keep_service_order() {
        let docs = mixed();
        assert_eq!(ids(&images(&docs)), vec![1, 4, 6]);
    }

    #[test]
    fn pdf_documents_keep_service_order() {
        let docs = mixed();
        assert_eq!(ids(&pdf_documents(&docs)), vec![2, 5]);
    }

    #[test]
    fn groups_are_disjoint_and_skip_missing_content() {
        let docs = mixed();
        let images = images(&docs);
        let pdfs = pdf_documents(&docs);

        assert!(images.iter().all(|i| !pdfs.iter().any(|p| p.id == i.id)));
        assert!(images.iter().chain(pdfs.iter()).all(|d| d.blob.is_some()));
        assert!(!ids(&images).contains(&3) && !ids(&pdfs).contains(&3));
    }

    #[test]
    fn single_pass_grouping_matches_filters() {
        let docs = mixed();
        let groups = group(&docs);
        assert_eq!(ids(&groups.images), ids(&images(&docs)));
        assert_eq!(ids(&groups.pdfs), ids(&pdf_documents(&docs)));
        assert!(!groups.is_empty());
    }

    #[test]
    fn documents_without_content_leave_groups_empty() {
        let docs = vec![doc(1, None), doc(2, None)];
        assert!(group(&docs).is_empty());
    }
}
