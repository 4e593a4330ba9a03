// SPDX-License-Identifier: MPL-2.0
//! Document actions backed by native dialogs.

use crate::application::port::{ActionError, DocumentActions};
use crate::domain::{DocumentId, DocumentViewModel};
use crate::i18n::fluent::I18n;
use crate::infrastructure::manifest::DocumentStore;
use futures_util::future::BoxFuture;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::sync::Arc;

/// Extensions offered by the file pickers.
const PICKABLE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico", "pdf",
];

/// Dialog texts, rendered once in the active locale.
#[derive(Debug, Clone, Default)]
pub struct DialogStrings {
    pub view_title: String,
    pub delete_title: String,
    pub delete_confirm: String,
    pub edit_title: String,
    pub attach_title: String,
    pub filter_documents: String,
}

impl DialogStrings {
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            view_title: i18n.tr("dialog-view-title"),
            delete_title: i18n.tr("dialog-delete-title"),
            delete_confirm: i18n.tr("dialog-delete-confirm"),
            edit_title: i18n.tr("dialog-edit-title"),
            attach_title: i18n.tr("dialog-attach-title"),
            filter_documents: i18n.tr("dialog-filter-documents"),
        }
    }
}

/// [`DocumentActions`] that talk to the user through `rfd` dialogs and
/// apply the outcome to a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct DialogActions {
    store: Arc<DocumentStore>,
    strings: Arc<DialogStrings>,
}

impl DialogActions {
    #[must_use]
    pub fn new(store: Arc<DocumentStore>, strings: DialogStrings) -> Self {
        Self {
            store,
            strings: Arc::new(strings),
        }
    }
}

impl DocumentActions for DialogActions {
    fn view(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        let strings = Arc::clone(&self.strings);
        Box::pin(async move {
            let mut details = document.name.clone();
            if !document.description.is_empty() {
                details.push_str("\n\n");
                details.push_str(&document.description);
            }
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title(strings.view_title.as_str())
                .set_description(details)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
            Ok(())
        })
    }

    fn edit(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        let store = Arc::clone(&self.store);
        let strings = Arc::clone(&self.strings);
        Box::pin(async move {
            let title = format!("{}: {}", strings.edit_title, document.name);
            let (file_name, bytes) = pick_file(&title, &strings.filter_documents)
                .await
                .ok_or(ActionError::Cancelled)?;
            store
                .replace_content(document.id, &file_name, bytes)
                .map_err(|err| ActionError::Failed(err.to_string()))
        })
    }

    fn delete(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        let store = Arc::clone(&self.store);
        let strings = Arc::clone(&self.strings);
        Box::pin(async move {
            let answer = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(strings.delete_title.as_str())
                .set_description(format!("{}\n\n{}", document.name, strings.delete_confirm))
                .set_buttons(MessageButtons::YesNo)
                .show()
                .await;
            if answer != MessageDialogResult::Yes {
                return Err(ActionError::Cancelled);
            }
            match store.remove(document.id) {
                Ok(true) => Ok(()),
                Ok(false) => Err(ActionError::Failed(format!(
                    "document {} no longer exists",
                    document.id
                ))),
                Err(err) => Err(ActionError::Failed(err.to_string())),
            }
        })
    }
}

/// Asks for a file and attaches it to the store as an order-wide document.
///
/// Returns `Ok(None)` when the picker is closed without a selection.
///
/// # Errors
///
/// Returns [`ActionError::Failed`] when the store refuses the attachment.
pub async fn pick_attachment(
    store: Arc<DocumentStore>,
    strings: DialogStrings,
) -> Result<Option<DocumentId>, ActionError> {
    let Some((file_name, bytes)) = pick_file(&strings.attach_title, &strings.filter_documents).await
    else {
        return Ok(None);
    };
    store
        .attach(&file_name, bytes)
        .map(Some)
        .map_err(|err| ActionError::Failed(err.to_string()))
}

async fn pick_file(title: &str, filter_name: &str) -> Option<(String, Vec<u8>)> {
    let handle = AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, PICKABLE_EXTENSIONS)
        .pick_file()
        .await?;
    let bytes = handle.read().await;
    Some((handle.file_name(), bytes))
}
