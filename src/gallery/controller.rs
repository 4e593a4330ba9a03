// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine.
//!
//! [`Gallery::update`] never performs I/O. It records what happened and
//! returns the [`Command`] the host must run next; the command's outcome
//! comes back as another [`Event`]. Collaborator failures end here: they are
//! printed, recorded in diagnostics and never returned to the caller.

use super::classify;
use super::lookup::{self, Label, LookupError, LookupMissPolicy, TileLabels};
use super::refresh::{RefreshSequencer, RefreshToken};
use crate::application::port::{Action, ActionError, ServiceError, ATTACH_IMAGE_EVENT};
use crate::diagnostics::{DiagnosticsHandle, ErrorType, UserAction, WarningType};
use crate::domain::{DocumentId, DocumentType, DocumentTypeId, DocumentViewModel, Order};

/// Documents and types fetched together by one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub documents: Vec<DocumentViewModel>,
    pub document_types: Vec<DocumentType>,
}

/// Inputs to the gallery.
#[derive(Debug, Clone)]
pub enum Event {
    /// Load (or reload) documents and types.
    Initialize,
    /// A fetch issued with `token` finished.
    Refreshed {
        token: RefreshToken,
        result: Result<Snapshot, ServiceError>,
    },
    /// A tile asked for `action` on a document.
    ActionRequested {
        action: Action,
        document_id: DocumentId,
    },
    /// The host's callback for `action` resolved.
    ActionCompleted {
        action: Action,
        document_id: DocumentId,
        result: Result<(), ActionError>,
    },
    /// The user asked to attach a new file.
    AttachRequested,
}

/// Work the host must perform on the gallery's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    /// Fetch a [`Snapshot`] and answer with [`Event::Refreshed`].
    Fetch(RefreshToken),
    /// Run the host callback and answer with [`Event::ActionCompleted`].
    Invoke {
        action: Action,
        document: DocumentViewModel,
    },
    /// Publish a named notification on the event bus.
    Publish(&'static str),
}

#[derive(Debug, Default)]
pub struct Gallery {
    documents: Vec<DocumentViewModel>,
    document_types: Vec<DocumentType>,
    sequencer: RefreshSequencer,
    /// True from the first refresh request until any refresh settles.
    first_load_pending: bool,
    /// Bumped every time a snapshot is applied.
    revision: u64,
    policy: LookupMissPolicy,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Gallery {
    #[must_use]
    pub fn new(policy: LookupMissPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    pub fn update(&mut self, event: Event) -> Command {
        match event {
            Event::Initialize => {
                let token = self.sequencer.issue();
                if self.revision == 0 {
                    self.first_load_pending = true;
                }
                self.log_action(UserAction::RefreshDocuments);
                Command::Fetch(token)
            }
            Event::Refreshed { token, result } => {
                self.apply_refresh(token, result);
                Command::None
            }
            Event::ActionRequested {
                action,
                document_id,
            } => {
                let Some(document) = self.document(document_id).cloned() else {
                    self.warn(
                        WarningType::UnknownDocument,
                        format!("Cannot {action} document {document_id}: no longer listed"),
                    );
                    return Command::None;
                };
                let id = document_id.value();
                self.log_action(match action {
                    Action::View => UserAction::ViewDocument { document_id: id },
                    Action::Edit => UserAction::EditDocument { document_id: id },
                    Action::Delete => UserAction::DeleteDocument { document_id: id },
                });
                Command::Invoke { action, document }
            }
            Event::ActionCompleted {
                action,
                document_id,
                result,
            } => match result {
                Ok(()) if action.refreshes_on_success() => self.update(Event::Initialize),
                Ok(()) => Command::None,
                Err(ActionError::Cancelled) => {
                    self.warn(
                        WarningType::Other,
                        format!("The {action} of document {document_id} was cancelled"),
                    );
                    Command::None
                }
                Err(err) => {
                    self.report_error(
                        ErrorType::ActionFailed,
                        format!("Failed to {action} document {document_id}: {err}"),
                    );
                    Command::None
                }
            },
            Event::AttachRequested => {
                self.log_action(UserAction::AttachFile);
                Command::Publish(ATTACH_IMAGE_EVENT)
            }
        }
    }

    fn apply_refresh(&mut self, token: RefreshToken, result: Result<Snapshot, ServiceError>) {
        if !self.sequencer.is_latest(token) {
            self.warn(
                WarningType::StaleRefresh,
                format!(
                    "Discarding refresh {token}; {} is newer",
                    self.sequencer
                        .latest()
                        .map_or_else(|| "none".to_string(), |t| t.to_string())
                ),
            );
            return;
        }

        self.first_load_pending = false;
        match result {
            Ok(snapshot) => {
                self.documents = snapshot.documents;
                self.document_types = snapshot.document_types;
                self.revision += 1;
            }
            Err(err) => {
                self.report_error(
                    ErrorType::FetchFailed,
                    format!("Failed to load documents: {err}"),
                );
            }
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn documents(&self) -> &[DocumentViewModel] {
        &self.documents
    }

    #[must_use]
    pub fn document_types(&self) -> &[DocumentType] {
        &self.document_types
    }

    #[must_use]
    pub fn document(&self, id: DocumentId) -> Option<&DocumentViewModel> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    #[must_use]
    pub fn images(&self) -> Vec<&DocumentViewModel> {
        classify::images(&self.documents)
    }

    #[must_use]
    pub fn pdf_documents(&self) -> Vec<&DocumentViewModel> {
        classify::pdf_documents(&self.documents)
    }

    /// Both groups as rendered against `order`.
    ///
    /// Under [`LookupMissPolicy::Hide`] documents whose type or item cannot
    /// be resolved are left out, so an all-hidden gallery reads as empty.
    #[must_use]
    pub fn visible_groups(&self, order: &Order) -> classify::Groups<'_> {
        let mut groups = classify::group(&self.documents);
        if self.policy == LookupMissPolicy::Hide {
            let visible = |doc: &&DocumentViewModel| self.tile_labels(order, doc).is_some();
            groups.images.retain(visible);
            groups.pdfs.retain(visible);
        }
        groups
    }

    /// Name of the document type `type_id` in the loaded catalogue.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownDocumentType`] when the catalogue lacks it.
    pub fn document_type(&self, type_id: DocumentTypeId) -> Result<&str, LookupError> {
        lookup::document_type_name(&self.document_types, type_id)
    }

    /// Heading of `doc`, resolved against `order`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownOrderItem`] when the order lacks the item.
    pub fn document_heading(
        &self,
        order: &Order,
        doc: &DocumentViewModel,
    ) -> Result<String, LookupError> {
        lookup::document_heading(order, doc)
    }

    /// Labels for a tile, or `None` when the policy hides the document.
    #[must_use]
    pub fn tile_labels(&self, order: &Order, doc: &DocumentViewModel) -> Option<TileLabels> {
        let labels = TileLabels {
            heading: Label::from(self.document_heading(order, doc)),
            type_name: Label::from(self.document_type(doc.type_id).map(str::to_string)),
        };
        match self.policy {
            LookupMissPolicy::Hide if !labels.is_complete() => None,
            _ => Some(labels),
        }
    }

    /// Records every unresolvable document against `order`.
    ///
    /// Returns the number of lookup misses found.
    pub fn audit_lookups(&self, order: &Order) -> usize {
        let mut misses = 0;
        for doc in &self.documents {
            if doc.kind().is_none() {
                continue;
            }
            let errors = [
                self.document_type(doc.type_id).err(),
                self.document_heading(order, doc).err(),
            ];
            for err in errors.into_iter().flatten() {
                misses += 1;
                self.warn(
                    WarningType::LookupMiss,
                    format!("Document {} ({}): {err}", doc.id, doc.name),
                );
            }
        }
        misses
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.first_load_pending
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn policy(&self) -> LookupMissPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LookupMissPolicy) {
        self.policy = policy;
    }

    // ---------------------------------------------------------------------
    // Logging
    // ---------------------------------------------------------------------

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn warn(&self, warning_type: WarningType, message: String) {
        eprintln!("[WARN] {message}");
        if let Some(handle) = &self.diagnostics {
            handle.log_warning_simple(warning_type, message);
        }
    }

    fn report_error(&self, error_type: ErrorType, message: String) {
        eprintln!("{message}");
        if let Some(handle) = &self.diagnostics {
            handle.log_error_simple(error_type, message);
        }
    }
}
