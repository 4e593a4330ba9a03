// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use std::time::Instant;

/// User-initiated interactions worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    ViewDocument { document_id: u32 },
    EditDocument { document_id: u32 },
    DeleteDocument { document_id: u32 },
    AttachFile,
    RefreshDocuments,
}

/// Category of a recorded warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A document's type or line item could not be resolved.
    LookupMiss,
    /// A refresh completed after a newer one was issued and was discarded.
    StaleRefresh,
    /// An action targeted a document that is no longer listed.
    UnknownDocument,
    /// A document's content could not be read.
    MissingContent,
    Other,
}

/// Category of a recorded error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Listing documents failed.
    FetchFailed,
    /// A view/edit/delete callback failed.
    ActionFailed,
    /// Attaching a new file failed.
    AttachFailed,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A recorded event with both a monotonic and a wall-clock timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Warning { .. })
    }
}
