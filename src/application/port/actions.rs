// SPDX-License-Identifier: MPL-2.0
//! Host-supplied document actions.

use crate::domain::DocumentViewModel;
use futures_util::future::BoxFuture;
use std::fmt;

/// The three per-document interactions a gallery tile offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Edit,
    Delete,
}

impl Action {
    /// Edit and delete change stored data; viewing does not.
    #[must_use]
    pub fn refreshes_on_success(self) -> bool {
        matches!(self, Action::Edit | Action::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::View => write!(f, "view"),
            Action::Edit => write!(f, "edit"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// Failure of a document action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The user backed out (closed a dialog, declined a confirmation).
    Cancelled,

    /// The action was attempted and failed.
    Failed(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Cancelled => write!(f, "Cancelled by user"),
            ActionError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Callbacks invoked when a tile is clicked.
///
/// Each call receives its own copy of the document. The gallery refreshes
/// after a successful [`edit`](Self::edit) or [`delete`](Self::delete) and
/// only after the returned future resolves.
pub trait DocumentActions: Send + Sync {
    fn view(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>>;

    fn edit(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>>;

    fn delete(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>>;

    /// Dispatches to the callback matching `action`.
    fn invoke(
        &self,
        action: Action,
        document: DocumentViewModel,
    ) -> BoxFuture<'static, Result<(), ActionError>> {
        match action {
            Action::View => self.view(document),
            Action::Edit => self.edit(document),
            Action::Delete => self.delete(document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mutating_actions_refresh() {
        assert!(!Action::View.refreshes_on_success());
        assert!(Action::Edit.refreshes_on_success());
        assert!(Action::Delete.refreshes_on_success());
    }

    #[test]
    fn action_error_display() {
        assert_eq!(format!("{}", ActionError::Cancelled), "Cancelled by user");
        assert_eq!(format!("{}", ActionError::Failed("disk full".into())), "disk full");
    }
}
