// SPDX-License-Identifier: MPL-2.0
//! Executing gallery commands against the collaborator ports.

use super::controller::{Command, Event, Gallery, Snapshot};
use crate::application::port::{DocumentActions, DocumentsService, EventBus, ServiceError};
use std::fmt;
use std::sync::Arc;

/// Collaborators a gallery instance talks to, injected at construction.
#[derive(Clone)]
pub struct Dependencies {
    pub service: Arc<dyn DocumentsService>,
    pub actions: Arc<dyn DocumentActions>,
    pub event_bus: Arc<dyn EventBus>,
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependencies").finish_non_exhaustive()
    }
}

impl Dependencies {
    pub fn new(
        service: Arc<dyn DocumentsService>,
        actions: Arc<dyn DocumentActions>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            service,
            actions,
            event_bus,
        }
    }

    /// Runs `command` and returns the event reporting its outcome.
    ///
    /// Publishing has no outcome and yields `None`, as does `Command::None`.
    pub async fn run(self, command: Command) -> Option<Event> {
        match command {
            Command::None => None,
            Command::Fetch(token) => {
                let result = fetch_snapshot(self.service).await;
                Some(Event::Refreshed { token, result })
            }
            Command::Invoke { action, document } => {
                let document_id = document.id;
                let result = self.actions.invoke(action, document).await;
                Some(Event::ActionCompleted {
                    action,
                    document_id,
                    result,
                })
            }
            Command::Publish(event_name) => {
                self.event_bus.publish(event_name);
                None
            }
        }
    }
}

/// Fetches documents, then the type catalogue, and projects the documents.
///
/// # Errors
///
/// Propagates the service's error when listing documents fails.
pub async fn fetch_snapshot(service: Arc<dyn DocumentsService>) -> Result<Snapshot, ServiceError> {
    let documents = service.get_all_documents().await?;
    let document_types = service.get_available_document_types();

    Ok(Snapshot {
        documents: documents.into_iter().map(Into::into).collect(),
        document_types,
    })
}

/// Feeds `event` to the gallery and runs follow-up commands until none remain.
///
/// Useful for hosts without an event loop of their own, and for tests.
pub async fn settle(gallery: &mut Gallery, deps: &Dependencies, event: Event) {
    let mut next = Some(event);
    while let Some(event) = next.take() {
        let command = gallery.update(event);
        next = deps.clone().run(command).await;
    }
}
