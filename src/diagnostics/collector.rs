// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
use crate::domain::BufferCapacity;

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to move into futures. Every method is
/// non-blocking: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_warning_simple(&self, warning_type: WarningType, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(warning_type, message));
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    pub fn log_error_simple(&self, error_type: ErrorType, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(error_type, message));
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Call this from the update loop so the channel never fills up.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Recorded errors, oldest first.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event),
            _ => None,
        })
    }

    /// Recorded warnings, oldest first.
    pub fn warnings(&self) -> impl Iterator<Item = &WarningEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Warning { event } => Some(event),
            _ => None,
        })
    }

    /// Recorded user actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            _ => None,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::AttachFile);
        handle.log_error_simple(ErrorType::FetchFailed, "offline");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.errors().count(), 1);
        assert_eq!(collector.actions().next(), Some(&UserAction::AttachFile));
    }

    #[test]
    fn warnings_are_filtered_by_kind() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning_simple(WarningType::LookupMiss, "type 9");
        handle.log_warning_simple(WarningType::StaleRefresh, "token 1");
        collector.process_pending();

        let kinds: Vec<_> = collector.warnings().map(|w| w.warning_type).collect();
        assert_eq!(kinds, vec![WarningType::LookupMiss, WarningType::StaleRefresh]);
        assert!(collector.iter().all(DiagnosticEvent::is_warning));
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 25) {
            handle.log_action(UserAction::RefreshDocuments);
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_capacity_bounds_history() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let handle = collector.handle();
        let capacity = collector.capacity();

        for round in 0..3 {
            for _ in 0..(capacity / 2) {
                handle.log_action(UserAction::ViewDocument { document_id: round });
            }
            collector.process_pending();
        }
        assert_eq!(collector.len(), capacity);
    }
}
