// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use documents_gallery::application::port::{
    Action, ActionError, DocumentActions, DocumentsService, EventBus, ServiceError,
    ATTACH_IMAGE_EVENT,
};
use documents_gallery::diagnostics::DiagnosticsCollector;
use documents_gallery::domain::{
    Blob, BufferCapacity, DocumentId, DocumentType, DocumentTypeId, DocumentViewModel,
    ItemLocalId, Order, OrderDocument, OrderItem,
};
use documents_gallery::gallery::{
    settle, Command, Dependencies, Event, Gallery, LookupError, LookupMissPolicy, Snapshot,
};
use futures_util::future::{self, BoxFuture};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

/// Answers the n-th fetch with the n-th response, repeating the last one.
struct StubService {
    responses: Vec<Result<Vec<OrderDocument>, ServiceError>>,
    types: Vec<DocumentType>,
    calls: AtomicUsize,
}

impl StubService {
    fn new(responses: Vec<Result<Vec<OrderDocument>, ServiceError>>) -> Self {
        Self {
            responses,
            types: vec![
                DocumentType::new(DocumentTypeId::new(1), "Photo"),
                DocumentType::new(DocumentTypeId::new(2), "Invoice"),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentsService for StubService {
    fn get_all_documents(&self) -> BoxFuture<'static, Result<Vec<OrderDocument>, ServiceError>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .get(n)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(future::ready(response))
    }

    fn get_available_document_types(&self) -> Vec<DocumentType> {
        self.types.clone()
    }
}

struct StubActions {
    result: Result<(), ActionError>,
    invoked: Mutex<Vec<(Action, DocumentId)>>,
}

impl StubActions {
    fn answering(result: Result<(), ActionError>) -> Self {
        Self {
            result,
            invoked: Mutex::new(Vec::new()),
        }
    }

    fn record(
        &self,
        action: Action,
        document: DocumentViewModel,
    ) -> BoxFuture<'static, Result<(), ActionError>> {
        self.invoked
            .lock()
            .expect("lock")
            .push((action, document.id));
        Box::pin(future::ready(self.result.clone()))
    }

    fn invoked(&self) -> Vec<(Action, DocumentId)> {
        self.invoked.lock().expect("lock").clone()
    }
}

impl DocumentActions for StubActions {
    fn view(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        self.record(Action::View, document)
    }

    fn edit(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        self.record(Action::Edit, document)
    }

    fn delete(&self, document: DocumentViewModel) -> BoxFuture<'static, Result<(), ActionError>> {
        self.record(Action::Delete, document)
    }
}

#[derive(Default)]
struct RecordingBus {
    published: Mutex<Vec<String>>,
}

impl RecordingBus {
    fn published(&self) -> Vec<String> {
        self.published.lock().expect("lock").clone()
    }
}

impl EventBus for RecordingBus {
    fn publish(&self, event_name: &str) {
        self.published
            .lock()
            .expect("lock")
            .push(event_name.to_string());
    }
}

struct Harness {
    service: Arc<StubService>,
    actions: Arc<StubActions>,
    bus: Arc<RecordingBus>,
    deps: Dependencies,
}

fn harness(
    responses: Vec<Result<Vec<OrderDocument>, ServiceError>>,
    action_result: Result<(), ActionError>,
) -> Harness {
    let service = Arc::new(StubService::new(responses));
    let actions = Arc::new(StubActions::answering(action_result));
    let bus = Arc::new(RecordingBus::default());
    let deps = Dependencies::new(service.clone(), actions.clone(), bus.clone());
    Harness {
        service,
        actions,
        bus,
        deps,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn document(id: u32, type_id: u32, mime: Option<&str>, item: Option<u32>) -> OrderDocument {
    OrderDocument {
        id: DocumentId::new(id),
        type_id: DocumentTypeId::new(type_id),
        name: format!("doc-{id}"),
        description: format!("description {id}"),
        date_added: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        item_local_id: item.map(ItemLocalId::new),
        content: mime.map(|mime| Blob::new(mime, vec![0u8; 8])),
    }
}

fn mixed_documents() -> Vec<OrderDocument> {
    vec![
        document(1, 1, Some("image/png"), Some(3)),
        document(2, 2, Some("application/pdf"), None),
        document(3, 1, Some("image/jpeg"), None),
        document(4, 1, None, None),
    ]
}

fn order() -> Order {
    Order::new(vec![
        OrderItem::new(ItemLocalId::new(3), 7, Some("Bay A".into())),
        OrderItem::new(ItemLocalId::new(4), 8, None),
    ])
}

fn ids(documents: &[&DocumentViewModel]) -> Vec<u32> {
    documents.iter().map(|doc| doc.id.value()).collect()
}

async fn loaded(h: &Harness) -> Gallery {
    let mut gallery = Gallery::default();
    settle(&mut gallery, &h.deps, Event::Initialize).await;
    gallery
}

// ---------------------------------------------------------------------------
// Loading and classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_loads_and_classifies_documents() {
    let h = harness(vec![Ok(mixed_documents())], Ok(()));
    let gallery = loaded(&h).await;

    assert_eq!(h.service.calls(), 1);
    assert!(!gallery.is_loading());
    assert_eq!(gallery.documents().len(), 4);
    assert_eq!(gallery.document_types().len(), 2);
    assert_eq!(ids(&gallery.images()), vec![1, 3]);
    assert_eq!(ids(&gallery.pdf_documents()), vec![2]);
}

#[tokio::test]
async fn document_without_content_is_in_neither_group() {
    let h = harness(vec![Ok(vec![document(4, 1, None, None)])], Ok(()));
    let gallery = loaded(&h).await;

    assert_eq!(gallery.documents().len(), 1);
    assert!(gallery.images().is_empty());
    assert!(gallery.pdf_documents().is_empty());
}

#[tokio::test]
async fn failed_fetch_leaves_previous_documents_in_place() {
    let h = harness(
        vec![
            Ok(mixed_documents()),
            Err(ServiceError::Unavailable("offline".into())),
        ],
        Ok(()),
    );
    let mut gallery = loaded(&h).await;
    let revision = gallery.revision();

    settle(&mut gallery, &h.deps, Event::Initialize).await;

    assert_eq!(h.service.calls(), 2);
    assert_eq!(gallery.documents().len(), 4);
    assert_eq!(gallery.revision(), revision);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn headings_follow_the_order() {
    let h = harness(
        vec![Ok(vec![
            document(1, 1, Some("image/png"), Some(3)),
            document(2, 1, Some("image/png"), Some(4)),
            document(3, 1, Some("image/png"), None),
        ])],
        Ok(()),
    );
    let gallery = loaded(&h).await;
    let order = order();
    let docs = gallery.documents();

    assert_eq!(
        gallery.document_heading(&order, &docs[0]).as_deref(),
        Ok("Item 7: Bay A")
    );
    assert_eq!(
        gallery.document_heading(&order, &docs[1]).as_deref(),
        Ok("Item 8")
    );
    assert_eq!(
        gallery.document_heading(&order, &docs[2]).as_deref(),
        Ok("Order Document")
    );
}

#[tokio::test]
async fn unknown_type_and_item_are_lookup_errors() {
    let h = harness(
        vec![Ok(vec![document(1, 99, Some("image/png"), Some(42))])],
        Ok(()),
    );
    let gallery = loaded(&h).await;
    let doc = &gallery.documents()[0];

    assert_eq!(gallery.document_type(DocumentTypeId::new(1)), Ok("Photo"));
    assert_eq!(
        gallery.document_type(doc.type_id),
        Err(LookupError::UnknownDocumentType(DocumentTypeId::new(99)))
    );
    assert_eq!(
        gallery.document_heading(&order(), doc),
        Err(LookupError::UnknownOrderItem(ItemLocalId::new(42)))
    );
}

#[tokio::test]
async fn hide_policy_drops_unresolvable_tiles() {
    let h = harness(
        vec![Ok(vec![
            document(1, 1, Some("image/png"), Some(3)),
            document(2, 99, Some("image/png"), None),
        ])],
        Ok(()),
    );
    let mut gallery = Gallery::new(LookupMissPolicy::Hide);
    settle(&mut gallery, &h.deps, Event::Initialize).await;
    let order = order();
    let docs = gallery.documents();

    assert!(gallery.tile_labels(&order, &docs[0]).is_some());
    assert!(gallery.tile_labels(&order, &docs[1]).is_none());

    gallery.set_policy(LookupMissPolicy::Placeholder);
    let labels = gallery
        .tile_labels(&order, &gallery.documents()[1])
        .expect("placeholder policy keeps the tile");
    assert!(!labels.type_name.is_resolved());
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_edit_refetches_new_data() {
    let mut renamed = mixed_documents();
    renamed[0].name = "renamed".into();
    let h = harness(vec![Ok(mixed_documents()), Ok(renamed)], Ok(()));
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Edit,
            document_id: DocumentId::new(1),
        },
    )
    .await;

    assert_eq!(h.actions.invoked(), vec![(Action::Edit, DocumentId::new(1))]);
    assert_eq!(h.service.calls(), 2);
    assert_eq!(gallery.documents()[0].name, "renamed");
}

#[tokio::test]
async fn successful_delete_refetches() {
    let h = harness(
        vec![Ok(mixed_documents()), Ok(mixed_documents()[1..].to_vec())],
        Ok(()),
    );
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Delete,
            document_id: DocumentId::new(1),
        },
    )
    .await;

    assert_eq!(h.service.calls(), 2);
    assert!(gallery.document(DocumentId::new(1)).is_none());
}

#[tokio::test]
async fn failed_delete_does_not_refetch() {
    let h = harness(
        vec![Ok(mixed_documents())],
        Err(ActionError::Failed("permission denied".into())),
    );
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Delete,
            document_id: DocumentId::new(2),
        },
    )
    .await;

    assert_eq!(h.actions.invoked().len(), 1);
    assert_eq!(h.service.calls(), 1);
    assert_eq!(gallery.documents().len(), 4);
}

#[tokio::test]
async fn declined_delete_does_not_refetch() {
    let h = harness(vec![Ok(mixed_documents())], Err(ActionError::Cancelled));
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Delete,
            document_id: DocumentId::new(1),
        },
    )
    .await;

    assert_eq!(h.service.calls(), 1);
    assert!(gallery.document(DocumentId::new(1)).is_some());
}

#[tokio::test]
async fn view_never_refetches() {
    let h = harness(vec![Ok(mixed_documents())], Ok(()));
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::View,
            document_id: DocumentId::new(3),
        },
    )
    .await;

    assert_eq!(h.actions.invoked(), vec![(Action::View, DocumentId::new(3))]);
    assert_eq!(h.service.calls(), 1);
}

#[tokio::test]
async fn action_on_unlisted_document_is_ignored() {
    let h = harness(vec![Ok(mixed_documents())], Ok(()));
    let mut gallery = loaded(&h).await;

    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Edit,
            document_id: DocumentId::new(404),
        },
    )
    .await;

    assert!(h.actions.invoked().is_empty());
    assert_eq!(h.service.calls(), 1);
}

#[tokio::test]
async fn callback_receives_a_copy_of_the_document() {
    let h = harness(vec![Ok(mixed_documents())], Ok(()));
    let mut gallery = loaded(&h).await;

    let command = gallery.update(Event::ActionRequested {
        action: Action::View,
        document_id: DocumentId::new(2),
    });

    match command {
        Command::Invoke { action, document } => {
            assert_eq!(action, Action::View);
            assert_eq!(document.id, DocumentId::new(2));
            assert_eq!(document.description, "description 2");
            assert!(document.blob.as_ref().is_some_and(Blob::is_pdf));
        }
        other => panic!("expected Invoke, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Attach
// ---------------------------------------------------------------------------

#[tokio::test]
async fn attach_publishes_once_per_request() {
    let h = harness(vec![Ok(mixed_documents())], Ok(()));
    let mut gallery = Gallery::default();

    settle(&mut gallery, &h.deps, Event::AttachRequested).await;
    assert_eq!(h.bus.published(), vec![ATTACH_IMAGE_EVENT.to_string()]);

    settle(&mut gallery, &h.deps, Event::AttachRequested).await;
    assert_eq!(h.bus.published().len(), 2);
    assert_eq!(h.service.calls(), 0);
}

// ---------------------------------------------------------------------------
// Refresh ordering
// ---------------------------------------------------------------------------

fn snapshot(documents: Vec<OrderDocument>) -> Snapshot {
    Snapshot {
        documents: documents.into_iter().map(Into::into).collect(),
        document_types: vec![DocumentType::new(DocumentTypeId::new(1), "Photo")],
    }
}

#[test]
fn stale_refresh_is_discarded() {
    let mut gallery = Gallery::default();
    let Command::Fetch(first) = gallery.update(Event::Initialize) else {
        panic!("expected Fetch");
    };
    let Command::Fetch(second) = gallery.update(Event::Initialize) else {
        panic!("expected Fetch");
    };

    gallery.update(Event::Refreshed {
        token: second,
        result: Ok(snapshot(vec![document(2, 1, Some("image/png"), None)])),
    });
    gallery.update(Event::Refreshed {
        token: first,
        result: Ok(snapshot(vec![document(1, 1, Some("image/png"), None)])),
    });

    assert_eq!(ids(&gallery.images()), vec![2]);
    assert_eq!(gallery.revision(), 1);
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut gallery = Gallery::default();
    let Command::Fetch(first) = gallery.update(Event::Initialize) else {
        panic!("expected Fetch");
    };
    let _ = gallery.update(Event::Initialize);

    gallery.update(Event::Refreshed {
        token: first,
        result: Err(ServiceError::Unavailable("timeout".into())),
    });

    assert!(gallery.is_loading());
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failures_are_recorded_in_diagnostics() {
    let h = harness(
        vec![Ok(mixed_documents())],
        Err(ActionError::Failed("disk full".into())),
    );
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut gallery = Gallery::default().with_diagnostics(collector.handle());

    settle(&mut gallery, &h.deps, Event::Initialize).await;
    settle(
        &mut gallery,
        &h.deps,
        Event::ActionRequested {
            action: Action::Edit,
            document_id: DocumentId::new(1),
        },
    )
    .await;
    collector.process_pending();

    assert_eq!(collector.errors().count(), 1);
    assert!(collector.actions().count() >= 2);
}

#[tokio::test]
async fn lookup_misses_are_audited() {
    let h = harness(
        vec![Ok(vec![
            document(1, 99, Some("image/png"), None),
            document(2, 1, Some("image/png"), Some(42)),
            document(3, 99, None, Some(42)),
        ])],
        Ok(()),
    );
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut gallery = Gallery::default().with_diagnostics(collector.handle());
    settle(&mut gallery, &h.deps, Event::Initialize).await;

    assert_eq!(gallery.audit_lookups(&order()), 2);
    collector.process_pending();
    assert_eq!(collector.warnings().count(), 2);
}
