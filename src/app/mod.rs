// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires configuration, localization, diagnostics, the
//! document store and the event bus around the gallery component, and reacts
//! to the notifications the gallery publishes.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ActionError, ATTACH_IMAGE_EVENT};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, ErrorType, WarningType};
use crate::domain::DocumentId;
use crate::gallery::{Dependencies, Gallery};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    pick_attachment, ChannelEventBus, DialogActions, DialogStrings, DocumentStore, EventReceiver,
    ManifestDocumentsService,
};
use crate::ui::design_tokens::sizing;
use crate::ui::gallery;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    store: Arc<DocumentStore>,
    events: EventReceiver,
    diagnostics: DiagnosticsCollector,
    dialog_strings: DialogStrings,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("diagnostics", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}

pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads settings and the manifest, wires the adapters and starts the
    /// first fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_from_dir(flags.config_dir.as_deref()).unwrap_or_else(|err| {
            eprintln!("[WARN] {err}; using default settings");
            Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);
        let diagnostics = DiagnosticsCollector::new(config.diagnostics_capacity());

        let store = Arc::new(open_store(
            flags.manifest.or_else(|| config.manifest_path.clone()),
            &diagnostics,
        ));
        let (event_bus, events) = ChannelEventBus::channel();
        let dialog_strings = DialogStrings::from_i18n(&i18n);

        let deps = Dependencies::new(
            Arc::new(ManifestDocumentsService::new(Arc::clone(&store))),
            Arc::new(DialogActions::new(
                Arc::clone(&store),
                dialog_strings.clone(),
            )),
            Arc::new(event_bus),
        );
        let core = Gallery::new(config.lookup_miss_policy()).with_diagnostics(diagnostics.handle());
        let mut gallery =
            gallery::State::new(core, deps, store.order().clone(), config.tile_size());
        let task = gallery.initialize().map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            store,
            events,
            diagnostics,
            dialog_strings,
        };
        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Gallery(msg) => self.gallery.update(msg).map(Message::Gallery),
            Message::AttachFinished(result) => self.handle_attach_finished(result),
        };
        let published = self.handle_published_events();
        self.diagnostics.process_pending();
        Task::batch([task, published])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Reacts to notifications the gallery published since the last update.
    fn handle_published_events(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for event_name in self.events.drain() {
            if event_name == ATTACH_IMAGE_EVENT {
                tasks.push(Task::perform(
                    pick_attachment(Arc::clone(&self.store), self.dialog_strings.clone()),
                    Message::AttachFinished,
                ));
            } else {
                eprintln!("[WARN] Ignoring unknown event '{event_name}'");
            }
        }
        Task::batch(tasks)
    }

    fn handle_attach_finished(
        &mut self,
        result: Result<Option<DocumentId>, ActionError>,
    ) -> Task<Message> {
        match result {
            Ok(Some(_)) => self.gallery.refresh().map(Message::Gallery),
            Ok(None) => Task::none(),
            Err(err) => {
                eprintln!("[ERROR] Failed to attach file: {err}");
                self.diagnostics
                    .handle()
                    .log_error_simple(ErrorType::AttachFailed, err.to_string());
                Task::none()
            }
        }
    }
}

/// Opens the manifest, falling back to an empty store.
fn open_store(
    manifest: Option<std::path::PathBuf>,
    diagnostics: &DiagnosticsCollector,
) -> DocumentStore {
    let Some(path) = manifest else {
        diagnostics
            .handle()
            .log_warning_simple(WarningType::Other, "No manifest given; starting empty");
        return DocumentStore::empty();
    };
    match DocumentStore::load(&path) {
        Ok(store) => {
            let handle = diagnostics.handle();
            for doc in store.documents().unwrap_or_default() {
                if doc.content.is_none() {
                    handle.log_warning_simple(
                        WarningType::MissingContent,
                        format!("Document {} ({}) has no readable file", doc.id, doc.name),
                    );
                }
            }
            store
        }
        Err(err) => {
            eprintln!("[ERROR] Cannot open manifest {}: {err}", path.display());
            diagnostics.handle().log_error_simple(
                ErrorType::Other,
                format!("Cannot open manifest {}: {err}", path.display()),
            );
            DocumentStore::empty()
        }
    }
}
