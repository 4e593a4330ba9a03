// SPDX-License-Identifier: MPL-2.0
//! Gallery component state and update logic.

use super::{empty, item, ViewContext};
use crate::domain::{DocumentId, DocumentKind, DocumentViewModel, Order, TileSize};
use crate::gallery::{Command, Dependencies, Event, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Task};
use std::collections::HashMap;
use std::fmt;

/// Messages emitted by the gallery component.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event raised by the gallery's own widgets or by the host.
    Gallery(Event),
    /// A command finished; carries the event reporting its outcome, if any.
    CommandFinished(Option<Event>),
}

/// Gallery state plus the collaborators that serve it.
pub struct State {
    gallery: Gallery,
    deps: Dependencies,
    order: Order,
    thumbnails: HashMap<DocumentId, image::Handle>,
    /// Gallery revision the thumbnails were built from.
    thumbnails_revision: u64,
    tile_size: TileSize,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("documents", &self.gallery.documents().len())
            .field("revision", &self.gallery.revision())
            .field("thumbnails", &self.thumbnails.len())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(gallery: Gallery, deps: Dependencies, order: Order, tile_size: TileSize) -> Self {
        Self {
            gallery,
            deps,
            order,
            thumbnails: HashMap::new(),
            thumbnails_revision: 0,
            tile_size,
        }
    }

    /// Loads documents for the first time.
    pub fn initialize(&mut self) -> Task<Message> {
        self.update(Message::Gallery(Event::Initialize))
    }

    /// Reloads documents, e.g. after the host changed them.
    pub fn refresh(&mut self) -> Task<Message> {
        self.update(Message::Gallery(Event::Initialize))
    }

    /// Replaces the order headings are resolved against.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
        self.gallery.audit_lookups(&self.order);
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::Gallery(event) | Message::CommandFinished(Some(event)) => event,
            Message::CommandFinished(None) => return Task::none(),
        };

        let command = self.gallery.update(event);
        self.sync_with_revision();
        self.perform(command)
    }

    fn perform(&self, command: Command) -> Task<Message> {
        if matches!(command, Command::None) {
            return Task::none();
        }
        Task::perform(self.deps.clone().run(command), Message::CommandFinished)
    }

    /// Rebuilds derived data after a snapshot was applied.
    fn sync_with_revision(&mut self) {
        let revision = self.gallery.revision();
        if revision == self.thumbnails_revision {
            return;
        }
        self.thumbnails_revision = revision;
        self.thumbnails = self
            .gallery
            .images()
            .into_iter()
            .filter_map(|doc| {
                let blob = doc.blob.as_ref()?;
                Some((doc.id, image::Handle::from_bytes(blob.bytes().to_vec())))
            })
            .collect();
        self.gallery.audit_lookups(&self.order);
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        if self.gallery.is_loading() {
            return Container::new(
                Text::new(i18n.tr("gallery-loading"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
        }

        let groups = self.gallery.visible_groups(&self.order);
        if groups.is_empty() {
            return empty::view(i18n).map(Message::Gallery);
        }

        let attach_button = button(Text::new(i18n.tr("gallery-attach-button")))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(Event::AttachRequested);
        let header = Row::new()
            .push(Space::new().width(Length::Fill))
            .push(attach_button);

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header);
        if !groups.images.is_empty() {
            content = content.push(self.section(i18n, "gallery-images-heading", &groups.images));
        }
        if !groups.pdfs.is_empty() {
            content = content.push(self.section(i18n, "gallery-documents-heading", &groups.pdfs));
        }

        let content: Element<'a, Event> = content.into();
        scrollable(content.map(Message::Gallery))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section<'a>(
        &'a self,
        i18n: &'a I18n,
        heading_key: &str,
        documents: &[&'a DocumentViewModel],
    ) -> Element<'a, Event> {
        let tiles = documents.iter().filter_map(|&doc| {
            let kind = doc.kind()?;
            let labels = self.gallery.tile_labels(&self.order, doc)?;
            Some(item::view(item::ItemProps {
                document: doc,
                kind,
                labels,
                thumbnail: match kind {
                    DocumentKind::Image => self.thumbnails.get(&doc.id),
                    DocumentKind::Pdf => None,
                },
                tile_size: self.tile_size,
                i18n,
            }))
        });

        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr(heading_key)).size(typography::TITLE_SM))
            .push(
                Row::with_children(tiles)
                    .spacing(spacing::MD)
                    .wrap()
                    .vertical_spacing(spacing::MD),
            )
            .into()
    }
}
