// SPDX-License-Identifier: MPL-2.0
//! One document tile.
//!
//! Layout, top to bottom: type label, preview (click to view), heading
//! (click to edit), description, delete button. The tile holds no state and
//! reports clicks as gallery [`Event`]s.

use crate::application::port::Action;
use crate::domain::{DocumentKind, DocumentViewModel, TileSize};
use crate::gallery::{Event, Label, TileLabels};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Image, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Everything a tile needs to render.
pub struct ItemProps<'a> {
    pub document: &'a DocumentViewModel,
    pub kind: DocumentKind,
    pub labels: TileLabels,
    pub thumbnail: Option<&'a image::Handle>,
    pub tile_size: TileSize,
    pub i18n: &'a I18n,
}

fn request(action: Action, document: &DocumentViewModel) -> Event {
    Event::ActionRequested {
        action,
        document_id: document.id,
    }
}

pub fn view(props: ItemProps<'_>) -> Element<'_, Event> {
    let ItemProps {
        document,
        kind,
        labels,
        thumbnail,
        tile_size,
        i18n,
    } = props;
    let size = tile_size.value();

    let type_name = label_text(&labels.type_name, i18n, "lookup-unknown-type");
    let type_label = Text::new(i18n.tr_with_args("document-type-label", &[("name", &type_name)]))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let preview = mouse_area(preview(kind, thumbnail, size, i18n))
        .on_press(request(Action::View, document))
        .interaction(iced::mouse::Interaction::Pointer);

    let heading_text = label_text(&labels.heading, i18n, "lookup-unknown-item");
    let heading = button(Text::new(heading_text).size(typography::BODY_LG))
        .padding(0)
        .style(styles::button::link)
        .on_press(request(Action::Edit, document));

    let description = Text::new(document.description.as_str()).size(typography::BODY);

    let delete = tooltip(
        button(icons::trash().width(sizing::ICON_SM).height(sizing::ICON_SM))
            .padding(spacing::XXS)
            .style(styles::button::delete)
            .on_press(request(Action::Delete, document)),
        Text::new(i18n.tr("document-delete-tooltip")).size(typography::CAPTION),
        tooltip::Position::Top,
    );

    let footer = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(delete);

    let content = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(size))
        .push(type_label)
        .push(preview)
        .push(heading)
        .push(description)
        .push(footer);

    Container::new(content)
        .padding(spacing::SM)
        .style(styles::container::tile)
        .into()
}

fn preview<'a>(
    kind: DocumentKind,
    thumbnail: Option<&'a image::Handle>,
    size: f32,
    i18n: &'a I18n,
) -> Element<'a, Event> {
    let body: Element<'a, Event> = match (kind, thumbnail) {
        (DocumentKind::Image, Some(handle)) => Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        (DocumentKind::Pdf, _) => icons::pdf_file()
            .width(sizing::ICON_XXL)
            .height(sizing::ICON_XXL)
            .into(),
        (DocumentKind::Image, None) => Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(
                icons::broken_image()
                    .width(sizing::ICON_XL)
                    .height(sizing::ICON_XL),
            )
            .push(
                Text::new(i18n.tr("document-preview-unavailable"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .into(),
    };

    Container::new(body)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::preview_placeholder)
        .into()
}

/// Resolved text, or the localized placeholder for an unresolved label.
fn label_text(label: &Label, i18n: &I18n, placeholder_key: &str) -> String {
    label.or(&i18n.tr(placeholder_key)).to_string()
}
