// SPDX-License-Identifier: MPL-2.0
//! Empty state displayed when the order has no documents to show.

use crate::gallery::Event;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state with an "attach file" button.
pub fn view(i18n: &I18n) -> Element<'_, Event> {
    let icon = icons::paperclip()
        .width(sizing::ICON_XXL)
        .height(sizing::ICON_XXL);

    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let attach_button = button(Text::new(i18n.tr("gallery-attach-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Event::AttachRequested);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle)
        .push(attach_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
