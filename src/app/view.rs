// SPDX-License-Identifier: MPL-2.0
//! Root view of the application window.

use super::{App, Message};
use crate::ui::gallery;
use iced::widget::Container;
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let content = app
        .gallery
        .view(gallery::ViewContext { i18n: &app.i18n })
        .map(Message::Gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
