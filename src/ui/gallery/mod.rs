// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the documents gallery.
//!
//! [`component::State`] owns a [`crate::gallery::Gallery`] and turns its
//! commands into Iced tasks; [`item`] draws one tile and [`empty`] the
//! placeholder shown when the order has no documents.

pub mod component;
pub mod empty;
pub mod item;

pub use component::{Message, State};

use crate::i18n::fluent::I18n;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}
