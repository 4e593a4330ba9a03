// SPDX-License-Identifier: MPL-2.0
//! Framework-independent documents gallery.
//!
//! The gallery shows the documents attached to an order in two groups,
//! images and PDF documents, and routes view/edit/delete/attach requests to
//! the host. Everything here is plain Rust: [`Gallery`] is a state machine
//! that consumes [`Event`]s and answers with a [`Command`], and
//! [`Dependencies`] executes those commands against the collaborator ports.
//! The Iced adapter in [`crate::ui::gallery`] is a thin layer on top.
//!
//! ```ignore
//! let mut gallery = Gallery::new(LookupMissPolicy::Placeholder);
//! settle(&mut gallery, &deps, Event::Initialize).await;
//! for image in gallery.images() {
//!     println!("{}", gallery.document_heading(&order, image)?);
//! }
//! ```

mod classify;
mod controller;
mod lookup;
mod refresh;
mod runtime;

pub use classify::{group, images, pdf_documents, Groups};
pub use controller::{Command, Event, Gallery, Snapshot};
pub use lookup::{
    document_heading, document_type_name, Label, LookupError, LookupMissPolicy, TileLabels,
    ORDER_DOCUMENT_HEADING,
};
pub use refresh::{RefreshSequencer, RefreshToken};
pub use runtime::{fetch_snapshot, settle, Dependencies};
