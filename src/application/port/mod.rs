// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`documents`]: Fetching an order's documents and the known document types
//! - [`actions`]: Host-supplied view/edit/delete callbacks
//! - [`event_bus`]: Fire-and-forget notifications
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync`; they are shared behind `Arc` and called
//!   from futures executed by Iced's runtime
//! - Asynchronous operations return a boxed `'static` future so callers can
//!   hand them straight to `Task::perform`
//! - Failures are reported with port-specific error enums

pub mod actions;
pub mod documents;
pub mod event_bus;

pub use actions::{Action, ActionError, DocumentActions};
pub use documents::{DocumentsService, ServiceError};
pub use event_bus::{EventBus, ATTACH_IMAGE_EVENT};
