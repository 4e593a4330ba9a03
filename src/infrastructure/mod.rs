// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, backed by the local filesystem, native dialogs and
//! in-process channels.
//!
//! # Available Adapters
//!
//! - [`manifest`]: Documents read from a TOML manifest (implements [`DocumentsService`])
//! - [`dialogs`]: Native dialogs for view/edit/delete (implements [`DocumentActions`])
//! - [`event_bus`]: In-process channel (implements [`EventBus`])
//!
//! [`DocumentsService`]: crate::application::port::DocumentsService
//! [`DocumentActions`]: crate::application::port::DocumentActions
//! [`EventBus`]: crate::application::port::EventBus

pub mod dialogs;
pub mod event_bus;
pub mod manifest;

// Re-export main types for convenience
pub use dialogs::{pick_attachment, DialogActions, DialogStrings};
pub use event_bus::{ChannelEventBus, EventReceiver};
pub use manifest::{DocumentStore, ManifestDocumentsService};
