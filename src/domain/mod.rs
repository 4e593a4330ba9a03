// SPDX-License-Identifier: MPL-2.0
//! Domain layer - order and document types with no UI or I/O concerns.
//!
//! This module contains plain value types and the rules that only depend on
//! them. Apart from `chrono` timestamps it uses nothing but `std`, which keeps
//! the gallery core testable without a window or a runtime.
//!
//! # Modules
//!
//! - [`order`]: The order a gallery is attached to ([`Order`](order::Order),
//!   [`OrderItem`](order::OrderItem))
//! - [`document`]: Stored documents, their types and the projected
//!   [`DocumentViewModel`](document::DocumentViewModel)
//! - [`newtypes`]: Range-checked values ([`TileSize`](newtypes::TileSize),
//!   [`BufferCapacity`](newtypes::BufferCapacity))

pub mod document;
pub mod newtypes;
pub mod order;

pub use document::{
    Blob, DocumentId, DocumentKind, DocumentType, DocumentTypeId, DocumentViewModel,
    OrderDocument, PDF_MIME,
};
pub use newtypes::{BufferCapacity, TileSize};
pub use order::{ItemLocalId, Order, OrderItem};
