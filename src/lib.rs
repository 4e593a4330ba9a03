// SPDX-License-Identifier: MPL-2.0
//! `documents_gallery` shows the documents attached to an order, images and
//! PDF documents in separate groups, built with the Iced GUI framework.
//!
//! The [`gallery`] module holds the framework-independent core; [`ui`] and
//! [`app`] render it with Iced, and [`infrastructure`] provides adapters for
//! the collaborator ports declared in [`application`].

#![doc(html_root_url = "https://docs.rs/documents_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
