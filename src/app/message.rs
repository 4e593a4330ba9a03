// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ActionError;
use crate::domain::DocumentId;
use crate::ui::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// The attach dialog closed; `Ok(None)` when nothing was picked.
    AttachFinished(Result<Option<DocumentId>, ActionError>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest describing the order and its documents.
    pub manifest: Option<PathBuf>,
    /// Directory holding `settings.toml`, instead of the platform default.
    pub config_dir: Option<PathBuf>,
}
