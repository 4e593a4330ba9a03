// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - Documents gallery: sections, tiles and the empty state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icons (visual primitives)

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
