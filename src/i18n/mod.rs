// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! Only the application chrome is translated (section titles, buttons,
//! placeholders). Document headings such as "Order Document" are data and
//! are produced by [`crate::gallery`] as-is.

pub mod fluent;
