// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are embedded as SVG markup and rendered through Iced's `svg` widget.
//! Handles are cached using `OnceLock` so the markup is parsed once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_document`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $markup:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($markup.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const PDF_FILE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48">
<path d="M12 4h17l9 9v31H12z" fill="#f4f4f4" stroke="#666" stroke-width="2" stroke-linejoin="round"/>
<path d="M29 4v9h9" fill="none" stroke="#666" stroke-width="2" stroke-linejoin="round"/>
<rect x="6" y="24" width="28" height="12" rx="2" fill="#e53935"/>
<text x="20" y="33.5" font-family="sans-serif" font-size="9" font-weight="bold" fill="#fff" text-anchor="middle">PDF</text>
</svg>"##;

const TRASH: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#e53935" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
<path d="M3 6h18"/><path d="M8 6V4h8v2"/><path d="M6 6l1 14h10l1-14"/><path d="M10 11v6M14 11v6"/>
</svg>"##;

const PAPERCLIP: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#666" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
<path d="M21 11.5l-8.6 8.6a5 5 0 0 1-7.1-7.1l8.6-8.6a3.3 3.3 0 0 1 4.7 4.7l-8.6 8.6a1.7 1.7 0 0 1-2.4-2.4l7.9-7.9"/>
</svg>"##;

const BROKEN_IMAGE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#888" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 16l5-5 4 4 3-3 6 6"/><path d="M4 4l16 16"/>
</svg>"##;

define_icon!(pdf_file, PDF_FILE, "Sheet of paper with a red PDF badge.");
define_icon!(trash, TRASH, "Trash can.");
define_icon!(paperclip, PAPERCLIP, "Paperclip, used by the empty state.");
define_icon!(
    broken_image,
    BROKEN_IMAGE,
    "Crossed-out picture for content that cannot be previewed."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_markup_is_svg() {
        for markup in [PDF_FILE, TRASH, PAPERCLIP, BROKEN_IMAGE] {
            assert!(markup.starts_with("<svg"));
            assert!(markup.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn icons_can_be_built_repeatedly() {
        let _ = pdf_file();
        let _ = pdf_file();
        let _ = trash();
        let _ = paperclip();
        let _ = broken_image();
    }
}
