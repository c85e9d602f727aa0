// src/services/sanitize.rs

//! Description cleanup for city pages.

use scraper::Selector;

use crate::services::dom::Node;
use crate::utils::text::{collapse_whitespace, truncate_with_marker};

/// Longest description kept before the truncation marker is added.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Prose of `content_root` with widget regions removed.
///
/// Subtrees matching `excluded` (index and sentiment widgets, the related
/// cities box, scripts, styles) are dropped before the text is read. The
/// result is whitespace-collapsed and cut to [`MAX_DESCRIPTION_CHARS`] plus
/// a `...` marker. Returns `None` when nothing is left.
pub fn extract_description(content_root: Node<'_>, excluded: &Selector) -> Option<String> {
    let cleaned = collapse_whitespace(&content_root.text_excluding(excluded));
    if cleaned.is_empty() {
        return None;
    }

    let chars = cleaned.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        log::debug!("Truncating description from {chars} characters");
    }
    Some(truncate_with_marker(cleaned, MAX_DESCRIPTION_CHARS))
}
