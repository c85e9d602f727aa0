// src/utils/slug.rs

//! Country and city name normalization.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").ok());

/// Turn a display name into a lookup key.
///
/// Lowercases, replaces every run of characters outside `[a-z0-9]` with a
/// single `-` and strips leading and trailing hyphens. Accented letters are
/// not folded, so "Côte" and "Cote" give different slugs.
///
/// ```
/// use travelsafe::utils::slug::normalize;
///
/// assert_eq!(normalize(" COSTA   Rica!! "), "costa-rica");
/// ```
pub fn normalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let Some(re) = NON_ALNUM.as_ref() else {
        return lowered;
    };
    re.replace_all(&lowered, "-").trim_matches('-').to_string()
}
