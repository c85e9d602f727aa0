// src/utils/url.rs

//! URL manipulation utilities.

/// Resolve a possibly relative link against the source origin.
///
/// Links that already carry an http(s) scheme are returned unchanged. Any
/// other link is appended to the origin with exactly one `/` between them.
///
/// # Examples
/// ```
/// use travelsafe::utils::url::resolve;
///
/// assert_eq!(
///     resolve(Some("italy/rome/"), "https://www.travelsafe-abroad.com").as_deref(),
///     Some("https://www.travelsafe-abroad.com/italy/rome/")
/// );
/// assert_eq!(resolve(None, "https://www.travelsafe-abroad.com"), None);
/// ```
pub fn resolve(href: Option<&str>, origin: &str) -> Option<String> {
    let href = href.map(str::trim).filter(|h| !h.is_empty())?;

    if is_absolute(href) {
        return Some(href.to_string());
    }

    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        Some(format!("{origin}{href}"))
    } else {
        Some(format!("{origin}/{href}"))
    }
}

/// Whether `href` starts with an http(s) scheme.
pub fn is_absolute(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Final non-empty path segment of a URL.
///
/// ```
/// use travelsafe::utils::url::last_path_segment;
///
/// assert_eq!(
///     last_path_segment("https://www.travelsafe-abroad.com/italy/bologna/"),
///     Some("bologna".to_string())
/// );
/// ```
pub fn last_path_segment(page_url: &str) -> Option<String> {
    let parsed = url::Url::parse(page_url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// Whether the URL's host is `allowed_host` or one of its subdomains.
pub fn belongs_to(page_url: &str, allowed_host: &str) -> bool {
    let Ok(parsed) = url::Url::parse(page_url) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let allowed = allowed_host.trim().to_lowercase();
    parsed.host_str().is_some_and(|host| {
        let host = host.to_lowercase();
        host == allowed || host.ends_with(&format!(".{allowed}"))
    })
}
