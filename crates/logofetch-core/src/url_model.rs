//! Logo URL modeling: file extension from the URL path.

/// Extension used when the URL path has no recognized image suffix.
pub const FALLBACK_EXTENSION: &str = ".img";

/// Derives the output file extension from the path component of `url`.
///
/// Case-insensitive suffix match on the path only (query and fragment are ignored):
/// `.svg`, `.png`, `.jpg`/`.jpeg` (both map to `.jpg`), otherwise `.img`.
pub fn extension_from_url(url: &str) -> &'static str {
    let path = url_path(url).to_ascii_lowercase();
    if path.ends_with(".svg") {
        ".svg"
    } else if path.ends_with(".png") {
        ".png"
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        ".jpg"
    } else {
        FALLBACK_EXTENSION
    }
}

/// Path component of an absolute URL; for anything unparseable, the raw text up to `?` or `#`.
fn url_path(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(|c: char| c == '?' || c == '#').next().unwrap_or("").to_string(),
    }
}
