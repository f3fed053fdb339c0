//! Destination filename derivation from the fetched URL.

use url::Url;

/// Name used when the URL path yields no usable segment.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Last non-empty path segment of `url`, for use as the destination name.
///
/// Returns `None` for root/empty paths and for the reserved `.` / `..`
/// segments.
pub fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Like [`filename_from_url`], falling back to [`DEFAULT_FILENAME`].
pub fn destination_name(url: &Url) -> String {
    filename_from_url(url).unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
