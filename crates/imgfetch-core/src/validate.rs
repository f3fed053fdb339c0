//! Image URL validation.
//!
//! Pure predicate: no network or filesystem access. A candidate passes only
//! if its extension is on the image allow-list and it looks like an
//! HTTP(S) URL.

use regex::Regex;

/// Extensions accepted by the extension filter. Case-sensitive, matched
/// against the suffix after the last `.`.
const VALID_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// URL shape: http(s) scheme, optional `www.`, 2-256 host/path chars, a dot,
/// a 2-6 letter lowercase TLD, then optional trailing path/query chars.
const URL_SHAPE: &str =
    r"((http|https)://)(www\.)?[a-zA-Z0-9@:%._+~#?&/=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%._+~#?&/=]*)";

/// Decides whether a raw input line is an acceptable, fetchable image URL.
pub struct UrlValidator {
    shape: Regex,
}

impl UrlValidator {
    pub fn new() -> Self {
        let shape = Regex::new(URL_SHAPE).expect("URL shape pattern compiles");
        Self { shape }
    }

    /// True iff `raw` (after trimming) carries an allow-listed image
    /// extension and matches the URL shape. Extension is checked first since
    /// it is the cheaper filter; the result does not depend on the order.
    pub fn is_valid(&self, raw: &str) -> bool {
        let raw = raw.trim();
        if raw.is_empty() {
            return false;
        }
        let ext = raw.rsplit('.').next().unwrap_or("");
        if !VALID_EXTENSIONS.contains(&ext) {
            return false;
        }
        self.shape.is_match(raw)
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}
