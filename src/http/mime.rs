//! MIME table module
//!
//! Maps file extensions to HTTP Content-Type strings. The table is built
//! once at startup, optionally extended with overrides, and then shared
//! read-only for the life of the process.

use std::collections::HashMap;

/// Content-Type used when an extension has no table entry
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Built-in extension mappings. Keys carry the leading dot.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    // Text
    (".html", "text/html; charset=utf-8"),
    (".htm", "text/html; charset=utf-8"),
    (".css", "text/css"),
    (".txt", "text/plain; charset=utf-8"),
    (".md", "text/plain; charset=utf-8"),
    (".xml", "application/xml"),
    // JavaScript
    (".js", "application/javascript"),
    (".mjs", "application/javascript"),
    (".json", "application/json"),
    // Images
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".ico", "image/x-icon"),
    (".webp", "image/webp"),
    // Video
    (".mp4", "video/mp4"),
    (".webm", "video/webm"),
    (".ogg", "video/ogg"),
    // Audio
    (".mp3", "audio/mpeg"),
    (".wav", "audio/wav"),
    (".flac", "audio/flac"),
    // Fonts
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".ttf", "font/ttf"),
    (".otf", "font/otf"),
    // Documents
    (".pdf", "application/pdf"),
    (".zip", "application/zip"),
    (".gz", "application/gzip"),
    (".tar", "application/x-tar"),
];

/// Immutable extension-to-content-type table
///
/// # Examples
/// ```
/// let table = MimeTable::with_defaults().with_override(".wasm", "application/wasm");
/// assert_eq!(table.content_type(Some("wasm")), "application/wasm");
/// assert_eq!(table.content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(table.content_type(None), "application/octet-stream");
/// ```
#[derive(Debug, Clone)]
pub struct MimeTable {
    entries: HashMap<String, String>,
}

impl MimeTable {
    /// Create a table pre-populated with the built-in mappings
    pub fn with_defaults() -> Self {
        let entries = DEFAULT_TYPES
            .iter()
            .map(|&(ext, ct)| (ext.to_string(), ct.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace a single mapping. `extension` includes the leading dot.
    #[must_use]
    pub fn with_override(mut self, extension: &str, content_type: &str) -> Self {
        self.entries
            .insert(extension.to_ascii_lowercase(), content_type.to_string());
        self
    }

    /// Resolve the Content-Type for a file extension (without leading dot,
    /// as produced by `Path::extension`). Lookup is case-insensitive;
    /// unknown extensions fall back to octet-stream.
    pub fn content_type(&self, extension: Option<&str>) -> &str {
        extension
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .and_then(|key| self.entries.get(&key))
            .map_or(FALLBACK_CONTENT_TYPE, String::as_str)
    }
}
