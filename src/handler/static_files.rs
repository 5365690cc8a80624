//! Static file serving module
//!
//! Resolves request paths to files under the served root and builds the
//! response. Resolution never escapes the root: paths are percent-decoded,
//! stripped of `..` segments, and canonicalized before reading.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the served root
#[derive(Debug)]
pub(crate) enum Resolved {
    Found { path: PathBuf, content: Vec<u8> },
    NotFound,
    PermissionDenied,
    Failed(std::io::Error),
}

/// Serve the file a request path resolves to
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;
    match resolve(&routes.root, ctx.path, &routes.index_files).await {
        Resolved::Found { path, content } => {
            let content_type = state
                .mime
                .content_type(path.extension().and_then(|e| e.to_str()));
            response::build_file_response(content, content_type, ctx.is_head)
        }
        Resolved::NotFound => http::build_404_response(),
        Resolved::PermissionDenied => http::build_403_response(),
        Resolved::Failed(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", ctx.path));
            http::build_500_response()
        }
    }
}

/// Resolve a request path to a regular file under `root`
///
/// Directory targets fall back to the first existing index file; a
/// directory without one resolves to `NotFound` (no listing is rendered).
pub(crate) async fn resolve(root: &str, request_path: &str, index_files: &[String]) -> Resolved {
    // Decode before sanitizing so encoded traversal sequences are caught too
    let Ok(decoded) = percent_decode_str(request_path).decode_utf8() else {
        return Resolved::NotFound;
    };

    // Remove leading slash and prevent directory traversal
    let clean_path = decoded.trim_start_matches('/').replace("..", "");

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Served root not found or inaccessible '{root}': {e}"
            ));
            return Resolved::NotFound;
        }
    };

    let mut file_path = Path::new(root).join(&clean_path);

    // Directory targets: try index files in preference order
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // Missing files are common (404), no need to log
    let file_path_canonical = match file_path.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Resolved::PermissionDenied,
        Err(_) => return Resolved::NotFound,
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            file_path_canonical.display()
        ));
        return Resolved::NotFound;
    }

    // Directory with no index file
    if file_path_canonical.is_dir() {
        return Resolved::NotFound;
    }

    match fs::read(&file_path_canonical).await {
        Ok(content) => Resolved::Found {
            path: file_path_canonical,
            content,
        },
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Resolved::NotFound,
            ErrorKind::PermissionDenied => Resolved::PermissionDenied,
            _ => Resolved::Failed(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    /// Temporary served root, removed on drop
    struct TestRoot {
        dir: PathBuf,
    }

    impl TestRoot {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("httpserv-{name}-{}", std::process::id()));
            std_fs::create_dir_all(&dir).expect("create test root");
            Self { dir }
        }

        fn write(&self, relative: &str, content: &[u8]) {
            let path = self.dir.join(relative);
            if let Some(parent) = path.parent() {
                std_fs::create_dir_all(parent).expect("create parent dir");
            }
            std_fs::write(path, content).expect("write test file");
        }

        fn root(&self) -> String {
            self.dir.to_string_lossy().into_owned()
        }
    }

    impl Drop for TestRoot {
        fn drop(&mut self) {
            let _ = std_fs::remove_dir_all(&self.dir);
        }
    }

    fn index_files() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    #[tokio::test]
    async fn test_resolve_existing_file() {
        let root = TestRoot::new("existing");
        root.write("app.wasm", b"\0asm\x01\0\0\0");

        match resolve(&root.root(), "/app.wasm", &index_files()).await {
            Resolved::Found { path, content } => {
                assert_eq!(content, b"\0asm\x01\0\0\0");
                assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wasm"));
            }
            other => panic!("Expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let root = TestRoot::new("missing");
        assert!(matches!(
            resolve(&root.root(), "/nope.txt", &index_files()).await,
            Resolved::NotFound
        ));
    }

    #[tokio::test]
    async fn test_resolve_index_preference() {
        let root = TestRoot::new("index");
        root.write("index.html", b"<h1>hi</h1>");

        match resolve(&root.root(), "/", &index_files()).await {
            Resolved::Found { content, .. } => assert_eq!(content, b"<h1>hi</h1>"),
            other => panic!("Expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_directory_without_index() {
        let root = TestRoot::new("noindex");
        root.write("sub/file.txt", b"data");

        assert!(matches!(
            resolve(&root.root(), "/sub/", &index_files()).await,
            Resolved::NotFound
        ));
    }

    #[tokio::test]
    async fn test_traversal_blocked() {
        let root = TestRoot::new("traversal");
        root.write("inside.txt", b"ok");

        assert!(matches!(
            resolve(&root.root(), "/../outside.txt", &index_files()).await,
            Resolved::NotFound
        ));
        // Encoded variant decodes to "../" before sanitizing
        assert!(matches!(
            resolve(&root.root(), "/%2e%2e/outside.txt", &index_files()).await,
            Resolved::NotFound
        ));
    }

    #[tokio::test]
    async fn test_percent_decoded_name() {
        let root = TestRoot::new("decoded");
        root.write("hello world.txt", b"space");

        match resolve(&root.root(), "/hello%20world.txt", &index_files()).await {
            Resolved::Found { content, .. } => assert_eq!(content, b"space"),
            other => panic!("Expected Found, got {other:?}"),
        }
    }
}
