//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// Every failure is contained here and surfaced as an HTTP status; nothing
/// propagates out to the connection task.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = if method_allowed(&method) {
        let ctx = RequestContext {
            path: &path,
            is_head: method == Method::HEAD,
        };
        static_files::serve_path(&ctx, &state).await
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        http::build_405_response()
    };

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path,
            query,
            http_version: http_version.to_string(),
            status: response.status().as_u16(),
            body_bytes: body_len(&response),
            referer,
            user_agent,
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Only GET and HEAD are served; everything else is rejected with 405
fn method_allowed(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD)
}

fn version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Exact body size of an outgoing response, for access logging
fn body_len(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}
