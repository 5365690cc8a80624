//! Logger module
//!
//! Logging utilities for the server:
//! - Server lifecycle logging (startup line, bind failure, shutdown)
//! - Access logging in combined/common formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// The single informational startup line; printed only after a successful bind
pub fn log_server_start(addr: &SocketAddr) {
    write_info(&format!("Serving HTTP on http://{addr}/"));
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    write_error(&format!("Failed to bind {addr}: {err}"));
}

pub fn log_shutdown() {
    write_info("Shutting down");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
