// Server module entry point
// Listener construction, connection handling, and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;
