// Signal handling module
//
// Supported signals:
// - SIGTERM: shutdown
// - SIGINT:  shutdown (Ctrl+C)

/// Resolve when a termination signal arrives (Unix).
///
/// The caller selects on this future alongside the accept loop, so a
/// signal-triggered shutdown exits the process with status 0.
#[cfg(unix)]
pub async fn shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
