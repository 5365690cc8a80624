use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

use http::mime::MimeTable;

/// The one content-type override this server exists for: platform MIME
/// defaults frequently mislabel or omit WebAssembly binaries.
const WASM_EXTENSION: &str = ".wasm";
const WASM_CONTENT_TYPE: &str = "application/wasm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind before printing anything: a port conflict must abort with a
    // diagnostic instead of a misleading startup banner.
    let listener = match server::listener::bind(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let mime = MimeTable::with_defaults().with_override(WASM_EXTENSION, WASM_CONTENT_TYPE);
    let state = Arc::new(config::AppState::new(cfg, mime));

    logger::log_server_start(&addr);

    let shutdown = server::signal::shutdown();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::connection::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
