pub mod handlers;
pub mod routes;
pub mod shared;

use contracts::navigation::HeaderConfig;
use std::sync::Arc;

/// Shared state of the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub header: Arc<HeaderConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log files go next to the build output
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let duration = start.elapsed();
        if response.status().is_success() || response.status().is_redirection() {
            tracing::info!("{:>5}ms | {} {:>6} {}", duration.as_millis(), status, method, uri.path());
        } else {
            tracing::warn!("{:>5}ms | {} {:>6} {}", duration.as_millis(), status, method, uri.path());
        }

        response
    }

    let config = shared::config::load_config()?;
    tracing::info!(
        "header: {} links, {} product groups, catalog at {}",
        config.header.nav_links.len(),
        config.header.product_groups.len(),
        config.header.catalog_asset_path
    );

    let dist_dir = shared::config::resolve_dir(&config.server.dist_dir);
    let assets_dir = shared::config::resolve_dir(&config.server.assets_dir);
    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "frontend build not found at {}, only the API will respond",
            dist_dir.display()
        );
    }

    let state = AppState {
        header: Arc::new(config.header),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state, &dist_dir, &assets_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
