pub mod api;
pub mod dashboards;
pub mod dataset;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request timing log: cyan for 200, brown for everything else
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Utc;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let color_code = if response.status().as_u16() == 200 {
            "36"
        } else {
            "33"
        };
        println!(
            "{} | \x1b[{}m{:>5}ms\x1b[0m | {} {:>6} {}",
            Utc::now().format("%H:%M:%S"),
            color_code,
            duration.as_millis(),
            response.status().as_u16(),
            method,
            uri.path()
        );

        response
    }

    let config = shared::config::load_config()?;
    let bind_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!(
        "Analytical store endpoint: {}",
        config.store.endpoint()
    );
    shared::config::init_config(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SESSION / SELECTION STATE
        // ========================================
        .route("/api/session", post(api::handlers::session::create_session))
        .route(
            "/api/session/:id/selection",
            get(api::handlers::session::get_selection)
                .put(api::handlers::session::update_selection),
        )
        // ========================================
        // DASHBOARDS (d100-d102)
        // ========================================
        .route(
            "/api/d100/product",
            get(api::handlers::d100_product::get_product_dashboard),
        )
        .route(
            "/api/d101/sales",
            get(api::handlers::d101_sales::get_sales_dashboard),
        )
        .route(
            "/api/d102/insights",
            get(api::handlers::d102_insights::get_insights_dashboard),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", bind_addr);
    let listener = match TcpListener::bind(bind_addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", bind_addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    bind_addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", bind_addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
