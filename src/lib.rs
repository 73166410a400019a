pub mod api; // HTTP surface: health probe + chat operation
pub mod chatbot; // Intent resolution, safety gate, response composition
pub mod config;
pub mod db;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Start HealthLocker: initialize tracing, prepare the database, and
/// serve the API until the process is stopped.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let runtime = tokio::runtime::Runtime::new().expect("Failed to start async runtime");
    runtime.block_on(serve());
}

async fn serve() {
    let data_dir = config::app_data_dir();
    std::fs::create_dir_all(&data_dir).expect("Cannot create application data directory");

    let db_path = config::database_path();
    // Run migrations once up front; request handlers open per-request
    // connections against the migrated schema.
    db::sqlite::open_database(&db_path).expect("Database initialization failed");

    let classifier = config::ClassifierConfig::from_env();
    tracing::info!(endpoint = %classifier.base_url, "Intent classifier configured");

    let ctx = api::types::ApiContext::new(db_path, classifier);
    let app = api::router::api_router(ctx);

    let addr = config::api_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind API address");
    tracing::info!(%addr, "API listening");

    axum::serve(listener, app)
        .await
        .expect("error while running HealthLocker");
}
