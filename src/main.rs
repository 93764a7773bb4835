use subway::{config::Config, db::init_db_with_max_connections, LineRepository, StationRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool =
        match init_db_with_max_connections(&config.database_path, config.max_connections).await {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Failed to initialize database: {}", e);
                std::process::exit(1);
            }
        };

    let lines = LineRepository::new(pool.clone());
    let stations = StationRepository::new(pool.clone());

    let (lines, stations) = match tokio::try_join!(lines.list_all(), stations.list_all()) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Failed to read stored data: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        lines = lines.len(),
        stations = stations.len(),
        "Subway database ready at {}",
        config.database_path
    );

    pool.close().await;
}
