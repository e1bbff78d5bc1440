use lumina_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    let _ = dotenv::dotenv();

    // 2. Configuration + logging
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        "Lumina reporting server starting..."
    );

    // 3. Run until ctrl-c
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
