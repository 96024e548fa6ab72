use hr_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, configuration and logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!("HR server starting...");

    // 2. database, migrations and services
    let state = ServerState::initialize(&config).await?;

    // 3. serve until ctrl-c
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
