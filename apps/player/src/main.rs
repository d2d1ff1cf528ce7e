use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcade_player::cli::Cli;
use arcade_player::client::HttpQuestionProvider;
use arcade_player::game;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr and default to warnings so they stay out of the game.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::info!("Starting {} game against {}", cli.mode, cli.backend_url);

    let provider = HttpQuestionProvider::new(&cli.backend_url);
    let input = game::stdin_lines();
    let cancel = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let mut stdout = std::io::stdout();
    game::play(&provider, cli.mode, config, input, &mut stdout, cancel).await?;

    Ok(())
}
