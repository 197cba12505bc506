//! Demo binary: ask a Gemini-backed ReAct agent one question.

use react_agent::config::AgentConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "react_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Fail before building tools or touching the network.
    let config = match AgentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    info!(model = %config.model(), "Loaded configuration");

    let mut stdout = std::io::stdout();
    if let Err(e) = react_agent::driver::launch(&config, &mut stdout).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
