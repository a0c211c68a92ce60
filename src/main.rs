use clap::Parser;
use tracing::{error, info};
use wishwatch::app::App;
use wishwatch::cli::Cli;
use wishwatch::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    config.init_logging();
    info!(identity = %cli.identity, "wishwatch starting");

    if let Err(e) = App::run(config, cli.identity).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("wishwatch stopped");
}
