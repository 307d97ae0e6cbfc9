use clap::Parser;
use silverwatch::adapter::inbound::cli::{self, Cli, Commands};
use silverwatch::infrastructure::config::settings::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    let result = match cli.command_or_default() {
        Commands::Run(args) => {
            args.apply_overrides(&mut config);
            config.init_logging();
            cli::run::execute(config).await
        }
        Commands::Price => {
            config.init_logging();
            cli::price::execute(&config).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
