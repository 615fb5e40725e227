use clap::Parser;
use readnext::cli::commands::Cli;
use readnext::server;
use readnext::ReadNext;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A corrupt corpus aborts startup with the offending row rather than
    // silently serving a partial index.
    let app = match ReadNext::new(&cli.corpus, cli.metric) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing readnext: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(Arc::new(app), cli.addr).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
