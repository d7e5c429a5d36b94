//! VDI CLI - Interactive lifecycle manager for cloud virtual desktops

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vdi_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let Cli {} = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // A keyboard interrupt at any blocking wait ends the whole process with a
    // goodbye; no cleanup beyond process exit.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nGood bye then!");
            std::process::exit(0);
        }
    });

    let code = match vdi_cli::run().await {
        Ok(end) => end.exit_code(),
        Err(error) => {
            tracing::error!(%error, "session aborted");
            eprintln!("Error: {error:#}");
            1
        }
    };
    std::process::exit(code);
}
