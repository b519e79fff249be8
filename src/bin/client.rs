//! Map client.
//!
//! `map-client fill` inserts random entries into the remote map until
//! Ctrl+C; `map-client size` prints the current map size.

use tokio::signal;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use map_filler::{Cli, ClientError, Driver, TcpMapService};

/// Conventional exit status for a process stopped by SIGINT.
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the progress lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Cli::parse_lenient(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let driver = Driver::new(TcpMapService, args.config());

    // First Ctrl+C stops the run; a second one exits on the spot.
    let token = driver.cancellation_token();
    tokio::spawn(async move {
        if let Ok(()) = signal::ctrl_c().await {
            info!("interrupted, stopping");
            token.cancel();
        }
        if let Ok(()) = signal::ctrl_c().await {
            eprintln!("Interrupted again, exiting");
            std::process::exit(EXIT_INTERRUPTED);
        }
    });

    let mut stdout = std::io::stdout();
    match driver.run(args.command.as_deref(), &mut stdout).await {
        Ok(_) => {}
        Err(ClientError::Interrupted) => {
            eprintln!("Interrupted");
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
