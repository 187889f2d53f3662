use clap::Parser;
use ppi_domains::cli::{execute_command, get_log_level, Cli};
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v so individual targets can be tuned.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(get_log_level(cli.verbose)));

    // stdout is reserved for fetched tables.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("ppi-domains started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = execute_command(cli.command, cli.config).await {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
