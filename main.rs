use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use poly_mod::fast_io;

#[derive(Parser)]
#[command(name = "main")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluates 337 * n * (n + 1) * (4n - 1) mod 1e9+7 for each test case on stdin", long_about = None)]
struct Cli {
    /// Default log filter when RUST_LOG is unset (logs go to stderr)
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = fast_io::stdin_at_once()
        .map_err(anyhow::Error::from)
        .and_then(|mut input| poly_mod::run(&mut input, &mut fast_io::stdout_buf()));

    match result {
        Ok(lines) => info!(lines, "done"),
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}
