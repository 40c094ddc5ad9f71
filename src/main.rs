use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Warnings only by default; RUST_LOG overrides. Logs go to stderr so
    // they do not fight the TUI over stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    clipboard_history_explorer::cli::run()
}
