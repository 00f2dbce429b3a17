use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    let _ = dotenvy::dotenv();
    init_tracing();

    brick_tracker::cli::run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
