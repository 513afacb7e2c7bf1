use tracing::error;
use tracing_subscriber::EnvFilter;

use mf_fixture::{orchestrator, GenConfig};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GenConfig::default();
    if let Err(err) = orchestrator::run(&config) {
        error!(%err, "fixture generation failed");
        std::process::exit(1);
    }
}
