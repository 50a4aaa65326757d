use tracing::error;
use tracing_subscriber::EnvFilter;

use viewport_measure::{run_viewport_measure, MeasureConfig};

fn load_config(path: &str) -> Option<MeasureConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            error!(path, error = %e, "cannot read configuration file");
            return None;
        }
    };
    match MeasureConfig::from_json_str(&text) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path, error = %e, "ignoring configuration file");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = std::env::args()
        .nth(1)
        .and_then(|path| load_config(&path))
        .unwrap_or_default();

    run_viewport_measure(cfg)
}
