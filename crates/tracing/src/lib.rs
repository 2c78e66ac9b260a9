use std::env::{self, VarError};

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

pub const ENV: &str = "CCI_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        let filter = env::var(ENV);
        Self { filter }
    }
}

/// Installs a hierarchical stderr subscriber filtered by `CCI_LOG`
/// (e.g. `CCI_LOG=cci_lexer=trace`). Does nothing when the variable is unset.
/// Returns whether this call installed the global subscriber.
pub fn init_tracing() -> bool {
    let cfg = LoggerConfig::from_env();
    let filter = match cfg.filter {
        Ok(filter) => EnvFilter::new(filter),
        _ => return false,
    };
    let layer = tracing_tree::HierarchicalLayer::default().with_writer(std::io::stderr);
    let subscribe = tracing_subscriber::Registry::default()
        .with(filter)
        .with(layer);
    tracing::subscriber::set_global_default(subscribe).is_ok()
}
