//! Command-line configuration (flags with environment fallbacks).

use clap::Parser;

use stockroom_core::DomainResult;
use stockroom_inventory::Warehouse;
use stockroom_observability::{LogConfig, LogFormat};

#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about = "Interactive inventory manager for a single warehouse")]
pub struct Config {
    /// Start with an empty inventory instead of the sample stock
    #[arg(long, env = "STOCKROOM_EMPTY")]
    pub empty: bool,

    /// Log line format: text or json
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "STOCKROOM_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            default_filter: self.log_level.clone(),
        }
    }

    /// The session state this configuration starts with.
    pub fn warehouse(&self) -> DomainResult<Warehouse> {
        if self.empty {
            Ok(Warehouse::default())
        } else {
            Warehouse::with_sample_stock()
        }
    }
}
