//! Command line configuration.

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::models::DEFAULT_ITEM_COUNT;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "scrollto-tui",
    about = "Scroll-to-index carousel with start/center/end alignment"
)]
pub struct Config {
    /// Number of carousel items
    #[arg(
        long = "items",
        default_value_t = DEFAULT_ITEM_COUNT,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub item_count: usize,

    /// Seed for item generation (defaults to the item count)
    #[arg(long)]
    seed: Option<u64>,
}

impl Config {
    /// Effective generator seed
    pub fn seed(&self) -> u64 {
        // Seeding with the item count keeps the default sequence stable
        self.seed.unwrap_or(self.item_count as u64)
    }
}
