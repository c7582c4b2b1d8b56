pub mod fetchers;
pub mod report;
#[cfg(feature = "server")]
pub mod server;

use crate::core::tracker::Tracker;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Tracker wired with the built-in carrier integrations.
pub fn build_tracker<C: ConfigProvider + ?Sized>(config: &C) -> Result<Tracker> {
    let fetchers = fetchers::default_fetchers(config)?;
    Ok(Tracker::with_fetchers(config, fetchers))
}
