pub mod box_now;
pub mod elta;
pub mod http;
pub mod unsupported;

pub use box_now::BoxNowFetcher;
pub use elta::EltaFetcher;
pub use unsupported::UnsupportedFetcher;

use crate::core::registry::{self, CARRIERS};
use crate::domain::model::CarrierId;
use crate::domain::ports::{CarrierFetcher, ConfigProvider, FetcherMap};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

fn endpoint<C: ConfigProvider + ?Sized>(config: &C, id: CarrierId) -> String {
    config
        .endpoint_override(id)
        .unwrap_or(registry::carrier(id).endpoint)
        .to_string()
}

/// One fetcher per registered carrier, sharing a single HTTP client.
pub fn default_fetchers<C: ConfigProvider + ?Sized>(config: &C) -> Result<FetcherMap> {
    let client = http::build_client(config)?;
    let mut fetchers: FetcherMap = HashMap::new();

    for carrier in CARRIERS {
        let fetcher: Arc<dyn CarrierFetcher> = match carrier.id {
            CarrierId::Elta => Arc::new(EltaFetcher::new(
                client.clone(),
                endpoint(config, CarrierId::Elta),
            )),
            CarrierId::BoxNow => Arc::new(BoxNowFetcher::new(
                client.clone(),
                endpoint(config, CarrierId::BoxNow),
            )),
            CarrierId::Acs | CarrierId::Speedex | CarrierId::CourierCenter | CarrierId::Geniki => {
                Arc::new(UnsupportedFetcher::new(carrier))
            }
        };
        fetchers.insert(carrier.id, fetcher);
    }

    Ok(fetchers)
}
