use crate::domain::model::{CarrierDefinition, TrackingResult};
use crate::domain::ports::CarrierFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Stand-in for carriers we can detect but not yet track. Never touches the
/// network.
pub struct UnsupportedFetcher {
    carrier: &'static CarrierDefinition,
}

impl UnsupportedFetcher {
    pub fn new(carrier: &'static CarrierDefinition) -> Self {
        Self { carrier }
    }
}

#[async_trait]
impl CarrierFetcher for UnsupportedFetcher {
    fn carrier(&self) -> &'static CarrierDefinition {
        self.carrier
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        Ok(TrackingResult::not_implemented(self.carrier, tracking_number))
    }
}
