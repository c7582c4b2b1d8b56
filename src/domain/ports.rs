use crate::domain::model::{CarrierDefinition, CarrierId, TrackingResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn min_length(&self) -> usize;
    fn max_batch_size(&self) -> usize;
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
    fn endpoint_override(&self, carrier: CarrierId) -> Option<&str>;
}

/// Carrier-specific "fetch and normalize" capability.
///
/// Implementors only provide `track`, which may fail. Callers use `fetch`,
/// which folds every error into a failed `TrackingResult`.
#[async_trait]
pub trait CarrierFetcher: Send + Sync {
    fn carrier(&self) -> &'static CarrierDefinition;

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult>;

    async fn fetch(&self, tracking_number: &str) -> TrackingResult {
        match self.track(tracking_number).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    "❌ {} lookup failed for {}: {}",
                    self.carrier().name,
                    tracking_number,
                    e
                );
                TrackingResult::failure(Some(self.carrier()), tracking_number, e.to_string())
            }
        }
    }
}

pub type FetcherMap = HashMap<CarrierId, Arc<dyn CarrierFetcher>>;
