use crate::core::detector::{detect, normalize};
use crate::core::registry;
use crate::domain::model::TrackingResult;
use crate::domain::ports::{ConfigProvider, FetcherMap};
use crate::utils::error::{Result, TrackerError};
use futures::stream::{self, StreamExt};

/// Turns user supplied tracking numbers into tracking results, one per
/// input and in input order.
pub struct Tracker {
    fetchers: FetcherMap,
    min_length: usize,
    max_batch_size: usize,
    concurrent_requests: usize,
}

impl Tracker {
    pub fn with_fetchers<C: ConfigProvider + ?Sized>(config: &C, fetchers: FetcherMap) -> Self {
        Self {
            fetchers,
            min_length: config.min_length(),
            max_batch_size: config.max_batch_size(),
            concurrent_requests: config.concurrent_requests().max(1),
        }
    }

    /// Validate a client supplied batch, then track every number in it.
    pub async fn track_batch<S: AsRef<str>>(&self, numbers: &[S]) -> Result<Vec<TrackingResult>> {
        if numbers.is_empty() {
            return Err(TrackerError::validation(
                "trackingNumbers must contain at least one tracking number",
            ));
        }
        if self.max_batch_size > 0 && numbers.len() > self.max_batch_size {
            return Err(TrackerError::validation(format!(
                "at most {} tracking numbers can be tracked at once, got {}",
                self.max_batch_size,
                numbers.len()
            )));
        }

        Ok(self.track_all(numbers).await)
    }

    pub async fn track_all<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<TrackingResult> {
        tracing::info!("📦 Tracking {} number(s)", numbers.len());

        // buffered() 保留輸入順序，同時限制同時進行的請求數
        let lookups: Vec<_> = numbers
            .iter()
            .map(|number| self.track_one(number.as_ref()))
            .collect();
        let results: Vec<TrackingResult> = stream::iter(lookups)
            .buffered(self.concurrent_requests)
            .collect()
            .await;

        let failed = results.iter().filter(|r| !r.success).count();
        tracing::info!(
            "✅ Tracked {} number(s), {} failed",
            results.len(),
            failed
        );
        results
    }

    pub async fn track_one(&self, raw: &str) -> TrackingResult {
        let tracking_number = normalize(raw);

        if tracking_number.chars().count() < self.min_length {
            tracing::debug!("Rejecting too short tracking number {:?}", tracking_number);
            return TrackingResult::invalid_format(&tracking_number);
        }

        let Some(carrier_id) = detect(&tracking_number) else {
            tracing::debug!("No carrier matches {}", tracking_number);
            return TrackingResult::undetected(&tracking_number);
        };

        tracing::debug!("{} detected as {}", tracking_number, carrier_id);

        let result = match self.fetchers.get(&carrier_id) {
            Some(fetcher) => fetcher.fetch(&tracking_number).await,
            None => TrackingResult::not_implemented(registry::carrier(carrier_id), &tracking_number),
        };

        tracing::debug!(
            "{} -> {} ({})",
            tracking_number,
            result.status,
            result.status_category
        );
        result
    }
}
