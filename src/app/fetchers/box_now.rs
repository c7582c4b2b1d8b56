use crate::app::fetchers::http::read_json;
use crate::core::registry;
use crate::core::status::{classify, humanize, translate_status};
use crate::domain::model::{
    CarrierDefinition, CarrierId, StatusCategory, TrackingEvent, TrackingResult,
};
use crate::domain::ports::CarrierFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header::{ACCEPT, ORIGIN};
use reqwest::Client;
use serde::Deserialize;

// `data` and `events` may be missing or null
#[derive(Debug, Deserialize)]
struct TrackResponse {
    #[serde(default)]
    data: Option<Vec<Parcel>>,
}

#[derive(Debug, Deserialize)]
struct Parcel {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    events: Option<Vec<ParcelEvent>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParcelEvent {
    #[serde(default)]
    create_time: Option<String>,
    #[serde(default)]
    location_display_name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Box Now parcel lockers, via the public JSON tracking API.
pub struct BoxNowFetcher {
    client: Client,
    endpoint: String,
}

impl BoxNowFetcher {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn parse(&self, tracking_number: &str, response: TrackResponse) -> TrackingResult {
        let Some(parcel) = response.data.unwrap_or_default().into_iter().next() else {
            tracing::debug!("Box Now has no record of {}", tracking_number);
            return TrackingResult::not_found(self.carrier(), tracking_number);
        };

        let events: Vec<TrackingEvent> = parcel
            .events
            .unwrap_or_default()
            .into_iter()
            .map(to_event)
            .collect();

        let state = parcel.state.unwrap_or_default();
        let status = if state.is_empty() {
            "Unknown".to_string()
        } else {
            describe(&state)
        };

        // 包裹存在但狀態無法分類時，視為運送中
        let category = match classify(&status) {
            StatusCategory::Unknown => StatusCategory::InTransit,
            category => category,
        };

        TrackingResult::found(self.carrier(), tracking_number, status, category, events)
    }
}

#[async_trait]
impl CarrierFetcher for BoxNowFetcher {
    fn carrier(&self) -> &'static CarrierDefinition {
        registry::carrier(CarrierId::BoxNow)
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        tracing::debug!("Making Box Now request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(ORIGIN, "https://boxnow.gr")
            .json(&serde_json::json!({ "parcelId": tracking_number }))
            .send()
            .await?;

        let data: TrackResponse = read_json(response).await?;
        Ok(self.parse(tracking_number, data))
    }
}

/// English text for a Box Now machine state such as `in-depot`.
fn describe(state: &str) -> String {
    let translated = translate_status(state);
    if translated == state {
        humanize(state)
    } else {
        translated
    }
}

/// Split an ISO timestamp into date and time-of-day text.
fn split_timestamp(timestamp: &str) -> (String, String) {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return (
            parsed.format("%Y-%m-%d").to_string(),
            parsed.format("%H:%M:%S").to_string(),
        );
    }

    match timestamp.split_once('T') {
        Some((date, time)) => (date.to_string(), time.chars().take(8).collect()),
        None => (timestamp.to_string(), String::new()),
    }
}

fn to_event(raw: ParcelEvent) -> TrackingEvent {
    let (date, time) = split_timestamp(raw.create_time.as_deref().unwrap_or_default());
    let kind = raw.kind.unwrap_or_default();
    let status = describe(&kind);

    TrackingEvent {
        date,
        time,
        place: raw.location_display_name.unwrap_or_default(),
        raw_status: (status != kind).then_some(kind),
        status,
    }
}
