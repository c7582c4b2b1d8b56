use crate::app::fetchers::http::read_json;
use crate::core::registry;
use crate::core::status::{classify, translate_status};
use crate::domain::model::{CarrierDefinition, CarrierId, TrackingEvent, TrackingResult};
use crate::domain::ports::CarrierFetcher;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::Client;
use serde_json::Value;

const SITE_URL: &str = "https://www.elta-courier.gr";

/// ELTA Courier, via the form endpoint used by the public tracking page.
pub struct EltaFetcher {
    client: Client,
    endpoint: String,
}

impl EltaFetcher {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn parse(&self, tracking_number: &str, data: &Value) -> Result<TrackingResult> {
        if !is_ok(data.get("status")) {
            let message = match data.get("result") {
                Some(Value::String(message)) => message.clone(),
                Some(Value::Null) | None => "Unknown error".to_string(),
                Some(other) => other.to_string(),
            };
            return Err(TrackerError::CarrierError { message });
        }

        let shipment = data
            .get("result")
            .and_then(|result| result.get(tracking_number));

        let Some(shipment) = shipment.filter(|s| is_ok(s.get("status"))) else {
            tracing::debug!("ELTA has no record of {}", tracking_number);
            return Ok(TrackingResult::not_found(self.carrier(), tracking_number));
        };

        let events: Vec<TrackingEvent> = shipment
            .get("result")
            .and_then(Value::as_array)
            .map(|raw_events| raw_events.iter().map(to_event).collect())
            .unwrap_or_default();

        let status = events
            .first()
            .map(|event| event.status.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let category = classify(&status);

        Ok(TrackingResult::found(
            self.carrier(),
            tracking_number,
            status,
            category,
            events,
        ))
    }
}

#[async_trait]
impl CarrierFetcher for EltaFetcher {
    fn carrier(&self) -> &'static CarrierDefinition {
        registry::carrier(CarrierId::Elta)
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("number", tracking_number)
            .append_pair("s", "0")
            .finish();

        tracing::debug!("Making ELTA request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json, text/javascript, */*")
            .header(ORIGIN, SITE_URL)
            .header(REFERER, format!("{}/search?br={}", SITE_URL, tracking_number))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-requested-with", "XMLHttpRequest")
            .body(body)
            .send()
            .await?;

        let data: Value = read_json(response).await?;
        self.parse(tracking_number, &data)
    }
}

// ELTA sends its flags as 1 or "1"
fn is_ok(flag: Option<&Value>) -> bool {
    match flag {
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s.trim() == "1",
        _ => false,
    }
}

fn text(event: &Value, key: &str) -> String {
    match event.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn to_event(raw: &Value) -> TrackingEvent {
    let raw_status = text(raw, "status");
    let status = translate_status(&raw_status);

    TrackingEvent {
        date: text(raw, "date"),
        time: text(raw, "time"),
        place: text(raw, "place"),
        raw_status: (status != raw_status).then_some(raw_status),
        status,
    }
}
