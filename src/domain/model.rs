use serde::{Deserialize, Serialize};
use std::fmt;

/// Carrier id reported for numbers whose format no registered carrier claims.
pub const UNKNOWN_CARRIER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierId {
    BoxNow,
    CourierCenter,
    Speedex,
    Elta,
    Acs,
    Geniki,
}

impl CarrierId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoxNow => "box_now",
            Self::CourierCenter => "courier_center",
            Self::Speedex => "speedex",
            Self::Elta => "elta",
            Self::Acs => "acs",
            Self::Geniki => "geniki",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "box_now" => Some(Self::BoxNow),
            "courier_center" => Some(Self::CourierCenter),
            "speedex" => Some(Self::Speedex),
            "elta" => Some(Self::Elta),
            "acs" => Some(Self::Acs),
            "geniki" => Some(Self::Geniki),
            _ => None,
        }
    }
}

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one carrier. `patterns` are anchored regular
/// expressions evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierDefinition {
    pub id: CarrierId,
    pub name: &'static str,
    pub color: &'static str,
    pub patterns: &'static [&'static str],
    pub endpoint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Delivered,
    InTransit,
    Created,
    Unknown,
    Error,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::InTransit => "in_transit",
            Self::Created => "created",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub date: String,
    pub time: String,
    pub place: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    pub success: bool,
    pub tracking_number: String,
    pub carrier_id: String,
    pub carrier_name: String,
    pub carrier_color: String,
    pub status: String,
    pub status_category: StatusCategory,
    pub events: Vec<TrackingEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_event: Option<TrackingEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TrackingResult {
    /// A shipment the carrier knows about. `latest_event` is taken from the
    /// head of `events`.
    pub fn found(
        carrier: &CarrierDefinition,
        tracking_number: &str,
        status: impl Into<String>,
        status_category: StatusCategory,
        events: Vec<TrackingEvent>,
    ) -> Self {
        let latest_event = events.first().cloned();
        Self {
            success: true,
            status: status.into(),
            status_category,
            events,
            latest_event,
            ..Self::blank(Some(carrier), tracking_number)
        }
    }

    /// The carrier answered but has no record of this number.
    pub fn not_found(carrier: &CarrierDefinition, tracking_number: &str) -> Self {
        Self {
            success: true,
            status: "Not Found".to_string(),
            status_category: StatusCategory::Unknown,
            ..Self::blank(Some(carrier), tracking_number)
        }
    }

    pub fn not_implemented(carrier: &CarrierDefinition, tracking_number: &str) -> Self {
        Self {
            status: "Not Implemented".to_string(),
            error_message: Some(format!(
                "Tracking for {} is not implemented yet",
                carrier.name
            )),
            ..Self::blank(Some(carrier), tracking_number)
        }
    }

    pub fn failure(
        carrier: Option<&CarrierDefinition>,
        tracking_number: &str,
        message: impl Into<String>,
    ) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "Unknown error".to_string();
        }
        Self {
            error_message: Some(message),
            ..Self::blank(carrier, tracking_number)
        }
    }

    pub fn invalid_format(tracking_number: &str) -> Self {
        Self::failure(None, tracking_number, "Invalid tracking number format")
    }

    pub fn undetected(tracking_number: &str) -> Self {
        Self::failure(
            None,
            tracking_number,
            "Could not detect courier from tracking number format.",
        )
    }

    fn blank(carrier: Option<&CarrierDefinition>, tracking_number: &str) -> Self {
        Self {
            success: false,
            tracking_number: tracking_number.to_string(),
            carrier_id: carrier
                .map(|c| c.id.as_str())
                .unwrap_or(UNKNOWN_CARRIER)
                .to_string(),
            carrier_name: carrier.map(|c| c.name).unwrap_or("Unknown").to_string(),
            carrier_color: carrier.map(|c| c.color).unwrap_or("#6b7280").to_string(),
            status: "Error".to_string(),
            status_category: StatusCategory::Error,
            events: Vec::new(),
            latest_event: None,
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CARRIER: CarrierDefinition = CarrierDefinition {
        id: CarrierId::Elta,
        name: "ELTA Courier",
        color: "#1c4f9c",
        patterns: &[r"^SE\d{9}GR$"],
        endpoint: "https://example.com/track.php",
    };

    fn event(status: &str) -> TrackingEvent {
        TrackingEvent {
            date: "12-03-2024".to_string(),
            time: "10:15".to_string(),
            place: "ΑΘΗΝΑ".to_string(),
            status: status.to_string(),
            raw_status: None,
        }
    }

    #[test]
    fn test_found_takes_latest_event_from_head() {
        let result = TrackingResult::found(
            &TEST_CARRIER,
            "SE101046219GR",
            "Delivered",
            StatusCategory::Delivered,
            vec![event("Delivered"), event("In Transit")],
        );

        assert!(result.success);
        assert_eq!(result.latest_event, Some(event("Delivered")));
        assert_eq!(result.carrier_id, "elta");
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_found_without_events_has_no_latest_event() {
        let result = TrackingResult::found(
            &TEST_CARRIER,
            "SE101046219GR",
            "Unknown",
            StatusCategory::Unknown,
            vec![],
        );
        assert!(result.latest_event.is_none());
    }

    #[test]
    fn test_failure_always_carries_a_message() {
        let result = TrackingResult::failure(Some(&TEST_CARRIER), "SE101046219GR", "  ");
        assert!(!result.success);
        assert_eq!(result.status_category, StatusCategory::Error);
        assert_eq!(result.error_message.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_undetected_uses_unknown_carrier() {
        let result = TrackingResult::undetected("ZZ12345678");
        assert_eq!(result.carrier_id, UNKNOWN_CARRIER);
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Could not detect courier"));
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_fields() {
        let result = TrackingResult::not_found(&TEST_CARRIER, "SE101046219GR");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["trackingNumber"], "SE101046219GR");
        assert_eq!(json["statusCategory"], "unknown");
        assert_eq!(json["status"], "Not Found");
        assert!(json.get("latestEvent").is_none());
        assert!(json.get("errorMessage").is_none());
    }

    #[test]
    fn test_carrier_id_round_trips_through_str() {
        for id in [
            CarrierId::BoxNow,
            CarrierId::CourierCenter,
            CarrierId::Speedex,
            CarrierId::Elta,
            CarrierId::Acs,
            CarrierId::Geniki,
        ] {
            assert_eq!(CarrierId::parse(id.as_str()), Some(id));
        }
        assert_eq!(CarrierId::parse("dhl"), None);
    }
}
