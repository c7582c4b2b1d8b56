use crate::domain::model::TrackingResult;
use crate::utils::error::Result;
use std::fmt::Write;

/// Plain text block for one result, as printed by the CLI.
pub fn render_text(result: &TrackingResult) -> String {
    let mut out = String::new();
    let icon = if result.success { "📦" } else { "❌" };

    let _ = writeln!(
        out,
        "{} {} [{}] {} ({})",
        icon, result.tracking_number, result.carrier_name, result.status, result.status_category
    );

    if let Some(message) = &result.error_message {
        let _ = writeln!(out, "   {}", message);
    }

    for event in &result.events {
        let when = [event.date.as_str(), event.time.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if event.place.is_empty() {
            let _ = writeln!(out, "   {:<19}  {}", when, event.status);
        } else {
            let _ = writeln!(out, "   {:<19}  {} - {}", when, event.status, event.place);
        }
    }

    out
}

pub fn render_json(results: &[TrackingResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry;
    use crate::domain::model::{CarrierId, StatusCategory, TrackingEvent};

    #[test]
    fn test_render_found_result() {
        let result = TrackingResult::found(
            registry::carrier(CarrierId::Elta),
            "SE101046219GR",
            "Delivered",
            StatusCategory::Delivered,
            vec![TrackingEvent {
                date: "14-03-2024".to_string(),
                time: "12:40".to_string(),
                place: "ΚΑ ΠΑΤΡΑΣ".to_string(),
                status: "Delivered".to_string(),
                raw_status: None,
            }],
        );

        let text = render_text(&result);
        assert!(text.starts_with("📦 SE101046219GR [ELTA Courier] Delivered (delivered)"));
        assert!(text.contains("14-03-2024 12:40"));
        assert!(text.contains("Delivered - ΚΑ ΠΑΤΡΑΣ"));
    }

    #[test]
    fn test_render_failure_includes_message() {
        let result = TrackingResult::invalid_format("AB");
        let text = render_text(&result);

        assert!(text.starts_with("❌ AB [Unknown] Error (error)"));
        assert!(text.contains("Invalid tracking number format"));
    }

    #[test]
    fn test_render_json_is_array() {
        let results = vec![TrackingResult::invalid_format("AB")];
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&results).unwrap()).unwrap();
        assert_eq!(json[0]["errorMessage"], "Invalid tracking number format");
    }
}
