use anyhow::Result;
use courier_tracker::{build_tracker, CarrierId, StatusCategory, TrackerConfig};
use httpmock::prelude::*;
use serde_json::json;

fn config_for(server: &MockServer) -> TrackerConfig {
    let mut config = TrackerConfig::default();
    config.set_endpoint(CarrierId::Elta, server.url("/track.php"));
    config.set_endpoint(CarrierId::BoxNow, server.url("/api/v1/parcels:track"));
    config
}

#[tokio::test]
async fn test_mixed_batch_end_to_end() -> Result<()> {
    let server = MockServer::start();

    let elta_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/track.php")
            .body("number=SE101046219GR&s=0");
        then.status(200).body(format!(
            "\u{feff}{}",
            json!({
                "status": 1,
                "result": {
                    "SE101046219GR": {
                        "status": 1,
                        "result": [
                            {"date": "14-03-2024", "time": "12:40", "place": "ΚΑ ΠΑΤΡΑΣ", "status": "Αποστολή παραδόθηκε"}
                        ]
                    }
                }
            })
        ));
    });

    let box_now_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/parcels:track")
            .json_body(json!({"parcelId": "BN12345678"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "data": [{
                    "state": "in-depot",
                    "events": [
                        {"createTime": "2024-03-13T09:12:33.120Z", "locationDisplayName": "Athens Depot", "type": "in-depot"}
                    ]
                }]
            }));
    });

    let tracker = build_tracker(&config_for(&server))?;
    let numbers = vec![
        " se101046219gr ".to_string(),
        "AB".to_string(),
        "BN12345678".to_string(),
        "ZZ12345678".to_string(),
        "123456789012".to_string(),
    ];

    let results = tracker.track_batch(&numbers).await?;

    elta_mock.assert();
    box_now_mock.assert();
    assert_eq!(results.len(), numbers.len());

    let elta = &results[0];
    assert!(elta.success);
    assert_eq!(elta.tracking_number, "SE101046219GR");
    assert_eq!(elta.status, "Delivered");
    assert_eq!(elta.status_category, StatusCategory::Delivered);

    let short = &results[1];
    assert!(!short.success);
    assert!(short.error_message.as_deref().unwrap().contains("Invalid"));

    let box_now = &results[2];
    assert!(box_now.success);
    assert_eq!(box_now.carrier_id, "box_now");
    assert_eq!(box_now.status, "In Transit");
    assert_eq!(box_now.status_category, StatusCategory::InTransit);
    assert_eq!(box_now.latest_event.as_ref().unwrap().place, "Athens Depot");

    let unknown = &results[3];
    assert!(!unknown.success);
    assert_eq!(
        unknown.error_message.as_deref(),
        Some("Could not detect courier from tracking number format.")
    );

    let geniki = &results[4];
    assert!(!geniki.success);
    assert_eq!(geniki.carrier_id, "geniki");
    assert_eq!(geniki.status, "Not Implemented");
    assert_eq!(geniki.status_category, StatusCategory::Error);

    Ok(())
}

#[tokio::test]
async fn test_short_numbers_never_reach_the_network() -> Result<()> {
    let server = MockServer::start();
    let catch_all = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({"data": []}));
    });

    let tracker = build_tracker(&config_for(&server))?;
    let results = tracker.track_all(&["AB", "BN123", "  SE1  "]).await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| !r.success));
    assert!(results
        .iter()
        .all(|r| r.error_message.as_deref() == Some("Invalid tracking number format")));
    catch_all.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_unreachable_carrier_yields_error_result() -> Result<()> {
    let mut config = TrackerConfig::default();
    config.set_endpoint(CarrierId::Elta, "http://127.0.0.1:1/track.php");
    config.http.timeout_seconds = 5;

    let tracker = build_tracker(&config)?;
    let result = tracker.track_one("SE101046219GR").await;

    assert!(!result.success);
    assert_eq!(result.carrier_id, "elta");
    assert_eq!(result.status_category, StatusCategory::Error);
    assert!(result.events.is_empty());
    assert!(!result.error_message.unwrap_or_default().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_one_failure_does_not_affect_others() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/track.php");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/parcels:track");
        then.status(200).json_body(json!({"data": []}));
    });

    let tracker = build_tracker(&config_for(&server))?;
    let results = tracker
        .track_all(&["SE101046219GR", "BN99999999", "EL123456789GR"])
        .await;

    assert_eq!(results[0].error_message.as_deref(), Some("HTTP error: 503"));
    assert!(results[1].success);
    assert_eq!(results[1].status, "Not Found");
    assert_eq!(results[1].status_category, StatusCategory::Unknown);
    assert_eq!(results[2].error_message.as_deref(), Some("HTTP error: 503"));

    Ok(())
}

#[tokio::test]
async fn test_empty_batch_is_rejected() -> Result<()> {
    let tracker = build_tracker(&TrackerConfig::default())?;
    let empty: Vec<String> = Vec::new();

    let err = tracker.track_batch(&empty).await.unwrap_err();
    assert!(err.to_string().contains("at least one"));

    Ok(())
}
