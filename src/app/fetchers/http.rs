use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TrackerError};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

const BOM: char = '\u{feff}';

pub fn build_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent())
        .build()?;
    Ok(client)
}

/// Read a carrier response as JSON. Anything but 200 is an error; a leading
/// byte-order mark is dropped before parsing.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("Carrier response status: {}", status);

    if status != StatusCode::OK {
        return Err(TrackerError::HttpStatusError {
            status: status.as_u16(),
        });
    }

    let text = response.text().await?;
    parse_json(&text)
}

pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let body = text.strip_prefix(BOM).unwrap_or(text);
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Failed to decode carrier body: {}", e);
        TrackerError::decode(body)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_parse_json_strips_bom() {
        let value: Value = parse_json("\u{feff}{\"status\":1}").unwrap();
        assert_eq!(value["status"], 1);
    }

    #[test]
    fn test_parse_json_without_bom() {
        let value: Value = parse_json("{\"status\":0}").unwrap();
        assert_eq!(value["status"], 0);
    }

    #[test]
    fn test_parse_json_reports_body_snippet() {
        let err = parse_json::<Value>("<html>blocked</html>").unwrap_err();
        assert_eq!(err.to_string(), "JSON decode error: <html>blocked</html>");
    }
}
