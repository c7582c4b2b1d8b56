use crate::core::registry::CARRIERS;
use crate::domain::model::CarrierId;
use crate::utils::error::{Result, TrackerError};
use reqwest::header::HeaderValue;
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> TrackerError {
    TrackerError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// A carrier endpoint must be an absolute http(s) URL with a host.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(invalid(field, endpoint, "Endpoint cannot be empty"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field,
                endpoint,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }

    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "Endpoint has no host"));
    }
    Ok(())
}

/// `[carriers.<key>]` must name a registered carrier.
pub fn validate_carrier_key(key: &str) -> Result<CarrierId> {
    CarrierId::parse(key).ok_or_else(|| {
        let known: Vec<&str> = CARRIERS.iter().map(|c| c.id.as_str()).collect();
        invalid(
            "carriers",
            key,
            format!("Unknown carrier. Known carriers: {}", known.join(", ")),
        )
    })
}

pub fn validate_min(field: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(invalid(field, value, format!("Value must be at least {}", min)));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// The value is sent verbatim as an HTTP header, e.g. `User-Agent`.
pub fn validate_header_value(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| invalid(field, value, "Value is not a valid HTTP header value"))
}

pub fn validate_bind_address(field: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| invalid(field, value, format!("Invalid socket address: {}", e)))
}
