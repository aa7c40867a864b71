//! Request/response data transfer objects

pub mod auth;
pub mod claims;
pub mod records;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional amount that historical clients sent either as
/// a JSON number or as a form-field string; an empty string means absent.
pub(crate) fn flexible_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(amount)) => Ok(Some(amount)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
