//! Decimal fields arrive as JSON strings (`"5000.00"`) from the backend's
//! serializers, or as plain numbers from hand-written fixtures. These helpers
//! accept both.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

impl Raw {
    fn into_f64<E: Error>(self) -> Result<f64, E> {
        match self {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal `{text}`"))),
        }
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Raw::deserialize(deserializer)?.into_f64()
}

pub fn deserialize_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Option::<Raw>::deserialize(deserializer)?
        .map(Raw::into_f64)
        .transpose()
}
