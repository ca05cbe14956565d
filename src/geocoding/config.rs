//! Default request parameters loaded from the environment or JSON.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::builder::GeocoderRequestBuilder;
use super::request::GeocoderRequestTarget;
use crate::{Error, ErrorContext, Result};

/// Environment variable holding the default region (e.g. `fr`).
pub const REGION_ENV: &str = "GEOCODING_DEFAULT_REGION";
/// Environment variable holding the default sensor flag (`true`/`false`/`1`/`0`).
pub const SENSOR_ENV: &str = "GEOCODING_DEFAULT_SENSOR";

/// Parameters staged into a builder when the caller left them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub region: Option<String>,
    pub sensor: Option<bool>,
}

impl RequestDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = Some(sensor);
        self
    }

    /// Read defaults from `GEOCODING_DEFAULT_REGION` and `GEOCODING_DEFAULT_SENSOR`.
    ///
    /// Empty or unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let region = lookup(REGION_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let sensor = lookup(SENSOR_ENV).and_then(|raw| {
            let parsed = parse_flag(&raw);
            if parsed.is_none() {
                warn!(value = %raw, "ignoring unparsable {}", SENSOR_ENV);
            }
            parsed
        });
        Self { region, sensor }
    }

    /// Parse defaults from a JSON document such as `{"region": "fr", "sensor": false}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        if defaults.region.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(Error::configuration_with_context(
                "default region must not be empty",
                ErrorContext::new()
                    .with_field_path("region")
                    .with_source("request_defaults"),
            ));
        }
        Ok(defaults)
    }

    /// Stage each default whose field is still unset on `builder`.
    pub fn apply_to<'a, R: GeocoderRequestTarget>(
        &self,
        builder: &'a mut GeocoderRequestBuilder<R>,
    ) -> &'a mut GeocoderRequestBuilder<R> {
        if builder.region().is_none() {
            if let Some(region) = &self.region {
                builder.set_region(region.clone());
            }
        }
        if builder.sensor().is_none() {
            if let Some(sensor) = self.sensor {
                builder.set_sensor(sensor);
            }
        }
        builder
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
