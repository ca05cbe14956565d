//! Geographic coordinate and its builder.

use serde::{Deserialize, Serialize};

use crate::builder::Builder;
use crate::{Error, ErrorContext, Result};

/// A latitude/longitude pair.
///
/// `no_wrap` keeps the longitude from wrapping across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    #[serde(default = "default_no_wrap")]
    no_wrap: bool,
}

fn default_no_wrap() -> bool {
    true
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64, no_wrap: bool) -> Result<Self> {
        check_finite("coordinate.latitude", latitude)?;
        check_finite("coordinate.longitude", longitude)?;
        Ok(Self {
            latitude,
            longitude,
            no_wrap,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn no_wrap(&self) -> bool {
        self.no_wrap
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            no_wrap: true,
        }
    }
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::validation_with_context(
            "value must be a finite number",
            ErrorContext::new()
                .with_field_path(field)
                .with_details(value.to_string())
                .with_source("coordinate"),
        ))
    }
}

/// Stages the parts of a [`Coordinate`].
#[derive(Debug, Clone)]
pub struct CoordinateBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    no_wrap: bool,
}

impl CoordinateBuilder {
    pub fn new() -> Self {
        Self {
            latitude: None,
            longitude: None,
            no_wrap: true,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: f64) -> &mut Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: f64) -> &mut Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn no_wrap(&self) -> bool {
        self.no_wrap
    }

    pub fn set_no_wrap(&mut self, no_wrap: bool) -> &mut Self {
        self.no_wrap = no_wrap;
        self
    }

    /// True when nothing has been staged since the last reset.
    pub fn is_reset(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.no_wrap
    }
}

impl Default for CoordinateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for CoordinateBuilder {
    type Output = Coordinate;

    fn reset(&mut self) -> &mut Self {
        self.latitude = None;
        self.longitude = None;
        self.no_wrap = true;
        self
    }

    fn build(&self) -> Result<Coordinate> {
        let latitude = self.latitude.ok_or_else(|| missing("coordinate.latitude"))?;
        let longitude = self.longitude.ok_or_else(|| missing("coordinate.longitude"))?;
        Coordinate::new(latitude, longitude, self.no_wrap)
    }
}

fn missing(field: &str) -> Error {
    Error::validation_with_context(
        "value is not set",
        ErrorContext::new()
            .with_field_path(field)
            .with_source("coordinate_builder"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_finite() {
        let err = Coordinate::new(f64::NAN, 2.0, true).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("coordinate.latitude")
        );

        let err = Coordinate::new(1.0, f64::INFINITY, true).unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("coordinate.longitude")
        );
    }

    #[test]
    fn test_builder_builds_staged_values() {
        let mut builder = CoordinateBuilder::new();
        builder.set_latitude(48.85).set_longitude(2.35).set_no_wrap(false);

        let coordinate = builder.build().unwrap();
        assert_eq!(coordinate.latitude(), 48.85);
        assert_eq!(coordinate.longitude(), 2.35);
        assert!(!coordinate.no_wrap());
    }

    #[test]
    fn test_builder_requires_latitude_and_longitude() {
        let mut builder = CoordinateBuilder::new();
        builder.set_longitude(2.35);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("coordinate.latitude")
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut builder = CoordinateBuilder::new();
        builder.set_latitude(1.0).set_longitude(2.0).set_no_wrap(false);
        assert!(!builder.is_reset());

        builder.reset();
        assert!(builder.is_reset());
        assert_eq!(builder.latitude(), None);
        assert_eq!(builder.longitude(), None);
        assert!(builder.no_wrap());
    }

    #[test]
    fn test_default_is_origin_without_wrap() {
        assert_eq!(Coordinate::default(), Coordinate::new(0.0, 0.0, true).unwrap());
    }

    #[test]
    fn test_deserialize_defaults_no_wrap() {
        let coordinate: Coordinate =
            serde_json::from_str(r#"{"latitude": 1.5, "longitude": -3.0}"#).unwrap();
        assert_eq!(coordinate, Coordinate::new(1.5, -3.0, true).unwrap());
    }
}
