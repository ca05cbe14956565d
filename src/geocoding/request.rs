//! Geocoder request value object.

use serde::{Deserialize, Serialize};

use crate::base::{Bound, Coordinate};
use crate::Result;

/// Setter surface a request builder drives when it builds a request.
///
/// Implement this for any request type that should be produced by
/// [`GeocoderRequestBuilder`](super::GeocoderRequestBuilder). A setter error
/// aborts the build.
pub trait GeocoderRequestTarget {
    fn set_address(&mut self, address: String) -> Result<()>;

    fn set_coordinate(&mut self, latitude: f64, longitude: f64, no_wrap: bool) -> Result<()>;

    fn set_bound(
        &mut self,
        south_west_latitude: f64,
        south_west_longitude: f64,
        north_east_latitude: f64,
        north_east_longitude: f64,
        south_west_no_wrap: bool,
        north_east_no_wrap: bool,
    ) -> Result<()>;

    fn set_region(&mut self, region: String) -> Result<()>;

    fn set_sensor(&mut self, sensor: bool) -> Result<()>;
}

/// Parameters of a forward (address) or reverse (coordinate) geocoding lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocoderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bound: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sensor: Option<bool>,
}

impl GeocoderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref()
    }

    pub fn has_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound(&self) -> Option<&Bound> {
        self.bound.as_ref()
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn has_sensor(&self) -> bool {
        self.sensor.is_some()
    }

    pub fn sensor(&self) -> Option<bool> {
        self.sensor
    }

    /// A request needs something to look up: an address or a coordinate.
    pub fn is_valid(&self) -> bool {
        self.has_address() || self.has_coordinate()
    }
}

impl GeocoderRequestTarget for GeocoderRequest {
    fn set_address(&mut self, address: String) -> Result<()> {
        self.address = Some(address);
        Ok(())
    }

    fn set_coordinate(&mut self, latitude: f64, longitude: f64, no_wrap: bool) -> Result<()> {
        self.coordinate = Some(Coordinate::new(latitude, longitude, no_wrap)?);
        Ok(())
    }

    fn set_bound(
        &mut self,
        south_west_latitude: f64,
        south_west_longitude: f64,
        north_east_latitude: f64,
        north_east_longitude: f64,
        south_west_no_wrap: bool,
        north_east_no_wrap: bool,
    ) -> Result<()> {
        let south_west =
            Coordinate::new(south_west_latitude, south_west_longitude, south_west_no_wrap)?;
        let north_east =
            Coordinate::new(north_east_latitude, north_east_longitude, north_east_no_wrap)?;
        self.bound = Some(Bound::new(south_west, north_east));
        Ok(())
    }

    fn set_region(&mut self, region: String) -> Result<()> {
        self.region = Some(region);
        Ok(())
    }

    fn set_sensor(&mut self, sensor: bool) -> Result<()> {
        self.sensor = Some(sensor);
        Ok(())
    }
}
