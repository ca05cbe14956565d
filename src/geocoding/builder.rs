use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::request::{GeocoderRequest, GeocoderRequestTarget};
use crate::base::{BoundBuilder, CoordinateArgs, CoordinateBuilder};
use crate::builder::{lock_for_reset, shared, Builder, Shared};
use crate::Result;

type Factory<R> = Arc<dyn Fn() -> R + Send + Sync>;

/// Builder for geocoder requests.
///
/// Stages optional parameters and applies only the ones that were set to a
/// freshly constructed request on every [`build`](Builder::build). The
/// coordinate and bound builders are shared handles, so callers may pass
/// instances that other builders use as well; [`reset`](Builder::reset)
/// resets them too.
///
/// A staged value can only be cleared by a full reset.
pub struct GeocoderRequestBuilder<R = GeocoderRequest> {
    factory: Factory<R>,
    coordinate_builder: Shared<CoordinateBuilder>,
    bound_builder: Shared<BoundBuilder>,
    address: Option<String>,
    coordinate: Option<CoordinateArgs>,
    /// South-west corner, then north-east corner.
    bound: Option<(CoordinateArgs, CoordinateArgs)>,
    region: Option<String>,
    sensor: Option<bool>,
}

impl<R> GeocoderRequestBuilder<R>
where
    R: GeocoderRequestTarget + Default + 'static,
{
    /// Create a builder producing `R::default()` requests.
    pub fn new(
        coordinate_builder: Shared<CoordinateBuilder>,
        bound_builder: Shared<BoundBuilder>,
    ) -> Self {
        Self::with_factory(R::default, coordinate_builder, bound_builder)
    }
}

impl<R: GeocoderRequestTarget> GeocoderRequestBuilder<R> {
    /// Create a builder producing requests from `factory`.
    pub fn with_factory(
        factory: impl Fn() -> R + Send + Sync + 'static,
        coordinate_builder: Shared<CoordinateBuilder>,
        bound_builder: Shared<BoundBuilder>,
    ) -> Self {
        let mut builder = Self {
            factory: Arc::new(factory),
            coordinate_builder,
            bound_builder,
            address: None,
            coordinate: None,
            bound: None,
            region: None,
            sensor: None,
        };
        builder.reset();
        builder
    }

    pub fn coordinate_builder(&self) -> &Shared<CoordinateBuilder> {
        &self.coordinate_builder
    }

    pub fn set_coordinate_builder(
        &mut self,
        coordinate_builder: Shared<CoordinateBuilder>,
    ) -> &mut Self {
        self.coordinate_builder = coordinate_builder;
        self
    }

    pub fn bound_builder(&self) -> &Shared<BoundBuilder> {
        &self.bound_builder
    }

    pub fn set_bound_builder(&mut self, bound_builder: Shared<BoundBuilder>) -> &mut Self {
        self.bound_builder = bound_builder;
        self
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = Some(address.into());
        self
    }

    /// Staged `(latitude, longitude, no_wrap)`.
    pub fn coordinate(&self) -> Option<CoordinateArgs> {
        self.coordinate
    }

    /// Stage a coordinate. Pass `true` for `no_wrap` unless wrapping is wanted.
    pub fn set_coordinate(&mut self, latitude: f64, longitude: f64, no_wrap: bool) -> &mut Self {
        self.coordinate = Some((latitude, longitude, no_wrap));
        self
    }

    /// Stage a coordinate with `no_wrap` enabled.
    pub fn set_lat_lng(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.set_coordinate(latitude, longitude, true)
    }

    /// Staged corners as `(south_west, north_east)`, each `(latitude, longitude, no_wrap)`.
    pub fn bound(&self) -> Option<(CoordinateArgs, CoordinateArgs)> {
        self.bound
    }

    /// Stage a bound. Latitudes and longitudes come first, then the two
    /// `no_wrap` flags in the same corner order.
    pub fn set_bound(
        &mut self,
        south_west_latitude: f64,
        south_west_longitude: f64,
        north_east_latitude: f64,
        north_east_longitude: f64,
        south_west_no_wrap: bool,
        north_east_no_wrap: bool,
    ) -> &mut Self {
        self.bound = Some((
            (south_west_latitude, south_west_longitude, south_west_no_wrap),
            (north_east_latitude, north_east_longitude, north_east_no_wrap),
        ));
        self
    }

    /// Stage a bound with `no_wrap` enabled on both corners.
    pub fn set_bound_corners(
        &mut self,
        south_west_latitude: f64,
        south_west_longitude: f64,
        north_east_latitude: f64,
        north_east_longitude: f64,
    ) -> &mut Self {
        self.set_bound(
            south_west_latitude,
            south_west_longitude,
            north_east_latitude,
            north_east_longitude,
            true,
            true,
        )
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn set_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.region = Some(region.into());
        self
    }

    pub fn sensor(&self) -> Option<bool> {
        self.sensor
    }

    pub fn set_sensor(&mut self, sensor: bool) -> &mut Self {
        self.sensor = Some(sensor);
        self
    }

    /// True when no parameter is staged.
    pub fn is_reset(&self) -> bool {
        self.address.is_none()
            && self.coordinate.is_none()
            && self.bound.is_none()
            && self.region.is_none()
            && self.sensor.is_none()
    }
}

impl Default for GeocoderRequestBuilder<GeocoderRequest> {
    /// Fresh collaborators, with the bound builder sharing the coordinate builder.
    fn default() -> Self {
        let coordinate_builder = shared(CoordinateBuilder::new());
        let bound_builder = shared(BoundBuilder::new(coordinate_builder.clone()));
        Self::new(coordinate_builder, bound_builder)
    }
}

impl<R: GeocoderRequestTarget> Builder for GeocoderRequestBuilder<R> {
    type Output = R;

    fn reset(&mut self) -> &mut Self {
        lock_for_reset(&self.coordinate_builder).reset();
        lock_for_reset(&self.bound_builder).reset();

        self.address = None;
        self.coordinate = None;
        self.bound = None;
        self.region = None;
        self.sensor = None;

        debug!("geocoder request builder reset");
        self
    }

    fn build(&self) -> Result<R> {
        let mut request = (self.factory)();

        if let Some(address) = &self.address {
            request.set_address(address.clone())?;
        }

        if let Some((latitude, longitude, no_wrap)) = self.coordinate {
            request.set_coordinate(latitude, longitude, no_wrap)?;
        }

        if let Some(((sw_lat, sw_lng, sw_no_wrap), (ne_lat, ne_lng, ne_no_wrap))) = self.bound {
            request.set_bound(sw_lat, sw_lng, ne_lat, ne_lng, sw_no_wrap, ne_no_wrap)?;
        }

        if let Some(region) = &self.region {
            request.set_region(region.clone())?;
        }

        if let Some(sensor) = self.sensor {
            request.set_sensor(sensor)?;
        }

        debug!(
            address = self.address.is_some(),
            coordinate = self.coordinate.is_some(),
            bound = self.bound.is_some(),
            region = self.region.is_some(),
            sensor = self.sensor.is_some(),
            "built geocoder request"
        );
        Ok(request)
    }
}

impl<R> fmt::Debug for GeocoderRequestBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderRequestBuilder")
            .field("address", &self.address)
            .field("coordinate", &self.coordinate)
            .field("bound", &self.bound)
            .field("region", &self.region)
            .field("sensor", &self.sensor)
            .finish_non_exhaustive()
    }
}
