//! Rectangular viewport and its builder.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::coordinate::{Coordinate, CoordinateBuilder};
use crate::builder::{lock_for_build, lock_for_reset, shared, Builder, Shared};
use crate::Result;

/// Staged `(latitude, longitude, no_wrap)` triple.
pub type CoordinateArgs = (f64, f64, bool);

/// A viewport described by its south-west and north-east corners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    south_west: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    north_east: Option<Coordinate>,
}

impl Bound {
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            south_west: Some(south_west),
            north_east: Some(north_east),
        }
    }

    pub fn south_west(&self) -> Option<&Coordinate> {
        self.south_west.as_ref()
    }

    pub fn set_south_west(&mut self, south_west: Coordinate) {
        self.south_west = Some(south_west);
    }

    pub fn north_east(&self) -> Option<&Coordinate> {
        self.north_east.as_ref()
    }

    pub fn set_north_east(&mut self, north_east: Coordinate) {
        self.north_east = Some(north_east);
    }

    pub fn has_coordinates(&self) -> bool {
        self.south_west.is_some() && self.north_east.is_some()
    }
}

/// Stages the corners of a [`Bound`].
///
/// Corners are built through a coordinate builder which may be shared with
/// other builders; it is reset before each corner is staged into it.
#[derive(Debug)]
pub struct BoundBuilder {
    coordinate_builder: Shared<CoordinateBuilder>,
    south_west: Option<CoordinateArgs>,
    north_east: Option<CoordinateArgs>,
}

impl BoundBuilder {
    pub fn new(coordinate_builder: Shared<CoordinateBuilder>) -> Self {
        let mut builder = Self {
            coordinate_builder,
            south_west: None,
            north_east: None,
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

    pub fn south_west(&self) -> Option<CoordinateArgs> {
        self.south_west
    }

    pub fn set_south_west(&mut self, latitude: f64, longitude: f64, no_wrap: bool) -> &mut Self {
        self.south_west = Some((latitude, longitude, no_wrap));
        self
    }

    pub fn north_east(&self) -> Option<CoordinateArgs> {
        self.north_east
    }

    pub fn set_north_east(&mut self, latitude: f64, longitude: f64, no_wrap: bool) -> &mut Self {
        self.north_east = Some((latitude, longitude, no_wrap));
        self
    }

    /// True when no corner has been staged since the last reset.
    pub fn is_reset(&self) -> bool {
        self.south_west.is_none() && self.north_east.is_none()
    }

    fn build_corner(&self, (latitude, longitude, no_wrap): CoordinateArgs) -> Result<Coordinate> {
        let mut coordinates = lock_for_build(&self.coordinate_builder, "bound_builder")?;
        coordinates
            .reset()
            .set_latitude(latitude)
            .set_longitude(longitude)
            .set_no_wrap(no_wrap)
            .build()
    }
}

impl Default for BoundBuilder {
    fn default() -> Self {
        Self::new(shared(CoordinateBuilder::new()))
    }
}

impl Builder for BoundBuilder {
    type Output = Bound;

    fn reset(&mut self) -> &mut Self {
        lock_for_reset(&self.coordinate_builder).reset();
        self.south_west = None;
        self.north_east = None;
        trace!("bound builder reset");
        self
    }

    fn build(&self) -> Result<Bound> {
        let mut bound = Bound::default();
        if let Some(corner) = self.south_west {
            bound.set_south_west(self.build_corner(corner)?);
        }
        if let Some(corner) = self.north_east {
            bound.set_north_east(self.build_corner(corner)?);
        }
        Ok(bound)
    }
}
