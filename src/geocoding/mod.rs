//! Geocoding module: the geocoder request value object, its builder, and the
//! defaults that can be staged into a builder.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`GeocoderRequest`] | Address or coordinate lookup with optional bound, region and sensor |
//! | [`GeocoderRequestTarget`] | Setter contract a builder drives on `build` |
//! | [`GeocoderRequestBuilder`] | Reusable builder staging request parameters |
//! | [`RequestDefaults`] | Region/sensor defaults from environment or JSON |

mod builder;
mod config;
mod request;

pub use builder::GeocoderRequestBuilder;
pub use config::{RequestDefaults, REGION_ENV, SENSOR_ENV};
pub use request::{GeocoderRequest, GeocoderRequestTarget};
