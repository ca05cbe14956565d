//! # geocoding-builder
//!
//! Reusable builders that stage geocoding parameters and assemble them into
//! request value objects.
//!
//! ## Overview
//!
//! A [`GeocoderRequestBuilder`] collects an address, a coordinate, a bounding
//! box, a region hint and a sensor flag. Each call to [`Builder::build`]
//! creates a fresh request and applies only the parameters that were set.
//! Coordinates and bounds are produced through shared [`CoordinateBuilder`]
//! and [`BoundBuilder`] instances, and resetting the request builder resets
//! them as well.
//!
//! ## Quick Start
//!
//! ```rust
//! use geocoding_builder::{Builder, GeocoderRequestBuilder};
//!
//! # fn main() -> geocoding_builder::Result<()> {
//! let mut builder: GeocoderRequestBuilder = GeocoderRequestBuilder::default();
//! builder
//!     .set_address("10 Downing Street, London")
//!     .set_bound_corners(51.28, -0.49, 51.69, 0.33)
//!     .set_region("uk")
//!     .set_sensor(false);
//!
//! let request = builder.build()?;
//! assert!(request.is_valid());
//! assert_eq!(request.region(), Some("uk"));
//!
//! builder.reset();
//! assert!(builder.is_reset());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | The common [`Builder`] contract and [`Shared`] handles |
//! | [`base`] | [`Coordinate`], [`Bound`] and their builders |
//! | [`geocoding`] | [`GeocoderRequest`], its builder and defaults |

pub mod base;
pub mod builder;
pub mod geocoding;

pub use base::{Bound, BoundBuilder, Coordinate, CoordinateArgs, CoordinateBuilder};
pub use builder::{shared, Builder, Shared};
pub use geocoding::{
    GeocoderRequest, GeocoderRequestBuilder, GeocoderRequestTarget, RequestDefaults,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
