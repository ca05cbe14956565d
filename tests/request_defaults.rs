//! Defaults loaded from the environment.
//!
//! Kept in its own test binary since it mutates process environment.

use geocoding_builder::geocoding::{REGION_ENV, SENSOR_ENV};
use geocoding_builder::{Builder, GeocoderRequestBuilder, RequestDefaults};

#[test]
fn test_env_defaults_fill_unset_fields() {
    std::env::set_var(REGION_ENV, "br");
    std::env::set_var(SENSOR_ENV, "true");
    let defaults = RequestDefaults::from_env();
    std::env::remove_var(REGION_ENV);
    std::env::remove_var(SENSOR_ENV);

    assert_eq!(defaults.region.as_deref(), Some("br"));
    assert_eq!(defaults.sensor, Some(true));

    let mut builder: GeocoderRequestBuilder = GeocoderRequestBuilder::default();
    builder.set_address("São Paulo").set_region("ar");
    defaults.apply_to(&mut builder);

    let request = builder.build().unwrap();
    assert_eq!(request.region(), Some("ar"));
    assert_eq!(request.sensor(), Some(true));

    // Defaults are staged values, so a reset clears them like any other.
    builder.reset();
    assert_eq!(builder.sensor(), None);
}
