pub(crate) const EARTH_RADIUS_KILOMETERS: f64 = 6_371.0;

/// Speed limit used when an edge carries no usable `maxspeed` value.
pub const DEFAULT_MAX_SPEED_KMH: f64 = 30.0;
