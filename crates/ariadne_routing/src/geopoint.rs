use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_KILOMETERS;
use crate::distance::{Distance, Kilometers};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<&GeoPoint> for [f64; 2] {
    fn from(value: &GeoPoint) -> Self {
        [value.lng, value.lat]
    }
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other`.
    pub fn haversine_distance(&self, other: &GeoPoint) -> Distance<Kilometers> {
        Distance::from(haversine_distance(self.lat, self.lng, other.lat, other.lng))
    }

    /// Same as [`GeoPoint::haversine_distance`] without rounding to the distance grid.
    #[inline(always)]
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine distance in kilometers between two points given in degrees.
///
/// Malformed input (NaN, infinities) propagates to the result instead of failing.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lng1_rad = lng1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lng2_rad = lng2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lng = lng2_rad - lng1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KILOMETERS * c
}
