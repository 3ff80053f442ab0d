use ariadne_routing::{GeoPoint, RoutingAlgorithm};

pub fn parse_algorithm(input: &str) -> Result<RoutingAlgorithm, String> {
    input.parse()
}

/// Parses `"lat,lng"` in degrees.
pub fn parse_lat_lng(input: &str) -> Result<GeoPoint, String> {
    let Some((lat, lng)) = input.split_once(',') else {
        return Err(format!("Expected \"lat,lng\", got \"{input}\""));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude \"{}\"", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude \"{}\"", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} is out of range"));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} is out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}
