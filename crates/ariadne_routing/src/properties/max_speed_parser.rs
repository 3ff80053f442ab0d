use serde::Deserialize;

use crate::constants::DEFAULT_MAX_SPEED_KMH;

/// `maxspeed` value as delivered by the map source, before normalization.
///
/// The source may omit the tag, carry a single value or carry several values
/// for one edge (e.g. when ways were merged).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMaxSpeed {
    #[default]
    Missing,
    Number(f64),
    Single(String),
    Many(Vec<String>),
}

pub struct MaxSpeedParser;

impl MaxSpeedParser {
    /// Normalizes a raw `maxspeed` to km/h.
    ///
    /// Only plain decimal digits count as numeric, the smallest numeric value wins
    /// and anything else falls back to [`DEFAULT_MAX_SPEED_KMH`].
    pub fn parse_max_speed(raw: &RawMaxSpeed) -> f64 {
        let speed = match raw {
            RawMaxSpeed::Missing => None,
            RawMaxSpeed::Number(value) if value.is_finite() && *value > 0.0 => Some(*value),
            RawMaxSpeed::Number(_) => None,
            RawMaxSpeed::Single(value) => parse_numeric(value),
            RawMaxSpeed::Many(values) => values
                .iter()
                .filter_map(|value| parse_numeric(value))
                .min_by(f64::total_cmp),
        };

        speed.unwrap_or(DEFAULT_MAX_SPEED_KMH)
    }
}

fn parse_numeric(value: &str) -> Option<f64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    value
        .parse::<u32>()
        .ok()
        .filter(|speed| *speed > 0)
        .map(f64::from)
}
