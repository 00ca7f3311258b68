//! Number formatting and geographic distance helpers

use crate::error::ArgumentError;
use crate::utils::validation::ensure_in_range;
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
const MILES_PER_KILOMETER: f64 = 0.621371;

/// A point on the globe, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn validate(&self) -> crate::Result<()> {
        ensure_in_range("latitude", self.latitude, -90.0, 90.0)?;
        ensure_in_range("longitude", self.longitude, -180.0, 180.0)
    }
}

/// Great-circle distance expressed in three units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub meters: f64,
    pub kilometers: f64,
    pub miles: f64,
}

/// Great-circle distance between two points using the haversine formula.
///
/// Each unit is rounded to `precision` decimal places.
///
/// # Examples
/// ```
/// use toolbelt::numbers::{haversine_distance, Coordinate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let london = Coordinate::new(51.5074, -0.1278);
/// let distance = haversine_distance(paris, london, 0)?;
/// assert_eq!(distance.kilometers, 344.0);
/// # Ok(())
/// # }
/// ```
pub fn haversine_distance(from: Coordinate, to: Coordinate, precision: u32) -> crate::Result<Distance> {
    from.validate()?;
    to.validate()?;

    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let lat_delta = lat_to - lat_from;
    let lon_delta = (to.longitude - from.longitude).to_radians();

    let a = (lat_delta / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (lon_delta / 2.0).sin().powi(2);
    let angle = 2.0 * a.sqrt().asin();
    let meters = angle * EARTH_RADIUS_METERS;
    let kilometers = meters / 1000.0;

    Ok(Distance {
        meters: round_to(meters, precision),
        kilometers: round_to(kilometers, precision),
        miles: round_to(kilometers * MILES_PER_KILOMETER, precision),
    })
}

/// Round half away from zero to `precision` decimal places.
///
/// Values that cannot be scaled without overflowing are already exact at that
/// precision and come back unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format with grouped thousands and a fixed number of decimals.
///
/// # Examples
/// ```
/// use toolbelt::numbers::format_number;
///
/// assert_eq!(format_number(1234567.891, 2, ".", ","), "1,234,567.89");
/// assert_eq!(format_number(-1234.5, 0, ",", " "), "-1 235");
/// ```
pub fn format_number(value: f64, decimals: usize, decimal_point: &str, thousands_separator: &str) -> String {
    let rounded = round_to(value, decimals as u32);
    let formatted = format!("{:.*}", decimals, rounded.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(thousands_separator);
        }
        grouped.push(*digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}{}{}", sign, grouped, decimal_point, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 22nd, ...
pub fn ordinal(number: i64) -> String {
    let suffix = match (number.rem_euclid(100), number.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}

/// `part` as a percentage of `total`
pub fn percentage(part: f64, total: f64, precision: u32) -> crate::Result<f64> {
    if total == 0.0 {
        return Err(ArgumentError::InvalidValue {
            field: "total".to_string(),
            value: total.to_string(),
            reason: "cannot compute a percentage of zero".to_string(),
        }
        .into());
    }
    Ok(round_to(part / total * 100.0, precision))
}

/// Short human form of large numbers: 1.2K, 3.4M, 5B, 1T
pub fn abbreviate(value: f64, precision: u32) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (threshold, suffix) in SUFFIXES {
        if value.abs() >= threshold {
            return format!("{}{}", round_to(value / threshold, precision), suffix);
        }
    }
    format!("{}", round_to(value, precision))
}

pub fn is_between(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_haversine_identical_points_is_zero() {
        let point = Coordinate::new(35.6762, 139.6503);
        let distance = haversine_distance(point, point, 3).unwrap();
        assert_eq!(distance.meters, 0.0);
        assert_eq!(distance.kilometers, 0.0);
        assert_eq!(distance.miles, 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let los_angeles = Coordinate::new(34.0522, -118.2437);
        let distance = haversine_distance(new_york, los_angeles, 2).unwrap();
        assert!((distance.kilometers - 3935.75).abs() < 1.0);
        assert!((distance.miles - distance.kilometers * MILES_PER_KILOMETER).abs() < 0.05);
        assert!((distance.meters / 1000.0 - distance.kilometers).abs() < 0.01);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = Coordinate::new(-33.8688, 151.2093);
        let b = Coordinate::new(51.5074, -0.1278);
        let forward = haversine_distance(a, b, 4).unwrap();
        let backward = haversine_distance(b, a, 4).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_haversine_rejects_invalid_coordinates() {
        let valid = Coordinate::new(0.0, 0.0);
        match haversine_distance(Coordinate::new(95.0, 0.0), valid, 2) {
            Err(AppError::Argument(ArgumentError::OutOfRange { field, .. })) => {
                assert_eq!(field, "latitude")
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
        assert!(haversine_distance(valid, Coordinate::new(0.0, 181.0), 2).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_round_to_extreme_precision() {
        assert_eq!(round_to(0.0, 400), 0.0);
        assert_eq!(round_to(1.25, u32::MAX), 1.25);
        assert_eq!(round_to(1e300, 12), 1e300);
        assert!(!round_to(123.456, 320).is_nan());
    }

    #[test]
    fn test_haversine_identical_points_at_any_precision() {
        let point = Coordinate::new(10.0, 10.0);
        for precision in [0, 15, 400, u32::MAX] {
            let distance = haversine_distance(point, point, precision).unwrap();
            assert_eq!(distance.meters, 0.0, "precision {}", precision);
            assert_eq!(distance.kilometers, 0.0);
            assert_eq!(distance.miles, 0.0);
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 2, ".", ","), "0.00");
        assert_eq!(format_number(999.0, 0, ".", ","), "999");
        assert_eq!(format_number(1000.0, 0, ".", ","), "1,000");
        assert_eq!(format_number(1234567.891, 2, ",", "."), "1.234.567,89");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(121), "121st");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 3.0, 2).unwrap(), 33.33);
        assert_eq!(percentage(50.0, 200.0, 0).unwrap(), 25.0);
        assert!(percentage(1.0, 0.0, 2).is_err());
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate(950.0, 1), "950");
        assert_eq!(abbreviate(1200.0, 1), "1.2K");
        assert_eq!(abbreviate(3_460_000.0, 1), "3.5M");
        assert_eq!(abbreviate(2_000_000_000.0, 1), "2B");
    }

    #[test]
    fn test_is_between() {
        assert!(is_between(5.0, 1.0, 10.0));
        assert!(is_between(1.0, 1.0, 10.0));
        assert!(!is_between(10.5, 1.0, 10.0));
    }
}
