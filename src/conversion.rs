//! Unit conversion: temperatures and byte sizes

use crate::error::ArgumentError;
use crate::numbers::round_to;
use crate::utils::validation::ensure_not_empty;
use serde::{Deserialize, Serialize};

const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Temperature {
    pub fn symbol(self) -> &'static str {
        match self {
            Temperature::Celsius => "°C",
            Temperature::Fahrenheit => "°F",
            Temperature::Kelvin => "K",
        }
    }

    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Temperature::Celsius => value + 273.15,
            Temperature::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
            Temperature::Kelvin => value,
        }
    }

    fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Temperature::Celsius => kelvin - 273.15,
            Temperature::Fahrenheit => (kelvin - 273.15) * 9.0 / 5.0 + 32.0,
            Temperature::Kelvin => kelvin,
        }
    }
}

/// Convert a temperature between scales.
///
/// Temperatures below absolute zero are rejected.
///
/// # Examples
/// ```
/// use toolbelt::conversion::{convert_temperature, Temperature};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(convert_temperature(100.0, Temperature::Celsius, Temperature::Fahrenheit)?, 212.0);
/// # Ok(())
/// # }
/// ```
pub fn convert_temperature(value: f64, from: Temperature, to: Temperature) -> crate::Result<f64> {
    let kelvin = from.to_kelvin(value);
    // Tolerate float noise right at absolute zero
    if kelvin < ABSOLUTE_ZERO_KELVIN - 1e-9 || value.is_nan() {
        return Err(ArgumentError::InvalidValue {
            field: "temperature".to_string(),
            value: format!("{}{}", value, from.symbol()),
            reason: "below absolute zero".to_string(),
        }
        .into());
    }
    // Twelve decimals hides the float error of the offset arithmetic
    Ok(round_to(to.from_kelvin(kelvin), 12))
}

/// Size unit family used when formatting byte counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteUnits {
    /// Powers of 1024: KiB, MiB, ...
    Binary,
    /// Powers of 1000: kB, MB, ...
    Metric,
}

const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
const METRIC_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

impl ByteUnits {
    pub fn base(self) -> f64 {
        match self {
            ByteUnits::Binary => 1024.0,
            ByteUnits::Metric => 1000.0,
        }
    }

    pub fn units(self) -> &'static [&'static str] {
        match self {
            ByteUnits::Binary => &BINARY_UNITS,
            ByteUnits::Metric => &METRIC_UNITS,
        }
    }
}

/// Render a byte count with the largest unit that keeps the value >= 1.
///
/// # Examples
/// ```
/// use toolbelt::conversion::{format_bytes, ByteUnits};
///
/// assert_eq!(format_bytes(1536, ByteUnits::Binary, 2), "1.5 KiB");
/// assert_eq!(format_bytes(1_500_000, ByteUnits::Metric, 1), "1.5 MB");
/// assert_eq!(format_bytes(512, ByteUnits::Metric, 2), "512 B");
/// ```
pub fn format_bytes(bytes: u64, units: ByteUnits, precision: u32) -> String {
    let base = units.base();
    let names = units.units();
    let mut value = bytes as f64;
    let mut index = 0;
    while value >= base && index < names.len() - 1 {
        value /= base;
        index += 1;
    }
    format!("{} {}", round_to(value, precision), names[index])
}

/// Parse a size such as `"1.5 MiB"`, `"20kb"` or `"512"` into bytes.
///
/// Unit suffixes are matched case-insensitively against both unit tables.
pub fn parse_size(text: &str) -> crate::Result<u64> {
    ensure_not_empty("size", text)?;

    let trimmed = text.trim();
    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    let unit = unit.trim();

    let invalid = |reason: &str| ArgumentError::InvalidValue {
        field: "size".to_string(),
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = number
        .parse()
        .map_err(|_| invalid("expected a number followed by an optional unit"))?;
    let multiplier = unit_multiplier(unit).ok_or_else(|| invalid("unknown size unit"))?;

    Ok((value * multiplier).round() as u64)
}

fn unit_multiplier(unit: &str) -> Option<f64> {
    if unit.is_empty() {
        return Some(1.0);
    }
    let unit = unit.to_lowercase();
    [ByteUnits::Binary, ByteUnits::Metric]
        .into_iter()
        .find_map(|family| {
            family
                .units()
                .iter()
                .position(|name| name.to_lowercase() == unit)
                .map(|exponent| family.base().powi(exponent as i32))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_convert_temperature() {
        assert_eq!(
            convert_temperature(0.0, Temperature::Celsius, Temperature::Kelvin).unwrap(),
            273.15
        );
        assert_eq!(
            convert_temperature(32.0, Temperature::Fahrenheit, Temperature::Celsius).unwrap(),
            0.0
        );
        assert_eq!(
            convert_temperature(-40.0, Temperature::Celsius, Temperature::Fahrenheit).unwrap(),
            -40.0
        );
        assert_eq!(
            convert_temperature(20.0, Temperature::Celsius, Temperature::Celsius).unwrap(),
            20.0
        );
    }

    #[test]
    fn test_convert_temperature_huge_values_stay_finite() {
        let converted =
            convert_temperature(1e300, Temperature::Celsius, Temperature::Celsius).unwrap();
        assert!(converted.is_finite());
        assert_eq!(converted, 1e300);
    }

    #[test]
    fn test_convert_temperature_below_absolute_zero() {
        match convert_temperature(-300.0, Temperature::Celsius, Temperature::Kelvin) {
            Err(AppError::Argument(ArgumentError::InvalidValue { reason, .. })) => {
                assert_eq!(reason, "below absolute zero")
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
        assert!(convert_temperature(-1.0, Temperature::Kelvin, Temperature::Celsius).is_err());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, ByteUnits::Binary, 2), "0 B");
        assert_eq!(format_bytes(1024, ByteUnits::Binary, 2), "1 KiB");
        assert_eq!(format_bytes(1000, ByteUnits::Metric, 2), "1 kB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024, ByteUnits::Binary, 1), "5 GiB");
        assert_eq!(format_bytes(u64::MAX, ByteUnits::Binary, 0), "16 EiB");
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("1.5 KiB").unwrap(), 1536);
        assert_eq!(parse_size("20kb").unwrap(), 20_000);
        assert_eq!(parse_size("2 MB").unwrap(), 2_000_000);
        assert_eq!(parse_size("1 gib").unwrap(), 1024 * 1024 * 1024);
        assert!(parse_size("").is_err());
        assert!(parse_size("ten MB").is_err());
        assert!(parse_size("10 parsecs").is_err());
    }

    #[test]
    fn test_format_then_parse_recovers_exact_multiples() {
        for bytes in [1024u64, 3 * 1024 * 1024, 7 * 1024 * 1024 * 1024] {
            let formatted = format_bytes(bytes, ByteUnits::Binary, 3);
            assert_eq!(parse_size(&formatted).unwrap(), bytes);
        }
    }
}
