use std::fmt;

pub const DEFAULT_TEMPERATURE_K: f64 = 298.15;

/// Reference temperature, in Kelvin, at which thermochemistry sections are read.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(kelvin: f64) -> Self {
        Self(kelvin)
    }

    pub fn kelvin(&self) -> f64 {
        self.0
    }

    /// Integer part of the temperature, as used in column names such as `U298K`.
    pub fn label(&self) -> i64 {
        self.0.trunc() as i64
    }

    /// The temperature exactly as ORCA prints it in section headers (two decimals).
    pub fn stamp(&self) -> String {
        format!("{:.2}", self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(DEFAULT_TEMPERATURE_K)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_room_temperature() {
        assert_eq!(Temperature::default().kelvin(), 298.15);
    }

    #[test]
    fn label_truncates_towards_zero() {
        assert_eq!(Temperature::new(298.15).label(), 298);
        assert_eq!(Temperature::new(373.99).label(), 373);
    }

    #[test]
    fn stamp_uses_two_decimals() {
        assert_eq!(Temperature::new(298.15).stamp(), "298.15");
        assert_eq!(Temperature::new(310.0).stamp(), "310.00");
    }

    #[test]
    fn validity_rejects_non_physical_values() {
        assert!(Temperature::new(1.0).is_valid());
        assert!(!Temperature::new(0.0).is_valid());
        assert!(!Temperature::new(-5.0).is_valid());
        assert!(!Temperature::new(f64::NAN).is_valid());
    }
}
