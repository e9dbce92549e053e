//! Drawing unit resolution
//!
//! The `$INSUNITS` header variable (integer 0..=20) selects the drawing
//! unit. Every X/Y coordinate is multiplied by the unit's inches-per-unit
//! factor as it is read, so all downstream geometry is denominated in
//! inches. Code 0 ("unitless"), a missing variable, or an out-of-range
//! code fall back to millimeters unless the converter was told to assume
//! inches instead.

use std::fmt;

/// Inches per meter, the base for all metric entries
pub const INCHES_PER_METER: f64 = 39.370078740157;

/// Inches per millimeter, the default unit scale
pub const INCHES_PER_MM: f64 = 0.039370078740157;

/// Resolved drawing unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Inches,
    Feet,
    Miles,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Microinches,
    Mils,
    Yards,
    Angstroms,
    Nanometers,
    Microns,
    Decimeters,
    Decameters,
    Hectometers,
    Gigameters,
    AstronomicalUnits,
    LightYears,
    Parsecs,
}

impl Units {
    /// Resolve a `$INSUNITS` code. `None`, 0, and out-of-range codes pick
    /// the unitless fallback: millimeters when `millimeter_fallback` is
    /// set, inches otherwise.
    pub fn from_insunits(code: Option<i64>, millimeter_fallback: bool) -> Units {
        match code {
            Some(1) => Units::Inches,
            Some(2) => Units::Feet,
            Some(3) => Units::Miles,
            Some(4) => Units::Millimeters,
            Some(5) => Units::Centimeters,
            Some(6) => Units::Meters,
            Some(7) => Units::Kilometers,
            Some(8) => Units::Microinches,
            Some(9) => Units::Mils,
            Some(10) => Units::Yards,
            Some(11) => Units::Angstroms,
            Some(12) => Units::Nanometers,
            Some(13) => Units::Microns,
            Some(14) => Units::Decimeters,
            Some(15) => Units::Decameters,
            Some(16) => Units::Hectometers,
            Some(17) => Units::Gigameters,
            Some(18) => Units::AstronomicalUnits,
            Some(19) => Units::LightYears,
            Some(20) => Units::Parsecs,
            _ => {
                if millimeter_fallback {
                    Units::Millimeters
                } else {
                    Units::Inches
                }
            }
        }
    }

    /// Inches per one drawing unit
    pub fn inches_per_unit(self) -> f64 {
        match self {
            Units::Inches => 1.0,
            Units::Feet => 12.0,
            Units::Miles => 63360.0,
            Units::Millimeters => INCHES_PER_MM,
            Units::Centimeters => INCHES_PER_METER * 1.0e-2,
            Units::Meters => INCHES_PER_METER,
            Units::Kilometers => INCHES_PER_METER * 1.0e3,
            Units::Microinches => 1.0e-6,
            Units::Mils => 1.0e-3,
            Units::Yards => 36.0,
            Units::Angstroms => INCHES_PER_METER * 1.0e-10,
            Units::Nanometers => INCHES_PER_METER * 1.0e-9,
            Units::Microns => INCHES_PER_METER * 1.0e-6,
            Units::Decimeters => INCHES_PER_METER * 1.0e-1,
            Units::Decameters => INCHES_PER_METER * 1.0e1,
            Units::Hectometers => INCHES_PER_METER * 1.0e2,
            Units::Gigameters => INCHES_PER_METER * 1.0e9,
            Units::AstronomicalUnits => INCHES_PER_METER * 1.495978707e11,
            Units::LightYears => INCHES_PER_METER * 9.4607304725808e15,
            Units::Parsecs => INCHES_PER_METER * 3.0856775814913673e16,
        }
    }

    /// Human-readable unit name
    pub fn label(self) -> &'static str {
        match self {
            Units::Inches => "inches",
            Units::Feet => "feet",
            Units::Miles => "miles",
            Units::Millimeters => "millimeters",
            Units::Centimeters => "centimeters",
            Units::Meters => "meters",
            Units::Kilometers => "kilometers",
            Units::Microinches => "microinches",
            Units::Mils => "mils",
            Units::Yards => "yards",
            Units::Angstroms => "angstroms",
            Units::Nanometers => "nanometers",
            Units::Microns => "microns",
            Units::Decimeters => "decimeters",
            Units::Decameters => "decameters",
            Units::Hectometers => "hectometers",
            Units::Gigameters => "gigameters",
            Units::AstronomicalUnits => "astronomical units",
            Units::LightYears => "light years",
            Units::Parsecs => "parsecs",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeter_fallback() {
        assert_eq!(Units::from_insunits(None, true), Units::Millimeters);
        assert_eq!(Units::from_insunits(Some(0), true), Units::Millimeters);
        assert_eq!(Units::from_insunits(Some(99), true), Units::Millimeters);
    }

    #[test]
    fn test_inches_fallback() {
        let u = Units::from_insunits(Some(0), false);
        assert_eq!(u, Units::Inches);
        assert_eq!(u.inches_per_unit(), 1.0);
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Units::from_insunits(Some(4), true), Units::Millimeters);
        assert_eq!(Units::from_insunits(Some(1), false), Units::Inches);
        assert_eq!(Units::from_insunits(Some(10), true), Units::Yards);
    }

    #[test]
    fn test_constants_are_consistent() {
        assert!((Units::Millimeters.inches_per_unit() - 0.039370078740157).abs() < 1e-18);
        assert_eq!(Units::Miles.inches_per_unit(), 63360.0);
        assert_eq!(Units::Feet.inches_per_unit(), 12.0);
        assert_eq!(Units::Yards.inches_per_unit(), 36.0);
        // a meter is a thousand millimeters
        assert!(
            (Units::Meters.inches_per_unit() - 1000.0 * Units::Millimeters.inches_per_unit())
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Units::Millimeters.label(), "millimeters");
        assert_eq!(Units::AstronomicalUnits.label(), "astronomical units");
        assert_eq!(Units::Inches.to_string(), "inches");
    }
}
