pub use uom::si::f64::*;
pub use uom::si::{
    angle::{degree, radian},
    length::{inch, millimeter},
    mass::ton,
};
pub use uom::si::{angle, length, mass};

// Type aliases for domain clarity (zero cost)
pub type Load = Mass;
pub type NominalSize = Length;
pub type RiggingAngle = Angle;

// Common units for convenience
pub mod units {
    pub use uom::si::angle::{degree, radian};
    pub use uom::si::length::{inch, millimeter};
    pub use uom::si::mass::ton;
}

use std::fmt;

#[derive(Debug)]
pub struct DisplayLoad(pub Load);
#[derive(Debug)]
pub struct DisplayAngle(pub Angle);
#[derive(Debug)]
pub struct DisplaySize(pub NominalSize);

impl fmt::Display for DisplayLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ton", self.0.get::<ton>())
    }
}

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0.get::<degree>())
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mm = self.0.get::<millimeter>();
        let inches = self.0.get::<inch>();
        write!(f, "{:.1} mm ({:.3}\")", mm, inches)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown size unit: {0}")]
    UnknownSizeUnit(String),
}

/// Parse a raw catalog size value in the given unit into a NominalSize.
pub fn size_from_raw(value: f64, unit: &str) -> Result<NominalSize, UnitError> {
    match unit {
        "mm" | "Mm" | "MM"
        | "millimeter" | "Millimeter" | "MILLIMETER"
        | "millimeters" | "Millimeters" | "MILLIMETERS" => {
            Ok(NominalSize::new::<millimeter>(value))
        }
        "in" | "In" | "IN"
        | "inch" | "Inch" | "INCH"
        | "inches" | "Inches" | "INCHES" => Ok(NominalSize::new::<inch>(value)),
        _ => Err(UnitError::UnknownSizeUnit(unit.to_string())),
    }
}

/// Express a NominalSize as a raw value in the given catalog unit.
pub fn size_in_unit(size: NominalSize, unit: &str) -> Result<f64, UnitError> {
    match unit {
        "mm" | "Mm" | "MM"
        | "millimeter" | "Millimeter" | "MILLIMETER"
        | "millimeters" | "Millimeters" | "MILLIMETERS" => Ok(size.get::<millimeter>()),
        "in" | "In" | "IN"
        | "inch" | "Inch" | "INCH"
        | "inches" | "Inches" | "INCHES" => Ok(size.get::<inch>()),
        _ => Err(UnitError::UnknownSizeUnit(unit.to_string())),
    }
}
