//! Dimensional signatures
//!
//! A physical dimension is represented as a vector of exponents over the
//! 7 SI base dimensions: [length, mass, time, current, temperature,
//! amount, luminosity]. Two units are convertible iff their dimensions
//! are equal.

use std::fmt;
use serde::{Deserialize, Serialize};

/// The dimension of a physical quantity, as exponents of the 7 SI base
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity]
    pub exponents: [i32; 7],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0] };

    /// Length [L]
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0] };

    /// Mass [M]
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0] };

    /// Time [T]
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0] };

    /// Electric current [I]
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0] };

    /// Thermodynamic temperature [Θ]
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0] };

    /// Amount of substance [N]
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0] };

    /// Luminous intensity [J]
    pub const LUMINOSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0] };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0] };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2, 0, 0, 0, 0] };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0] };

    /// Create a dimension from raw exponents
    pub fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    /// Check whether every exponent is zero
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Compose under unit multiplication (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Compose under unit division (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] - other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Compose under unit exponentiation (multiply exponents)
    pub fn power(&self, exp: i32) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] * exp;
        }
        Dimension { exponents: result }
    }

    /// Negate all exponents
    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
    }

    #[test]
    fn test_velocity() {
        let velocity = Dimension::LENGTH.divide(&Dimension::TIME);
        assert_eq!(velocity, Dimension::VELOCITY);
    }

    #[test]
    fn test_force() {
        let acceleration = Dimension::VELOCITY.divide(&Dimension::TIME);
        let force = Dimension::MASS.multiply(&acceleration);
        assert_eq!(force, Dimension::FORCE);
    }

    #[test]
    fn test_power() {
        assert_eq!(Dimension::LENGTH.power(2), Dimension::AREA);
        assert_eq!(Dimension::LENGTH.power(3), Dimension::VOLUME);
    }

    #[test]
    fn test_invert() {
        let frequency = Dimension::TIME.invert();
        assert_eq!(frequency.exponents, [0, 0, -1, 0, 0, 0, 0]);
        assert_eq!(frequency.invert(), Dimension::TIME);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::FORCE), "L M T^-2");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Dimension::VELOCITY).unwrap();
        assert_eq!(json, r#"{"exponents":[1,0,-1,0,0,0,0]}"#);
        let back: Dimension = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Dimension::VELOCITY);
    }
}
