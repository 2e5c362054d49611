//! Unit prefixes
//!
//! Decimal (SI) and binary (IEC) prefixes. A prefix is pure data: a
//! multiplication factor, a name, and a symbol. Prefixed units combine a
//! singular unit with one of these.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A unit prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefix {
    Decimal(DecimalPrefix),
    Binary(BinaryPrefix),
}

impl Prefix {
    /// The multiplication factor this prefix applies to its unit.
    pub fn factor(&self) -> f64 {
        match self {
            Prefix::Decimal(p) => p.factor(),
            Prefix::Binary(p) => p.factor(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Prefix::Decimal(p) => p.name(),
            Prefix::Binary(p) => p.name(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::Decimal(p) => p.symbol(),
            Prefix::Binary(p) => p.symbol(),
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// SI decimal prefixes, yotta (10^24) down to yocto (10^-24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecimalPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl DecimalPrefix {
    pub fn factor(&self) -> f64 {
        match self {
            DecimalPrefix::Yotta => 1e24,
            DecimalPrefix::Zetta => 1e21,
            DecimalPrefix::Exa => 1e18,
            DecimalPrefix::Peta => 1e15,
            DecimalPrefix::Tera => 1e12,
            DecimalPrefix::Giga => 1e9,
            DecimalPrefix::Mega => 1e6,
            DecimalPrefix::Kilo => 1e3,
            DecimalPrefix::Hecto => 1e2,
            DecimalPrefix::Deca => 1e1,
            DecimalPrefix::Deci => 1e-1,
            DecimalPrefix::Centi => 1e-2,
            DecimalPrefix::Milli => 1e-3,
            DecimalPrefix::Micro => 1e-6,
            DecimalPrefix::Nano => 1e-9,
            DecimalPrefix::Pico => 1e-12,
            DecimalPrefix::Femto => 1e-15,
            DecimalPrefix::Atto => 1e-18,
            DecimalPrefix::Zepto => 1e-21,
            DecimalPrefix::Yocto => 1e-24,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DecimalPrefix::Yotta => "yotta",
            DecimalPrefix::Zetta => "zetta",
            DecimalPrefix::Exa => "exa",
            DecimalPrefix::Peta => "peta",
            DecimalPrefix::Tera => "tera",
            DecimalPrefix::Giga => "giga",
            DecimalPrefix::Mega => "mega",
            DecimalPrefix::Kilo => "kilo",
            DecimalPrefix::Hecto => "hecto",
            DecimalPrefix::Deca => "deca",
            DecimalPrefix::Deci => "deci",
            DecimalPrefix::Centi => "centi",
            DecimalPrefix::Milli => "milli",
            DecimalPrefix::Micro => "micro",
            DecimalPrefix::Nano => "nano",
            DecimalPrefix::Pico => "pico",
            DecimalPrefix::Femto => "femto",
            DecimalPrefix::Atto => "atto",
            DecimalPrefix::Zepto => "zepto",
            DecimalPrefix::Yocto => "yocto",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DecimalPrefix::Yotta => "Y",
            DecimalPrefix::Zetta => "Z",
            DecimalPrefix::Exa => "E",
            DecimalPrefix::Peta => "P",
            DecimalPrefix::Tera => "T",
            DecimalPrefix::Giga => "G",
            DecimalPrefix::Mega => "M",
            DecimalPrefix::Kilo => "k",
            DecimalPrefix::Hecto => "h",
            DecimalPrefix::Deca => "da",
            DecimalPrefix::Deci => "d",
            DecimalPrefix::Centi => "c",
            DecimalPrefix::Milli => "m",
            DecimalPrefix::Micro => "μ",
            DecimalPrefix::Nano => "n",
            DecimalPrefix::Pico => "p",
            DecimalPrefix::Femto => "f",
            DecimalPrefix::Atto => "a",
            DecimalPrefix::Zepto => "z",
            DecimalPrefix::Yocto => "y",
        }
    }
}

/// IEC binary prefixes, kibi (2^10) up to yobi (2^80).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl BinaryPrefix {
    pub fn factor(&self) -> f64 {
        match self {
            BinaryPrefix::Kibi => 1024.0,
            BinaryPrefix::Mebi => 1_048_576.0,
            BinaryPrefix::Gibi => 1_073_741_824.0,
            BinaryPrefix::Tebi => 1_099_511_627_776.0,
            BinaryPrefix::Pebi => 1_125_899_906_842_624.0,
            BinaryPrefix::Exbi => 1_152_921_504_606_846_976.0,
            BinaryPrefix::Zebi => 1.180_591_620_717_411_3e21,
            BinaryPrefix::Yobi => 1.208_925_819_614_629_2e24,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "kibi",
            BinaryPrefix::Mebi => "mebi",
            BinaryPrefix::Gibi => "gibi",
            BinaryPrefix::Tebi => "tebi",
            BinaryPrefix::Pebi => "pebi",
            BinaryPrefix::Exbi => "exbi",
            BinaryPrefix::Zebi => "zebi",
            BinaryPrefix::Yobi => "yobi",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_factors() {
        assert_eq!(DecimalPrefix::Kilo.factor(), 1000.0);
        assert_eq!(DecimalPrefix::Milli.factor(), 0.001);
        assert_eq!(DecimalPrefix::Kilo.factor() * DecimalPrefix::Milli.factor(), 1.0);
    }

    #[test]
    fn test_binary_factors() {
        assert_eq!(BinaryPrefix::Kibi.factor(), 1024.0);
        assert_eq!(BinaryPrefix::Mebi.factor(), 1024.0 * 1024.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Prefix::Decimal(DecimalPrefix::Kilo)), "k");
        assert_eq!(format!("{}", Prefix::Binary(BinaryPrefix::Gibi)), "Gi");
        assert_eq!(Prefix::Decimal(DecimalPrefix::Micro).name(), "micro");
    }
}
