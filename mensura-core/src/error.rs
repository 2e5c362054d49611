//! Error taxonomy
//!
//! Conversion errors always carry the source and target operands they
//! were raised for; anything that goes wrong while walking a unit or
//! scale tree is wrapped into one of these at the conversion boundary
//! with the underlying cause preserved. Conversions are pure, so a
//! failed request is terminal: retrying with the same inputs cannot
//! succeed.

use thiserror::Error;

use crate::Dimension;

/// A unit-to-unit conversion could not be performed.
#[derive(Debug, Clone, Error)]
pub enum UnitConversionError {
    /// The two units do not share a dimension.
    #[error(
        "cannot convert from unit '{from}' ({from_dim}) to unit '{to}' ({to_dim}): \
         the dimensions differ"
    )]
    DimensionMismatch {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },
    /// One of the operands could not be reduced to a usable base factor.
    #[error("could not convert from unit '{from}' to unit '{to}'")]
    Unresolvable {
        from: String,
        to: String,
        #[source]
        cause: ReductionError,
    },
}

/// A scale-to-scale conversion could not be performed.
#[derive(Debug, Clone, Error)]
pub enum ScaleConversionError {
    /// The units underlying the two scales do not share a dimension.
    #[error(
        "cannot convert from scale '{from}' ({from_dim}) to scale '{to}' ({to_dim}): \
         the dimensions differ"
    )]
    DimensionMismatch {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },
    /// One of the operands could not be reduced to a usable base transform.
    #[error("could not convert from scale '{from}' to scale '{to}'")]
    Unresolvable {
        from: String,
        to: String,
        #[source]
        cause: ReductionError,
    },
}

/// Reducing a unit or scale to its base produced a factor no conversion
/// can be built from.
#[derive(Debug, Clone, Error)]
pub enum ReductionError {
    #[error("reduction of '{operand}' produced a non-finite factor")]
    NonFiniteFactor { operand: String },
    #[error("reduction of '{operand}' produced a zero factor")]
    ZeroFactor { operand: String },
}

/// A creation request the registry cannot honour.
#[derive(Debug, Clone, Error)]
pub enum UnitOrScaleCreationError {
    /// Prefixes apply to singular and base units only.
    #[error("cannot prefix unit '{unit}': prefixes apply to singular or base units")]
    PrefixedCompound { unit: String },
    /// A unit and scale set failed while registering its contents.
    #[error("could not register unit and scale set '{set}'")]
    SetRegistration {
        set: String,
        #[source]
        cause: Box<UnitOrScaleCreationError>,
    },
}

/// An identifier lookup missed. The registry holds no external data
/// source, so an identifier it has never seen cannot be synthesized.
#[derive(Debug, Clone, Error)]
#[error("no unit or scale registered under identifier '{identifier}'")]
pub struct NotFoundError {
    pub identifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = UnitConversionError::DimensionMismatch {
            from: "m".into(),
            to: "kg".into(),
            from_dim: Dimension::LENGTH,
            to_dim: Dimension::MASS,
        };
        let message = err.to_string();
        assert!(message.contains("'m'"));
        assert!(message.contains("'kg'"));
        assert!(message.contains("dimensions differ"));
    }

    #[test]
    fn test_unresolvable_preserves_cause() {
        use std::error::Error as _;

        let err = UnitConversionError::Unresolvable {
            from: "a".into(),
            to: "b".into(),
            cause: ReductionError::ZeroFactor {
                operand: "a".into(),
            },
        };
        let cause = err.source().expect("cause should be chained");
        assert!(cause.to_string().contains("zero factor"));
    }

    #[test]
    fn test_not_found_message() {
        let err = NotFoundError {
            identifier: "unregistered-id".into(),
        };
        assert!(err.to_string().contains("unregistered-id"));
    }
}
