//! Mensura Core - Fundamental types
//!
//! This crate provides the types the rest of Mensura is built from:
//! - `Dimension`: physical dimension as exponents of the SI base dimensions
//! - `Unit` / `UnitKind`: units as algebraic expression trees
//! - `Scale`: measurement scales with affine definitions
//! - `Prefix`: decimal and binary unit prefixes
//! - `Labels`: names and symbols attached to units and scales
//! - the error taxonomy shared by the registry and the conversion engine

mod dimension;
mod error;
mod labels;
mod prefix;
mod scale;
mod unit;

pub use dimension::Dimension;
pub use error::{
    NotFoundError, ReductionError, ScaleConversionError, UnitConversionError,
    UnitOrScaleCreationError,
};
pub use labels::{Labels, LocalizedName};
pub use prefix::{BinaryPrefix, DecimalPrefix, Prefix};
pub use scale::Scale;
pub use unit::{Unit, UnitKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Dimension, Labels, Prefix, Scale, ScaleConversionError, Unit, UnitConversionError,
        UnitKind,
    };
}
