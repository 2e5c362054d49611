//! Mensura - Units of measure and measurement scales
//!
//! Units are built programmatically as algebraic expressions (base units,
//! factor-defined singular units, prefixed units, custom multiples,
//! multiplications, divisions, exponentiations) and interned by a
//! registry; scales wrap a unit with an optional affine relation to a
//! parent scale. The conversion engine turns any two dimension-compatible
//! units or scales into a cached affine transform and applies it.
//!
//! ```
//! use mensura::{si, ConversionEngine, SiUnitsAndScales, UnitAndScaleRegistry};
//!
//! let mut registry = UnitAndScaleRegistry::new();
//! registry.add_set(&SiUnitsAndScales).unwrap();
//!
//! let metre = registry.get(si::METRE).unwrap().as_unit().unwrap().clone();
//! let mile = registry.get(si::MILE).unwrap().as_unit().unwrap().clone();
//!
//! let engine = ConversionEngine::new();
//! let metres = engine.convert_unit(1.0, &mile, &metre).unwrap();
//! assert!((metres - 1609.344).abs() < 1e-9);
//! ```

pub use mensura_core::{
    BinaryPrefix, DecimalPrefix, Dimension, Labels, LocalizedName, NotFoundError, Prefix,
    ReductionError, Scale, ScaleConversionError, Unit, UnitConversionError, UnitKind,
    UnitOrScaleCreationError,
};
pub use mensura_registry::{Naming, UnitAndScaleRegistry, UnitAndScaleSet, UnitOrScale};

pub use mensura_convert::ConversionEngine;

pub use mensura_si::{ids as si, load_si, SiUnitsAndScales};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ConversionEngine, Dimension, Labels, Naming, Prefix, Scale, Unit, UnitAndScaleRegistry,
        UnitAndScaleSet, UnitKind, UnitOrScale,
    };
}
