//! Mensura SI - Prebuilt units and scales
//!
//! A ready-made [`UnitAndScaleSet`](mensura_registry::UnitAndScaleSet)
//! covering the SI base units, a selection of everyday derived and
//! imperial units, and the Kelvin/Celsius/Fahrenheit temperature scales.

pub mod ids;
mod set;

pub use set::SiUnitsAndScales;

use mensura_core::UnitOrScaleCreationError;
use mensura_registry::UnitAndScaleRegistry;

/// Load the SI set into a registry.
pub fn load_si(registry: &mut UnitAndScaleRegistry) -> Result<(), UnitOrScaleCreationError> {
    registry.add_set(&SiUnitsAndScales)
}
