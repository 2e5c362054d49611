//! Registration interface for prebuilt unit and scale sets.

use mensura_core::UnitOrScaleCreationError;

use crate::UnitAndScaleRegistry;

/// A prebuilt collection of units and scales that registers itself into
/// a registry.
///
/// Bulk definitions (an SI set, a domain-specific house set) implement
/// this trait and are loaded with
/// [`UnitAndScaleRegistry::add_set`](crate::UnitAndScaleRegistry::add_set);
/// the set calls back into the ordinary `create_*` methods, so everything
/// it registers is interned and indexed like any other unit or scale.
pub trait UnitAndScaleSet {
    /// Short name identifying the set in logs and error messages.
    fn name(&self) -> &'static str;

    /// Register every unit and scale in the set.
    fn register(
        &self,
        registry: &mut UnitAndScaleRegistry,
    ) -> Result<(), UnitOrScaleCreationError>;
}
