//! Unit and scale registry
//!
//! The registry is the single source of truth for the unit and scale
//! universe of a process: it maps identifiers to the canonical instances
//! and indexes units by dimension. Compound units created anonymously
//! (typically as a side effect of arithmetic on measured values) are
//! structurally deduplicated against the dimension index, so two
//! independently synthesized "metre per second" trees resolve to one
//! registered unit.
//!
//! Lookup and deduplication scan linearly inside a dimension bucket; the
//! unit universe of a process is small and bounded by what the
//! application explicitly constructs.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use mensura_core::{
    Dimension, Labels, NotFoundError, Prefix, Scale, Unit, UnitKind, UnitOrScaleCreationError,
};

use crate::UnitAndScaleSet;

/// A registered unit or scale.
#[derive(Debug, Clone)]
pub enum UnitOrScale {
    Unit(Arc<Unit>),
    Scale(Arc<Scale>),
}

impl UnitOrScale {
    pub fn as_unit(&self) -> Option<&Arc<Unit>> {
        match self {
            UnitOrScale::Unit(unit) => Some(unit),
            UnitOrScale::Scale(_) => None,
        }
    }

    pub fn as_scale(&self) -> Option<&Arc<Scale>> {
        match self {
            UnitOrScale::Unit(_) => None,
            UnitOrScale::Scale(scale) => Some(scale),
        }
    }
}

/// Identifier and naming attributes for a creation request.
///
/// An anonymous request lets the registry generate an identifier and
/// deduplicate; supplying any identifier, name, or symbol registers the
/// new instance unconditionally.
#[derive(Debug, Clone, Default)]
pub struct Naming {
    identifier: Option<String>,
    labels: Labels,
}

impl Naming {
    /// No identifier, no names: dedup and generate.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A preferred name and symbol, with a generated identifier.
    pub fn named(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Naming {
            identifier: None,
            labels: Labels::named(name, symbol),
        }
    }

    /// A caller-supplied identifier plus preferred name and symbol.
    pub fn identified(
        identifier: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Naming {
            identifier: Some(identifier.into()),
            labels: Labels::named(name, symbol),
        }
    }

    pub fn with_alternative_name(
        mut self,
        name: impl Into<String>,
        language: Option<&str>,
    ) -> Self {
        self.labels = self.labels.with_alternative_name(name, language);
        self
    }

    pub fn with_alternative_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.labels = self.labels.with_alternative_symbol(symbol);
        self
    }

    fn is_anonymous(&self) -> bool {
        self.identifier.is_none() && self.labels.is_empty()
    }
}

/// Interning registry for units and scales.
pub struct UnitAndScaleRegistry {
    by_identifier: HashMap<String, UnitOrScale>,
    by_dimension: HashMap<Dimension, Vec<Arc<Unit>>>,
    generated: u64,
}

impl UnitAndScaleRegistry {
    pub fn new() -> Self {
        UnitAndScaleRegistry {
            by_identifier: HashMap::new(),
            by_dimension: HashMap::new(),
            generated: 0,
        }
    }

    /// Create and register a base unit with an intrinsic dimension.
    pub fn create_base_unit(&mut self, dimension: Dimension, naming: Naming) -> Arc<Unit> {
        self.create_unit(UnitKind::Base { dimension }, naming)
    }

    /// Create and register a singular unit, optionally defined relative
    /// to another unit: 1 of the new unit = `definition_factor` ×
    /// 1 `definition_unit`. Pass a factor of 1.0 when the unit is merely
    /// a renaming of its definition unit (1 Pa = 1 kg m^-1 s^-2).
    pub fn create_singular_unit(
        &mut self,
        definition_unit: Option<&Arc<Unit>>,
        definition_factor: f64,
        naming: Naming,
    ) -> Arc<Unit> {
        self.create_unit(
            UnitKind::Singular {
                definition_unit: definition_unit.cloned(),
                definition_factor,
            },
            naming,
        )
    }

    /// Create and register a prefixed unit. The prefixed unit must be
    /// singular (or base); prefixing a compound is rejected.
    pub fn create_prefixed_unit(
        &mut self,
        base: &Arc<Unit>,
        prefix: Prefix,
        naming: Naming,
    ) -> Result<Arc<Unit>, UnitOrScaleCreationError> {
        match base.kind() {
            UnitKind::Base { .. } | UnitKind::Singular { .. } => Ok(self.create_unit(
                UnitKind::Prefixed {
                    base: base.clone(),
                    prefix,
                },
                naming,
            )),
            _ => Err(UnitOrScaleCreationError::PrefixedCompound {
                unit: base.to_string(),
            }),
        }
    }

    /// Create and register a custom multiple of a unit, e.g. 100 km.
    pub fn create_unit_multiple(
        &mut self,
        unit: &Arc<Unit>,
        factor: f64,
        naming: Naming,
    ) -> Arc<Unit> {
        self.create_unit(
            UnitKind::Multiple {
                unit: unit.clone(),
                factor,
            },
            naming,
        )
    }

    /// Create and register the product of two units, e.g. N·m.
    pub fn create_unit_multiplication(
        &mut self,
        left: &Arc<Unit>,
        right: &Arc<Unit>,
        naming: Naming,
    ) -> Arc<Unit> {
        self.create_unit(
            UnitKind::Multiplication {
                left: left.clone(),
                right: right.clone(),
            },
            naming,
        )
    }

    /// Create and register the quotient of two units, e.g. m/s.
    pub fn create_unit_division(
        &mut self,
        numerator: &Arc<Unit>,
        denominator: &Arc<Unit>,
        naming: Naming,
    ) -> Arc<Unit> {
        self.create_unit(
            UnitKind::Division {
                numerator: numerator.clone(),
                denominator: denominator.clone(),
            },
            naming,
        )
    }

    /// Create and register a unit raised to a power, e.g. m^3.
    pub fn create_unit_exponentiation(
        &mut self,
        base: &Arc<Unit>,
        exponent: f64,
        naming: Naming,
    ) -> Arc<Unit> {
        self.create_unit(
            UnitKind::Exponentiation {
                base: base.clone(),
                exponent,
            },
            naming,
        )
    }

    /// Create and register a base scale expressed in the given unit.
    pub fn create_scale(&mut self, unit: &Arc<Unit>, naming: Naming) -> Arc<Scale> {
        let Naming { identifier, labels } = naming;
        let identifier = identifier.unwrap_or_else(|| self.next_identifier("scale"));
        self.register_scale(Scale::new(identifier, labels, unit.clone()))
    }

    /// Create and register a scale defined as an affine transformation
    /// of another scale: `v_this = definition_factor * v_definition +
    /// definition_offset`.
    pub fn create_transformed_scale(
        &mut self,
        unit: &Arc<Unit>,
        definition_scale: &Arc<Scale>,
        definition_factor: f64,
        definition_offset: f64,
        naming: Naming,
    ) -> Arc<Scale> {
        let Naming { identifier, labels } = naming;
        let identifier = identifier.unwrap_or_else(|| self.next_identifier("scale"));
        self.register_scale(Scale::with_definition(
            identifier,
            labels,
            unit.clone(),
            definition_scale.clone(),
            definition_factor,
            definition_offset,
        ))
    }

    /// Look up a previously registered unit or scale.
    pub fn get(&self, identifier: &str) -> Result<UnitOrScale, NotFoundError> {
        self.by_identifier
            .get(identifier)
            .cloned()
            .ok_or_else(|| NotFoundError {
                identifier: identifier.to_string(),
            })
    }

    /// Every registered unit sharing the given dimension.
    pub fn units_in_dimension(&self, dimension: &Dimension) -> &[Arc<Unit>] {
        self.by_dimension
            .get(dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Load a prebuilt set of units and scales.
    pub fn add_set(
        &mut self,
        set: &dyn UnitAndScaleSet,
    ) -> Result<(), UnitOrScaleCreationError> {
        debug!(set = set.name(), "registering unit and scale set");
        set.register(self)
            .map_err(|cause| UnitOrScaleCreationError::SetRegistration {
                set: set.name().to_string(),
                cause: Box::new(cause),
            })
    }

    fn create_unit(&mut self, kind: UnitKind, naming: Naming) -> Arc<Unit> {
        if naming.is_anonymous() {
            // Anonymous units are usually synthesized by arithmetic that
            // cannot know whether a canonical instance already exists.
            if let Some(existing) = self
                .by_dimension
                .get(&kind.dimension())
                .and_then(|bucket| bucket.iter().find(|u| u.kind().structurally_equal(&kind)))
            {
                debug!(
                    identifier = %existing.identifier(),
                    "reusing structurally equal unit"
                );
                return existing.clone();
            }
        }
        let Naming { identifier, labels } = naming;
        let identifier = identifier.unwrap_or_else(|| self.next_identifier("unit"));
        self.register_unit(Unit::new(identifier, labels, kind))
    }

    fn register_unit(&mut self, unit: Unit) -> Arc<Unit> {
        let unit = Arc::new(unit);
        debug!(identifier = %unit.identifier(), dimension = %unit.dimension(), "registering unit");
        self.by_identifier
            .insert(unit.identifier().to_string(), UnitOrScale::Unit(unit.clone()));
        self.by_dimension
            .entry(unit.dimension())
            .or_default()
            .push(unit.clone());
        unit
    }

    fn register_scale(&mut self, scale: Scale) -> Arc<Scale> {
        let scale = Arc::new(scale);
        debug!(identifier = %scale.identifier(), "registering scale");
        self.by_identifier.insert(
            scale.identifier().to_string(),
            UnitOrScale::Scale(scale.clone()),
        );
        scale
    }

    fn next_identifier(&mut self, kind: &str) -> String {
        self.generated += 1;
        format!("{}:{}", kind, self.generated)
    }
}

impl Default for UnitAndScaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_length_and_time() -> (UnitAndScaleRegistry, Arc<Unit>, Arc<Unit>) {
        let mut registry = UnitAndScaleRegistry::new();
        let metre = registry.create_base_unit(
            Dimension::LENGTH,
            Naming::identified("metre", "metre", "m"),
        );
        let second = registry.create_base_unit(
            Dimension::TIME,
            Naming::identified("second", "second", "s"),
        );
        (registry, metre, second)
    }

    #[test]
    fn test_get_registered_unit() {
        let (registry, metre, _) = registry_with_length_and_time();
        let found = registry.get("metre").unwrap();
        assert!(Arc::ptr_eq(found.as_unit().unwrap(), &metre));
    }

    #[test]
    fn test_get_unregistered_identifier_fails() {
        let (registry, _, _) = registry_with_length_and_time();
        let err = registry.get("unregistered-id").unwrap_err();
        assert_eq!(err.identifier, "unregistered-id");
    }

    #[test]
    fn test_anonymous_compound_is_deduplicated() {
        let (mut registry, metre, second) = registry_with_length_and_time();

        let a = registry.create_unit_division(&metre, &second, Naming::anonymous());
        let b = registry.create_unit_division(&metre, &second, Naming::anonymous());
        assert!(Arc::ptr_eq(&a, &b));

        // The operand order of a multiplication does not matter either.
        let p = registry.create_unit_multiplication(&metre, &second, Naming::anonymous());
        let q = registry.create_unit_multiplication(&second, &metre, Naming::anonymous());
        assert!(Arc::ptr_eq(&p, &q));
    }

    #[test]
    fn test_named_creation_is_unconditional() {
        let (mut registry, metre, second) = registry_with_length_and_time();

        let a = registry.create_unit_division(
            &metre,
            &second,
            Naming::identified("metre-per-second", "metre per second", "m/s"),
        );
        // A name alone (no identifier) is still a non-anonymous request.
        let b = registry.create_unit_division(
            &metre,
            &second,
            Naming::named("metre per second", "m/s"),
        );
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(
            registry.units_in_dimension(&Dimension::VELOCITY).len(),
            2
        );
    }

    #[test]
    fn test_units_in_dimension() {
        let (mut registry, metre, _) = registry_with_length_and_time();
        registry.create_prefixed_unit(
            &metre,
            Prefix::Decimal(mensura_core::DecimalPrefix::Kilo),
            Naming::identified("kilometre", "kilometre", "km"),
        )
        .unwrap();

        assert_eq!(registry.units_in_dimension(&Dimension::LENGTH).len(), 2);
        assert!(registry.units_in_dimension(&Dimension::MASS).is_empty());
    }

    #[test]
    fn test_prefixing_a_compound_is_rejected() {
        let (mut registry, metre, second) = registry_with_length_and_time();
        let speed = registry.create_unit_division(&metre, &second, Naming::anonymous());

        let err = registry
            .create_prefixed_unit(
                &speed,
                Prefix::Decimal(mensura_core::DecimalPrefix::Kilo),
                Naming::anonymous(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            UnitOrScaleCreationError::PrefixedCompound { .. }
        ));
    }

    #[test]
    fn test_generated_identifiers_are_unique() {
        let (mut registry, metre, second) = registry_with_length_and_time();
        let a = registry.create_unit_division(&metre, &second, Naming::anonymous());
        let b = registry.create_unit_division(&second, &metre, Naming::anonymous());
        assert_ne!(a.identifier(), b.identifier());
    }

    #[test]
    fn test_scales_register_by_identifier() {
        let mut registry = UnitAndScaleRegistry::new();
        let kelvin_unit = registry.create_base_unit(
            Dimension::TEMPERATURE,
            Naming::identified("kelvin", "kelvin", "K"),
        );
        let kelvin = registry.create_scale(
            &kelvin_unit,
            Naming::identified("kelvin-scale", "Kelvin scale", "K"),
        );
        let celsius = registry.create_transformed_scale(
            &kelvin_unit,
            &kelvin,
            1.0,
            -273.15,
            Naming::identified("celsius-scale", "Celsius scale", "°C"),
        );

        let found = registry.get("celsius-scale").unwrap();
        assert!(Arc::ptr_eq(found.as_scale().unwrap(), &celsius));
        assert!(found.as_unit().is_none());
    }

    #[test]
    fn test_add_set() {
        struct TinySet;

        impl UnitAndScaleSet for TinySet {
            fn name(&self) -> &'static str {
                "tiny"
            }

            fn register(
                &self,
                registry: &mut UnitAndScaleRegistry,
            ) -> Result<(), UnitOrScaleCreationError> {
                registry.create_base_unit(
                    Dimension::LENGTH,
                    Naming::identified("metre", "metre", "m"),
                );
                Ok(())
            }
        }

        let mut registry = UnitAndScaleRegistry::new();
        registry.add_set(&TinySet).unwrap();
        assert!(registry.get("metre").is_ok());
    }
}
