//! Registry behaviour through the public facade.

use std::sync::Arc;

use mensura::{
    si, DecimalPrefix, Dimension, Naming, Prefix, UnitAndScaleRegistry, UnitOrScaleCreationError,
};

fn si_registry() -> UnitAndScaleRegistry {
    let mut registry = UnitAndScaleRegistry::new();
    mensura::load_si(&mut registry).unwrap();
    registry
}

#[test]
fn unknown_identifier_is_not_found() {
    let registry = si_registry();
    let err = registry.get("unregistered-id").unwrap_err();
    assert_eq!(err.identifier, "unregistered-id");
}

#[test]
fn anonymous_compounds_dedup_against_the_si_set() {
    let mut registry = si_registry();
    let metre = registry.get(si::METRE).unwrap().as_unit().unwrap().clone();
    let second = registry.get(si::SECOND).unwrap().as_unit().unwrap().clone();

    // Synthesizing m/s anonymously (as measure arithmetic would) resolves
    // to the instance the SI set already registered.
    let speed = registry.create_unit_division(&metre, &second, Naming::anonymous());
    assert_eq!(speed.identifier(), si::METRE_PER_SECOND);

    let registered = registry.get(si::METRE_PER_SECOND).unwrap();
    assert!(Arc::ptr_eq(registered.as_unit().unwrap(), &speed));
}

#[test]
fn units_in_dimension_returns_the_bucket() {
    let registry = si_registry();

    let velocities = registry.units_in_dimension(&Dimension::VELOCITY);
    let ids: Vec<&str> = velocities.iter().map(|u| u.identifier()).collect();
    assert!(ids.contains(&si::METRE_PER_SECOND));
    assert!(ids.contains(&si::KILOMETRE_PER_HOUR));

    let none = registry.units_in_dimension(&Dimension::new([9, 0, 0, 0, 0, 0, 1]));
    assert!(none.is_empty());
}

#[test]
fn prefixing_a_compound_unit_fails() {
    let mut registry = si_registry();
    let speed = registry
        .get(si::METRE_PER_SECOND)
        .unwrap()
        .as_unit()
        .unwrap()
        .clone();

    let err = registry
        .create_prefixed_unit(
            &speed,
            Prefix::Decimal(DecimalPrefix::Kilo),
            Naming::anonymous(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        UnitOrScaleCreationError::PrefixedCompound { .. }
    ));
}

#[test]
fn set_registration_failures_carry_the_set_name() {
    struct BrokenSet;

    impl mensura::UnitAndScaleSet for BrokenSet {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn register(
            &self,
            registry: &mut UnitAndScaleRegistry,
        ) -> Result<(), UnitOrScaleCreationError> {
            let metre = registry.create_base_unit(Dimension::LENGTH, Naming::anonymous());
            let second = registry.create_base_unit(Dimension::TIME, Naming::anonymous());
            let speed = registry.create_unit_division(&metre, &second, Naming::anonymous());
            // Prefixing a compound is malformed and must bubble up.
            registry.create_prefixed_unit(
                &speed,
                Prefix::Decimal(DecimalPrefix::Kilo),
                Naming::anonymous(),
            )?;
            Ok(())
        }
    }

    let mut registry = UnitAndScaleRegistry::new();
    let err = registry.add_set(&BrokenSet).unwrap_err();
    match err {
        UnitOrScaleCreationError::SetRegistration { set, cause } => {
            assert_eq!(set, "broken");
            assert!(matches!(
                *cause,
                UnitOrScaleCreationError::PrefixedCompound { .. }
            ));
        }
        other => panic!("expected a set registration error, got {other}"),
    }
}

#[test]
fn labels_survive_registration() {
    let registry = si_registry();
    let metre = registry.get(si::METRE).unwrap().as_unit().unwrap().clone();

    assert_eq!(metre.labels().name(), Some("metre"));
    assert_eq!(metre.symbol(), Some("m"));
    assert_eq!(metre.labels().name_in("en-US"), Some("meter"));
    assert_eq!(metre.labels().name_in("nl"), Some("metre"));
}
