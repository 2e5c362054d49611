//! The SI unit and scale set.

use mensura_core::{DecimalPrefix, Dimension, Prefix, UnitOrScaleCreationError};
use mensura_registry::{Naming, UnitAndScaleRegistry, UnitAndScaleSet};

use crate::ids;

/// SI base units, a selection of everyday SI and imperial units defined
/// against them, and the Kelvin/Celsius/Fahrenheit temperature scales.
///
/// Everything is registered under the stable identifiers in [`ids`], so
/// callers can fetch units back with
/// [`UnitAndScaleRegistry::get`]:
///
/// ```
/// use mensura_registry::UnitAndScaleRegistry;
/// use mensura_si::{ids, SiUnitsAndScales};
///
/// let mut registry = UnitAndScaleRegistry::new();
/// registry.add_set(&SiUnitsAndScales).unwrap();
/// let metre = registry.get(ids::METRE).unwrap();
/// assert!(metre.as_unit().is_some());
/// ```
pub struct SiUnitsAndScales;

impl UnitAndScaleSet for SiUnitsAndScales {
    fn name(&self) -> &'static str {
        "si"
    }

    fn register(
        &self,
        registry: &mut UnitAndScaleRegistry,
    ) -> Result<(), UnitOrScaleCreationError> {
        let kilo = Prefix::Decimal(DecimalPrefix::Kilo);

        // Base units. The gram is the mass root here; the kilogram is
        // registered as its prefixed unit.
        let metre = registry.create_base_unit(
            Dimension::LENGTH,
            Naming::identified(ids::METRE, "metre", "m")
                .with_alternative_name("meter", Some("en-US")),
        );
        let gram = registry.create_base_unit(
            Dimension::MASS,
            Naming::identified(ids::GRAM, "gram", "g"),
        );
        let second = registry.create_base_unit(
            Dimension::TIME,
            Naming::identified(ids::SECOND, "second", "s"),
        );
        registry.create_base_unit(
            Dimension::CURRENT,
            Naming::identified(ids::AMPERE, "ampere", "A"),
        );
        let kelvin = registry.create_base_unit(
            Dimension::TEMPERATURE,
            Naming::identified(ids::KELVIN, "kelvin", "K"),
        );
        registry.create_base_unit(
            Dimension::AMOUNT,
            Naming::identified(ids::MOLE, "mole", "mol"),
        );
        registry.create_base_unit(
            Dimension::LUMINOSITY,
            Naming::identified(ids::CANDELA, "candela", "cd"),
        );

        // Length
        let kilometre = registry.create_prefixed_unit(
            &metre,
            kilo,
            Naming::identified(ids::KILOMETRE, "kilometre", "km"),
        )?;
        let centimetre = registry.create_prefixed_unit(
            &metre,
            Prefix::Decimal(DecimalPrefix::Centi),
            Naming::identified(ids::CENTIMETRE, "centimetre", "cm"),
        )?;
        registry.create_prefixed_unit(
            &metre,
            Prefix::Decimal(DecimalPrefix::Milli),
            Naming::identified(ids::MILLIMETRE, "millimetre", "mm"),
        )?;
        let inch = registry.create_singular_unit(
            Some(&centimetre),
            2.54,
            Naming::identified(ids::INCH, "inch", "in"),
        );
        let foot = registry.create_singular_unit(
            Some(&inch),
            12.0,
            Naming::identified(ids::FOOT, "foot", "ft"),
        );
        registry.create_singular_unit(
            Some(&foot),
            5280.0,
            Naming::identified(ids::MILE, "mile", "mi"),
        );
        registry.create_singular_unit(
            Some(&metre),
            1.495978707e11,
            Naming::identified(ids::ASTRONOMICAL_UNIT, "astronomical unit", "AU"),
        );

        // Mass
        let kilogram = registry.create_prefixed_unit(
            &gram,
            kilo,
            Naming::identified(ids::KILOGRAM, "kilogram", "kg"),
        )?;
        registry.create_singular_unit(
            Some(&kilogram),
            1000.0,
            Naming::identified(ids::TONNE, "tonne", "t"),
        );

        // Time
        let minute = registry.create_singular_unit(
            Some(&second),
            60.0,
            Naming::identified(ids::MINUTE, "minute", "min"),
        );
        let hour = registry.create_singular_unit(
            Some(&minute),
            60.0,
            Naming::identified(ids::HOUR, "hour", "h"),
        );

        // Area and volume
        let square_metre = registry.create_unit_exponentiation(
            &metre,
            2.0,
            Naming::identified(ids::SQUARE_METRE, "square metre", "m²"),
        );
        let cubic_metre = registry.create_unit_exponentiation(
            &metre,
            3.0,
            Naming::identified(ids::CUBIC_METRE, "cubic metre", "m³"),
        );
        registry.create_singular_unit(
            Some(&cubic_metre),
            0.001,
            Naming::identified(ids::LITRE, "litre", "L"),
        );

        // Derived units
        registry.create_unit_exponentiation(
            &second,
            -1.0,
            Naming::identified(ids::HERTZ, "hertz", "Hz"),
        );
        let kilogram_metre =
            registry.create_unit_multiplication(&kilogram, &metre, Naming::anonymous());
        let second_squared =
            registry.create_unit_exponentiation(&second, 2.0, Naming::anonymous());
        let newton = registry.create_unit_division(
            &kilogram_metre,
            &second_squared,
            Naming::identified(ids::NEWTON, "newton", "N"),
        );
        let joule = registry.create_unit_multiplication(
            &newton,
            &metre,
            Naming::identified(ids::JOULE, "joule", "J"),
        );
        registry.create_unit_division(
            &newton,
            &square_metre,
            Naming::identified(ids::PASCAL, "pascal", "Pa"),
        );
        registry.create_unit_division(
            &joule,
            &second,
            Naming::identified(ids::WATT, "watt", "W"),
        );
        registry.create_unit_division(
            &metre,
            &second,
            Naming::identified(ids::METRE_PER_SECOND, "metre per second", "m/s"),
        );
        registry.create_unit_division(
            &kilometre,
            &hour,
            Naming::identified(ids::KILOMETRE_PER_HOUR, "kilometre per hour", "km/h"),
        );

        // Temperature units: both are defined on the kelvin, differing
        // only in increment size.
        let celsius = registry.create_singular_unit(
            Some(&kelvin),
            1.0,
            Naming::identified(ids::CELSIUS, "degree Celsius", "°C"),
        );
        let fahrenheit = registry.create_singular_unit(
            Some(&kelvin),
            5.0 / 9.0,
            Naming::identified(ids::FAHRENHEIT, "degree Fahrenheit", "°F"),
        );

        // Temperature scales, all rooted in the Kelvin scale.
        let kelvin_scale = registry.create_scale(
            &kelvin,
            Naming::identified(ids::KELVIN_SCALE, "Kelvin scale", "K"),
        );
        registry.create_transformed_scale(
            &celsius,
            &kelvin_scale,
            1.0,
            -273.15,
            Naming::identified(ids::CELSIUS_SCALE, "Celsius scale", "°C"),
        );
        registry.create_transformed_scale(
            &fahrenheit,
            &kelvin_scale,
            1.8,
            -459.67,
            Naming::identified(ids::FAHRENHEIT_SCALE, "Fahrenheit scale", "°F"),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> UnitAndScaleRegistry {
        let mut registry = UnitAndScaleRegistry::new();
        registry.add_set(&SiUnitsAndScales).unwrap();
        registry
    }

    #[test]
    fn test_base_units_are_registered() {
        let registry = registry();
        for id in [
            ids::METRE,
            ids::GRAM,
            ids::SECOND,
            ids::AMPERE,
            ids::KELVIN,
            ids::MOLE,
            ids::CANDELA,
        ] {
            assert!(registry.get(id).is_ok(), "missing base unit {id}");
        }
    }

    #[test]
    fn test_dimensions() {
        let registry = registry();
        let unit = |id: &str| registry.get(id).unwrap().as_unit().unwrap().clone();

        assert_eq!(unit(ids::KILOGRAM).dimension(), Dimension::MASS);
        assert_eq!(unit(ids::MILE).dimension(), Dimension::LENGTH);
        assert_eq!(unit(ids::NEWTON).dimension(), Dimension::FORCE);
        assert_eq!(unit(ids::JOULE).dimension(), Dimension::ENERGY);
        assert_eq!(unit(ids::METRE_PER_SECOND).dimension(), Dimension::VELOCITY);
        assert_eq!(unit(ids::LITRE).dimension(), Dimension::VOLUME);
        assert_eq!(unit(ids::CELSIUS).dimension(), Dimension::TEMPERATURE);
    }

    #[test]
    fn test_length_bucket_is_populated() {
        let registry = registry();
        let lengths = registry.units_in_dimension(&Dimension::LENGTH);
        assert!(lengths.len() >= 8, "got {} length units", lengths.len());
    }

    #[test]
    fn test_scales_are_registered() {
        let registry = registry();
        let celsius = registry.get(ids::CELSIUS_SCALE).unwrap();
        let celsius = celsius.as_scale().unwrap();
        assert_eq!(celsius.definition_factor(), 1.0);
        assert_eq!(celsius.definition_offset(), -273.15);
        assert_eq!(
            celsius.definition_scale().unwrap().identifier(),
            ids::KELVIN_SCALE
        );
    }
}
