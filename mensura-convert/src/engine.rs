//! Conversion resolution
//!
//! The engine converts numeric values between units (or scales) that
//! share a dimension. For each requested pair it derives an affine
//! transform by recursively reducing both operands to their ultimate
//! base unit (or base scale) and composing the resulting factors and
//! offsets; derived transforms are cached in both directions, the
//! reverse entry being the algebraic inverse, so repeated requests for
//! the same pair never reduce twice.
//!
//! Units and scales are immutable once created, so cached transforms
//! never go stale and the cache is never invalidated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use mensura_core::{
    ReductionError, Scale, ScaleConversionError, Unit, UnitConversionError, UnitKind,
};

/// An affine transform between two units or scales: `y = x * factor + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    factor: f64,
    offset: f64,
}

impl Transform {
    fn convert(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    /// The transform for the opposite direction.
    fn invert(&self) -> Transform {
        Transform {
            factor: 1.0 / self.factor,
            offset: -self.offset / self.factor,
        }
    }
}

type TransformCache = Mutex<HashMap<(String, String), Transform>>;

/// Derives, caches, and applies conversions between units and between
/// scales.
///
/// The caches are the engine's only mutable state; a single lock per
/// cache is held across "look up, else compute and insert", so a shared
/// engine computes each distinct pair once and concurrent callers never
/// observe a partially written entry.
pub struct ConversionEngine {
    unit_cache: TransformCache,
    scale_cache: TransformCache,
}

impl ConversionEngine {
    pub fn new() -> Self {
        ConversionEngine {
            unit_cache: Mutex::new(HashMap::new()),
            scale_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Convert a value expressed in `source` to the equivalent value
    /// expressed in `target`.
    pub fn convert_unit(
        &self,
        value: f64,
        source: &Arc<Unit>,
        target: &Arc<Unit>,
    ) -> Result<f64, UnitConversionError> {
        let transform = self.unit_transform(source, target)?;
        Ok(transform.convert(value))
    }

    /// Convert a value on `source` to the equivalent value on `target`.
    pub fn convert_scale(
        &self,
        value: f64,
        source: &Arc<Scale>,
        target: &Arc<Scale>,
    ) -> Result<f64, ScaleConversionError> {
        let transform = self.scale_transform(source, target)?;
        Ok(transform.convert(value))
    }

    /// The number of cached transforms, counting both directions of
    /// every derived pair.
    pub fn cache_len(&self) -> usize {
        lock(&self.unit_cache).len() + lock(&self.scale_cache).len()
    }

    fn unit_transform(
        &self,
        source: &Arc<Unit>,
        target: &Arc<Unit>,
    ) -> Result<Transform, UnitConversionError> {
        let key = (
            source.identifier().to_string(),
            target.identifier().to_string(),
        );
        let mut cache = lock(&self.unit_cache);
        if let Some(transform) = cache.get(&key) {
            debug!(source = %source, target = %target, "unit conversion cache hit");
            return Ok(*transform);
        }
        let reversed = (key.1.clone(), key.0.clone());
        if let Some(transform) = cache.get(&reversed) {
            let inverted = transform.invert();
            debug!(source = %source, target = %target, "inverted cached reverse unit conversion");
            cache.insert(key, inverted);
            return Ok(inverted);
        }

        if source.dimension() != target.dimension() {
            return Err(UnitConversionError::DimensionMismatch {
                from: source.to_string(),
                to: target.to_string(),
                from_dim: source.dimension(),
                to_dim: target.dimension(),
            });
        }

        let wrap = |cause: ReductionError| UnitConversionError::Unresolvable {
            from: source.to_string(),
            to: target.to_string(),
            cause,
        };
        let source_factor = unit_base_factor(source).map_err(wrap)?;
        let target_factor = unit_base_factor(target).map_err(wrap)?;

        let transform = Transform {
            factor: source_factor / target_factor,
            offset: 0.0,
        };
        debug!(
            source = %source,
            target = %target,
            factor = transform.factor,
            "derived unit conversion"
        );
        cache.insert(reversed, transform.invert());
        cache.insert(key, transform);
        Ok(transform)
    }

    fn scale_transform(
        &self,
        source: &Arc<Scale>,
        target: &Arc<Scale>,
    ) -> Result<Transform, ScaleConversionError> {
        let key = (
            source.identifier().to_string(),
            target.identifier().to_string(),
        );
        let mut cache = lock(&self.scale_cache);
        if let Some(transform) = cache.get(&key) {
            debug!(source = %source, target = %target, "scale conversion cache hit");
            return Ok(*transform);
        }
        let reversed = (key.1.clone(), key.0.clone());
        if let Some(transform) = cache.get(&reversed) {
            let inverted = transform.invert();
            debug!(source = %source, target = %target, "inverted cached reverse scale conversion");
            cache.insert(key, inverted);
            return Ok(inverted);
        }

        // Compatibility is a property of the underlying units.
        let from_dim = source.unit().dimension();
        let to_dim = target.unit().dimension();
        if from_dim != to_dim {
            return Err(ScaleConversionError::DimensionMismatch {
                from: source.to_string(),
                to: target.to_string(),
                from_dim,
                to_dim,
            });
        }

        let wrap = |cause: ReductionError| ScaleConversionError::Unresolvable {
            from: source.to_string(),
            to: target.to_string(),
            cause,
        };
        let source_base = scale_base_transform(source).map_err(wrap)?;
        let target_base = scale_base_transform(target).map_err(wrap)?;

        let factor = target_base.factor / source_base.factor;
        let transform = Transform {
            factor,
            offset: target_base.offset - source_base.offset * factor,
        };
        debug!(
            source = %source,
            target = %target,
            factor = transform.factor,
            offset = transform.offset,
            "derived scale conversion"
        );
        cache.insert(reversed, transform.invert());
        cache.insert(key, transform);
        Ok(transform)
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned cache only ever holds fully written entries.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The factor relating `unit` to its ultimate base unit, validated to be
/// usable as a divisor.
fn unit_base_factor(unit: &Arc<Unit>) -> Result<f64, ReductionError> {
    let factor = reduce_unit(unit, 1.0).factor;
    if !factor.is_finite() {
        return Err(ReductionError::NonFiniteFactor {
            operand: unit.to_string(),
        });
    }
    if factor == 0.0 {
        return Err(ReductionError::ZeroFactor {
            operand: unit.to_string(),
        });
    }
    Ok(factor)
}

/// Recursively reduce a unit to a transform relative to the base unit at
/// the root of its definition chain. Units carry no offset; only scales
/// do.
fn reduce_unit(unit: &Unit, factor: f64) -> Transform {
    match unit.kind() {
        UnitKind::Base { .. } => Transform {
            factor,
            offset: 0.0,
        },
        UnitKind::Singular {
            definition_unit: None,
            ..
        } => Transform {
            factor,
            offset: 0.0,
        },
        UnitKind::Singular {
            definition_unit: Some(definition),
            definition_factor,
        } => reduce_unit(definition, factor * definition_factor),
        UnitKind::Prefixed { base, prefix } => reduce_unit(base, factor * prefix.factor()),
        UnitKind::Multiple {
            unit: base,
            factor: multiple,
        } => reduce_unit(base, factor * multiple),
        UnitKind::Multiplication { left, right } => {
            let left_factor = reduce_unit(left, 1.0).factor;
            let right_factor = reduce_unit(right, 1.0).factor;
            Transform {
                factor: factor * left_factor * right_factor,
                offset: 0.0,
            }
        }
        UnitKind::Division {
            numerator,
            denominator,
        } => {
            let numerator_factor = reduce_unit(numerator, 1.0).factor;
            let denominator_factor = reduce_unit(denominator, 1.0).factor;
            Transform {
                factor: factor * numerator_factor / denominator_factor,
                offset: 0.0,
            }
        }
        UnitKind::Exponentiation { base, exponent } => {
            let base_factor = reduce_unit(base, 1.0).factor;
            Transform {
                factor: factor * base_factor.powf(*exponent),
                offset: 0.0,
            }
        }
    }
}

/// Walk the definition chain of a scale toward its base scale,
/// accumulating the definition factors and offsets.
fn reduce_scale(scale: &Scale, factor: f64, offset: f64) -> Transform {
    match scale.definition_scale() {
        None => Transform { factor, offset },
        Some(parent) => reduce_scale(
            parent,
            factor * scale.definition_factor(),
            offset + scale.definition_offset(),
        ),
    }
}

fn scale_base_transform(scale: &Arc<Scale>) -> Result<Transform, ReductionError> {
    let transform = reduce_scale(scale, 1.0, 0.0);
    if !transform.factor.is_finite() || !transform.offset.is_finite() {
        return Err(ReductionError::NonFiniteFactor {
            operand: scale.to_string(),
        });
    }
    if transform.factor == 0.0 {
        return Err(ReductionError::ZeroFactor {
            operand: scale.to_string(),
        });
    }
    Ok(transform)
}
