//! Measurement scales
//!
//! A [`Scale`] pairs a unit with an optional affine relation to a parent
//! scale. The Fahrenheit scale, for instance, is defined relative to the
//! Kelvin scale with factor 1.8 and offset -459.67: a value on the
//! definition scale maps onto this scale as
//! `v_this = factor * v_definition + offset`.
//!
//! A scale without a definition is a base scale, the root of its
//! definition chain. Scales built independently may later turn out to be
//! incompatible; dimensions are checked at conversion time, not here.

use std::fmt;
use std::sync::Arc;

use crate::{Labels, Unit};

/// A measurement scale.
#[derive(Debug, Clone)]
pub struct Scale {
    identifier: String,
    labels: Labels,
    unit: Arc<Unit>,
    definition: Option<ScaleDefinition>,
}

/// The affine relation of a scale to its definition scale.
#[derive(Debug, Clone)]
struct ScaleDefinition {
    scale: Arc<Scale>,
    factor: f64,
    offset: f64,
}

impl Scale {
    /// Create a base scale, expressed in the given unit.
    pub fn new(identifier: impl Into<String>, labels: Labels, unit: Arc<Unit>) -> Self {
        Scale {
            identifier: identifier.into(),
            labels,
            unit,
            definition: None,
        }
    }

    /// Create a scale defined as an affine transformation of another
    /// scale: `v_this = definition_factor * v_definition + definition_offset`.
    pub fn with_definition(
        identifier: impl Into<String>,
        labels: Labels,
        unit: Arc<Unit>,
        definition_scale: Arc<Scale>,
        definition_factor: f64,
        definition_offset: f64,
    ) -> Self {
        Scale {
            identifier: identifier.into(),
            labels,
            unit,
            definition: Some(ScaleDefinition {
                scale: definition_scale,
                factor: definition_factor,
                offset: definition_offset,
            }),
        }
    }

    /// The unique identifier for this scale.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The naming record attached to this scale.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The preferred symbol, if one was given.
    pub fn symbol(&self) -> Option<&str> {
        self.labels.symbol()
    }

    /// The unit in which values on this scale are expressed.
    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    /// The scale this scale is defined against, or `None` for a base
    /// scale.
    pub fn definition_scale(&self) -> Option<&Arc<Scale>> {
        self.definition.as_ref().map(|d| &d.scale)
    }

    /// The multiplication factor relative to the definition scale;
    /// 1.0 for a base scale.
    pub fn definition_factor(&self) -> f64 {
        self.definition.as_ref().map_or(1.0, |d| d.factor)
    }

    /// The offset relative to the definition scale; 0.0 for a base scale.
    pub fn definition_offset(&self) -> f64 {
        self.definition.as_ref().map_or(0.0, |d| d.offset)
    }

    /// True when this scale has no definition scale.
    pub fn is_base_scale(&self) -> bool {
        self.definition.is_none()
    }
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}", self.identifier),
        }
    }
}
