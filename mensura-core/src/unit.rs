//! Unit algebra
//!
//! A [`Unit`] is an identified, immutable node in an algebraic expression
//! tree. Simple units are either base units of a system of units or are
//! defined relative to another unit by a numeric factor (the astronomical
//! unit is 1.495978707e11 metre); compound units multiply, divide, or
//! exponentiate other units (newton metre, metre per second, cubic metre).
//! The dimension of a unit is always derived from its constituents, never
//! stored alongside them.
//!
//! Units are shared as `Arc<Unit>`; the registry owns the canonical set.

use std::fmt;
use std::sync::Arc;

use crate::{Dimension, Labels, Prefix};

/// A unit of measure.
#[derive(Debug, Clone)]
pub struct Unit {
    identifier: String,
    labels: Labels,
    kind: UnitKind,
}

/// The definition of a unit: one variant per way a unit can be built.
///
/// The set is closed; every consumer matches exhaustively, so a new
/// variant cannot be added without the compiler pointing at every place
/// that must handle it.
#[derive(Debug, Clone)]
pub enum UnitKind {
    /// A base unit of a system of units, e.g. the metre. Its dimension is
    /// intrinsic rather than derived.
    Base { dimension: Dimension },
    /// A simple unit, optionally defined as a multiple of another unit:
    /// 1 of this unit = `definition_factor` × 1 `definition_unit`.
    /// Without a definition unit it behaves as a base unit.
    Singular {
        definition_unit: Option<Arc<Unit>>,
        definition_factor: f64,
    },
    /// A singular unit scaled by a standard prefix, e.g. kilometre.
    Prefixed { base: Arc<Unit>, prefix: Prefix },
    /// A unit scaled by a custom factor, e.g. the "100 km" of fuel
    /// consumption figures.
    Multiple { unit: Arc<Unit>, factor: f64 },
    /// The product of two units, e.g. newton metre.
    Multiplication { left: Arc<Unit>, right: Arc<Unit> },
    /// The quotient of two units, e.g. metre per second.
    Division {
        numerator: Arc<Unit>,
        denominator: Arc<Unit>,
    },
    /// A unit raised to a power, e.g. cubic metre.
    Exponentiation { base: Arc<Unit>, exponent: f64 },
}

impl Unit {
    /// Create a unit. Callers normally go through the registry, which
    /// interns the result and deduplicates anonymous compounds.
    pub fn new(identifier: impl Into<String>, labels: Labels, kind: UnitKind) -> Self {
        Unit {
            identifier: identifier.into(),
            labels,
            kind,
        }
    }

    /// The unique identifier for this unit.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The naming record attached to this unit.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The preferred symbol, if one was given.
    pub fn symbol(&self) -> Option<&str> {
        self.labels.symbol()
    }

    /// How this unit is defined.
    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    /// The dimension of this unit, derived structurally from its
    /// constituents.
    pub fn dimension(&self) -> Dimension {
        self.kind.dimension()
    }
}

impl UnitKind {
    /// The dimension of a unit with this definition.
    pub fn dimension(&self) -> Dimension {
        match self {
            UnitKind::Base { dimension } => *dimension,
            UnitKind::Singular {
                definition_unit: Some(unit),
                ..
            } => unit.dimension(),
            UnitKind::Singular {
                definition_unit: None,
                ..
            } => Dimension::DIMENSIONLESS,
            UnitKind::Prefixed { base, .. } => base.dimension(),
            UnitKind::Multiple { unit, .. } => unit.dimension(),
            UnitKind::Multiplication { left, right } => {
                left.dimension().multiply(&right.dimension())
            }
            UnitKind::Division {
                numerator,
                denominator,
            } => numerator.dimension().divide(&denominator.dimension()),
            UnitKind::Exponentiation { base, exponent } => {
                // Dimension exponents are integral; fractional unit powers
                // only contribute to conversion factors.
                base.dimension().power(*exponent as i32)
            }
        }
    }

    /// Structural equality: same variant, equal constituents. The two
    /// operands of a multiplication may appear in either order; every
    /// other variant compares positionally.
    pub fn structurally_equal(&self, other: &UnitKind) -> bool {
        match (self, other) {
            (UnitKind::Base { dimension: a }, UnitKind::Base { dimension: b }) => a == b,
            (
                UnitKind::Singular {
                    definition_unit: ua,
                    definition_factor: fa,
                },
                UnitKind::Singular {
                    definition_unit: ub,
                    definition_factor: fb,
                },
            ) => {
                fa == fb
                    && match (ua, ub) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a == b,
                        _ => false,
                    }
            }
            (
                UnitKind::Prefixed {
                    base: a,
                    prefix: pa,
                },
                UnitKind::Prefixed {
                    base: b,
                    prefix: pb,
                },
            ) => pa == pb && a == b,
            (
                UnitKind::Multiple {
                    unit: a,
                    factor: fa,
                },
                UnitKind::Multiple {
                    unit: b,
                    factor: fb,
                },
            ) => fa == fb && a == b,
            (
                UnitKind::Multiplication { left: a1, right: a2 },
                UnitKind::Multiplication { left: b1, right: b2 },
            ) => (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1),
            (
                UnitKind::Division {
                    numerator: a1,
                    denominator: a2,
                },
                UnitKind::Division {
                    numerator: b1,
                    denominator: b2,
                },
            ) => a1 == b1 && a2 == b2,
            (
                UnitKind::Exponentiation {
                    base: a,
                    exponent: ea,
                },
                UnitKind::Exponentiation {
                    base: b,
                    exponent: eb,
                },
            ) => ea == eb && a == b,
            _ => false,
        }
    }
}

impl PartialEq for Unit {
    /// Identifier equality short-circuits; otherwise two independently
    /// built trees are equal when they are structurally equal.
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier || self.kind.structurally_equal(&other.kind)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}", self.identifier),
        }
    }
}
