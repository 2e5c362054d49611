//! Mensura Convert - Conversion engine
//!
//! Derives conversions between units and between measurement scales by
//! recursively reducing each operand to its base representation, and
//! caches the resulting affine transforms for reuse.

mod engine;

pub use engine::ConversionEngine;
