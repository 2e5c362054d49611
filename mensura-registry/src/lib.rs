//! Mensura Registry
//!
//! Interning registry for units and scales:
//! - identifier → canonical instance map
//! - dimension → units index with structural deduplication of
//!   anonymously created compounds
//! - [`UnitAndScaleSet`], the registration interface for prebuilt sets

mod registry;
mod traits;

pub use registry::{Naming, UnitAndScaleRegistry, UnitOrScale};
pub use traits::UnitAndScaleSet;

/// Re-export core types for set authors
pub mod prelude {
    pub use crate::{Naming, UnitAndScaleRegistry, UnitAndScaleSet, UnitOrScale};
    pub use mensura_core::prelude::*;
}
