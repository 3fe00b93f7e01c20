//! Nutrition Targets Shared Library
//!
//! The calculation engine: turns a personal profile into daily energy,
//! macronutrient and micronutrient targets based on the Dietary Reference
//! Intakes for Japanese (2020), together with a record of how each number
//! was derived. Pure and synchronous; used by the backend and WASM modules.

pub mod age_group;
pub mod basis;
pub mod calculator;
pub mod defaults;
pub mod energy;
pub mod errors;
pub mod macros;
pub mod micronutrients;
pub mod models;
pub mod reference;
mod reference_data;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use age_group::AgeGroup;
pub use basis::CalculationBasis;
pub use calculator::{CalculatorPolicy, NutritionCalculator, NutritionTargets};
pub use defaults::ProfileDefaults;
pub use errors::*;
pub use models::*;
pub use reference::{BasisType, Citation, ReferenceLookup, ReferenceTables, STANDARD_VERSION};
pub use types::*;
