//! Business logic services
//!
//! Services sit between the route handlers and the shared engine.

pub mod targets;

pub use targets::NutritionTargetsService;
