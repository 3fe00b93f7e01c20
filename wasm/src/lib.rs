//! Nutrition Targets WASM Module
//!
//! WebAssembly bindings so the profile UI can preview targets in the browser
//! with the same engine the backend runs. JSON in, JSON out.

use nutrition_targets_shared::{
    AgeGroup, CalculatorPolicy, NutritionCalculator, ProfileRecord, ReferenceTables,
    STANDARD_VERSION,
};
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

static TABLES: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::standard);
static POLICY: Lazy<CalculatorPolicy> = Lazy::new(CalculatorPolicy::default);

fn calculate_json(profile_json: &str) -> Result<String, String> {
    let record: ProfileRecord =
        serde_json::from_str(profile_json).map_err(|e| format!("Invalid profile JSON: {}", e))?;
    let result = NutritionCalculator::new(&TABLES, &POLICY)
        .calculate_record(&record)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// Calculate nutrition targets for a profile
///
/// Takes a profile record as JSON and returns `{ targets, basis }` as JSON.
/// Profiles with a `birth_date` must also carry `as_of`.
#[wasm_bindgen]
pub fn calculate_nutrition_targets(profile_json: &str) -> Result<String, JsValue> {
    calculate_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Reference standard and table revision the engine uses
#[wasm_bindgen]
pub fn standard_version() -> String {
    STANDARD_VERSION.to_string()
}

/// Age group label for an age in years, e.g. "30-49"
#[wasm_bindgen]
pub fn age_group_label(age: i32) -> String {
    AgeGroup::from_age(age).label().to_string()
}
