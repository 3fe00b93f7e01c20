//! Nutrition targets calculator
//!
//! Wires the stages together into a single pure function:
//! defaults → age group → energy → macros → micronutrients → basis.

use crate::age_group::AgeGroup;
use crate::basis::{assemble, CalculationBasis};
use crate::defaults::{apply_defaults, ProfileDefaults};
use crate::energy::calculate_energy;
use crate::errors::CalculatorResult;
use crate::macros::{calculate_macros, MacroRatioTable};
use crate::micronutrients::resolve_micronutrients;
use crate::models::{CalculatorInput, TargetData};
use crate::reference::ReferenceTables;
use crate::types::ProfileRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunable policy for the calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorPolicy {
    pub macro_ratios: MacroRatioTable,
    pub defaults: ProfileDefaults,
}

impl CalculatorPolicy {
    /// Reject policies that would produce nonsensical targets
    pub fn validate(&self) -> Result<(), String> {
        self.macro_ratios
            .validate()
            .map_err(|e| format!("macro_ratios.{}", e))?;
        crate::validation::validate_height_cm(self.defaults.height_cm)
            .map_err(|e| format!("defaults.height_cm: {}", e))?;
        crate::validation::validate_weight_kg(self.defaults.weight_kg)
            .map_err(|e| format!("defaults.weight_kg: {}", e))?;
        Ok(())
    }
}

/// Targets together with the record of how they were derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub targets: TargetData,
    pub basis: CalculationBasis,
}

/// Calculator bound to a reference table and a policy
#[derive(Debug, Clone, Copy)]
pub struct NutritionCalculator<'a> {
    tables: &'a ReferenceTables,
    policy: &'a CalculatorPolicy,
}

impl<'a> NutritionCalculator<'a> {
    pub fn new(tables: &'a ReferenceTables, policy: &'a CalculatorPolicy) -> Self {
        Self { tables, policy }
    }

    /// Compute targets for a typed input
    ///
    /// Never fails: absent fields are defaulted and table gaps become
    /// absent targets.
    pub fn calculate(&self, input: &CalculatorInput) -> NutritionTargets {
        let (profile, report) = apply_defaults(input, &self.policy.defaults);
        let age_group = AgeGroup::from_age(profile.age_years);

        let energy = calculate_energy(&profile);
        let macros = calculate_macros(
            energy.daily_calories,
            self.policy.macro_ratios.ratio_for(profile.nutrition_goal),
        );
        let micronutrients = resolve_micronutrients(self.tables, &profile, age_group);

        let targets = TargetData::from_parts(
            profile.subject_id,
            energy.daily_calories,
            macros.protein_g,
            macros.fat_g,
            macros.carbohydrate_g,
            &micronutrients.values,
        );

        debug!(
            subject_id = %profile.subject_id,
            age_group = %age_group,
            daily_calories = energy.daily_calories,
            "Calculated nutrition targets"
        );

        NutritionTargets {
            targets,
            basis: assemble(age_group, energy, macros, micronutrients, report),
        }
    }

    /// Validate a loose profile record, then compute targets
    pub fn calculate_record(&self, record: &ProfileRecord) -> CalculatorResult<NutritionTargets> {
        let input = CalculatorInput::try_from(record)?;
        Ok(self.calculate(&input))
    }
}
