//! Calculation basis
//!
//! The explainability record that travels with every set of targets. Pure
//! composition of what the other stages produced.

use crate::age_group::AgeGroup;
use crate::defaults::DefaultsReport;
use crate::energy::EnergyBasis;
use crate::macros::MacroBasis;
use crate::micronutrients::{HealthAdjustments, MicronutrientResult, ReferenceEntry};
use crate::models::Nutrient;
use crate::reference::STANDARD_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a set of targets was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationBasis {
    pub version: String,
    pub age_group: AgeGroup,
    pub energy: EnergyBasis,
    pub macros: MacroBasis,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub health_adjustments: Option<HealthAdjustments>,
    pub missing_fields: Vec<String>,
    pub defaults_applied: BTreeMap<String, serde_json::Value>,
    pub references: BTreeMap<Nutrient, ReferenceEntry>,
    pub unavailable_nutrients: Vec<Nutrient>,
}

/// Compose the basis from the outputs of each stage
pub fn assemble(
    age_group: AgeGroup,
    energy: EnergyBasis,
    macros: MacroBasis,
    micronutrients: MicronutrientResult,
    defaults: DefaultsReport,
) -> CalculationBasis {
    CalculationBasis {
        version: STANDARD_VERSION.to_string(),
        age_group,
        energy,
        macros,
        health_adjustments: micronutrients.health_adjustments,
        missing_fields: defaults.missing_fields,
        defaults_applied: defaults.defaults_applied,
        references: micronutrients.references,
        unavailable_nutrients: micronutrients.unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{apply_defaults, ProfileDefaults};
    use crate::energy::calculate_energy;
    use crate::macros::{calculate_macros, MacroRatioTable};
    use crate::micronutrients::resolve_micronutrients;
    use crate::models::CalculatorInput;
    use crate::reference::ReferenceTables;
    use uuid::Uuid;

    fn basis_for(input: &CalculatorInput) -> CalculationBasis {
        let tables = ReferenceTables::standard();
        let (profile, report) = apply_defaults(input, &ProfileDefaults::default());
        let age_group = AgeGroup::from_age(profile.age_years);
        let energy = calculate_energy(&profile);
        let macros = calculate_macros(
            energy.daily_calories,
            MacroRatioTable::default().ratio_for(profile.nutrition_goal),
        );
        let micronutrients = resolve_micronutrients(&tables, &profile, age_group);
        assemble(age_group, energy, macros, micronutrients, report)
    }

    #[test]
    fn test_basis_is_stamped_with_version() {
        let basis = basis_for(&CalculatorInput::new(Uuid::nil()));
        assert_eq!(basis.version, "jp-dri-2020/1.0");
        assert_eq!(basis.age_group, AgeGroup::Years30To49);
        assert_eq!(basis.references.len(), Nutrient::ALL.len());
    }

    #[test]
    fn test_health_adjustments_omitted_from_json_when_absent() {
        let json = serde_json::to_value(basis_for(&CalculatorInput::new(Uuid::nil()))).unwrap();
        assert!(json.get("health_adjustments").is_none());
        assert_eq!(json["age_group"], "30-49");
        assert_eq!(json["references"]["vitamin_c"]["unit"], "mg");
        assert!(json["missing_fields"].as_array().unwrap().len() >= 4);
    }
}
