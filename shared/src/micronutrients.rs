//! Micronutrient resolution
//!
//! For every table-backed nutrient: base DRI value, plus the pregnancy or
//! nursing addition, then health-condition and medication overrides. An
//! override replaces the value it targets. When several overrides target the
//! same nutrient the lowest value wins, independent of the order conditions
//! were listed in.

use crate::age_group::AgeGroup;
use crate::defaults::ResolvedProfile;
use crate::models::{HealthCondition, Medication, Nutrient};
use crate::reference::{BasisType, Citation, ReferenceTables};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// What triggered an override
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentTrigger {
    Condition(HealthCondition),
    Medication(Medication),
}

/// A fixed nutrient value imposed by a condition or medication
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientOverride {
    pub nutrient: Nutrient,
    pub value: f64,
    pub reason: &'static str,
}

const fn set(nutrient: Nutrient, value: f64, reason: &'static str) -> NutrientOverride {
    NutrientOverride {
        nutrient,
        value,
        reason,
    }
}

/// Override table for health conditions
pub fn condition_overrides(condition: HealthCondition) -> &'static [NutrientOverride] {
    const HYPERTENSION: [NutrientOverride; 2] = [
        set(Nutrient::Sodium, 6.0, "Salt restricted to 6 g/day for blood pressure control"),
        set(Nutrient::Potassium, 3500.0, "Potassium raised to support sodium excretion"),
    ];
    const DYSLIPIDEMIA: [NutrientOverride; 1] = [set(
        Nutrient::Cholesterol,
        200.0,
        "Dietary cholesterol limited to 200 mg/day",
    )];
    const KIDNEY_DISEASE: [NutrientOverride; 1] = [set(
        Nutrient::Potassium,
        2000.0,
        "Potassium restricted for reduced kidney function",
    )];
    const ANEMIA: [NutrientOverride; 1] = [set(Nutrient::Iron, 15.0, "Iron raised to replenish stores")];

    match condition {
        HealthCondition::Hypertension => &HYPERTENSION,
        HealthCondition::Dyslipidemia => &DYSLIPIDEMIA,
        HealthCondition::KidneyDisease => &KIDNEY_DISEASE,
        HealthCondition::Anemia => &ANEMIA,
    }
}

/// Override table for medications
pub fn medication_overrides(medication: Medication) -> &'static [NutrientOverride] {
    const WARFARIN: [NutrientOverride; 1] = [set(
        Nutrient::VitaminK,
        80.0,
        "Vitamin K kept steady and low while taking warfarin",
    )];

    match medication {
        Medication::Warfarin => &WARFARIN,
    }
}

/// One override as applied to a nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedOverride {
    pub trigger: AdjustmentTrigger,
    pub nutrient: Nutrient,
    /// Value before the override, absent when the table had none
    pub previous: Option<f64>,
    pub value: f64,
    pub reason: String,
}

/// Health-condition and medication adjustments that fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAdjustments {
    pub conditions: Vec<HealthCondition>,
    pub medications: Vec<Medication>,
    pub applied: Vec<AppliedOverride>,
    /// Overrides that lost to a lower value for the same nutrient
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub superseded: Vec<AppliedOverride>,
}

/// Reference detail for one nutrient, as shown in the calculation basis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub value: f64,
    pub unit: String,
    pub basis: BasisType,
    pub source: Citation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_addition: Option<f64>,
}

/// Output of the micronutrient resolver
#[derive(Debug, Clone, PartialEq)]
pub struct MicronutrientResult {
    pub values: BTreeMap<Nutrient, f64>,
    pub references: BTreeMap<Nutrient, ReferenceEntry>,
    pub health_adjustments: Option<HealthAdjustments>,
    /// Nutrients with no reference value and no override
    pub unavailable: Vec<Nutrient>,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Resolve every table-backed nutrient for a profile
pub fn resolve_micronutrients(
    tables: &ReferenceTables,
    profile: &ResolvedProfile,
    age_group: AgeGroup,
) -> MicronutrientResult {
    let mut values = BTreeMap::new();
    let mut references = BTreeMap::new();

    for nutrient in Nutrient::ALL {
        let Some(lookup) = tables.lookup(
            nutrient,
            age_group,
            profile.gender,
            profile.pregnancy_status,
        ) else {
            continue;
        };

        values.insert(nutrient, round_tenth(lookup.total()));
        references.insert(
            nutrient,
            ReferenceEntry {
                value: lookup.base.value,
                unit: nutrient.unit().to_string(),
                basis: lookup.base.basis,
                source: lookup.base.source,
                pregnancy_addition: lookup.addition.map(|a| a.value),
            },
        );
    }

    let health_adjustments = apply_overrides(profile, &mut values);

    let unavailable: Vec<Nutrient> = Nutrient::ALL
        .into_iter()
        .filter(|n| !values.contains_key(n))
        .collect();
    if !unavailable.is_empty() {
        debug!(
            age_group = %age_group,
            unavailable = ?unavailable,
            "No reference value for some nutrients"
        );
    }

    MicronutrientResult {
        values,
        references,
        health_adjustments,
        unavailable,
    }
}

/// Replace nutrient values per the profile's conditions and medications
fn apply_overrides(
    profile: &ResolvedProfile,
    values: &mut BTreeMap<Nutrient, f64>,
) -> Option<HealthAdjustments> {
    let candidates: Vec<(AdjustmentTrigger, &NutrientOverride)> = profile
        .health_conditions
        .iter()
        .flat_map(|c| {
            condition_overrides(*c)
                .iter()
                .map(move |o| (AdjustmentTrigger::Condition(*c), o))
        })
        .chain(profile.medications.iter().flat_map(|m| {
            medication_overrides(*m)
                .iter()
                .map(move |o| (AdjustmentTrigger::Medication(*m), o))
        }))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // lowest value per nutrient; ties keep the first trigger in enum order
    let mut winners: BTreeMap<Nutrient, (AdjustmentTrigger, &NutrientOverride)> = BTreeMap::new();
    for (trigger, candidate) in &candidates {
        let entry = winners
            .entry(candidate.nutrient)
            .or_insert((*trigger, *candidate));
        if candidate.value < entry.1.value {
            *entry = (*trigger, *candidate);
        }
    }

    let mut applied = Vec::new();
    let mut superseded = Vec::new();
    for (trigger, candidate) in candidates {
        let previous = values.get(&candidate.nutrient).copied();
        let record = AppliedOverride {
            trigger,
            nutrient: candidate.nutrient,
            previous,
            value: candidate.value,
            reason: candidate.reason.to_string(),
        };
        // a trigger sets each nutrient at most once
        if winners[&candidate.nutrient].0 == trigger {
            applied.push(record);
        } else {
            superseded.push(record);
        }
    }

    for (nutrient, (_, winner)) in &winners {
        debug!(
            subject_id = %profile.subject_id,
            nutrient = %nutrient,
            value = winner.value,
            "Applied health override"
        );
        values.insert(*nutrient, winner.value);
    }

    Some(HealthAdjustments {
        conditions: profile.health_conditions.iter().copied().collect(),
        medications: profile.medications.iter().copied().collect(),
        applied,
        superseded,
    })
}
