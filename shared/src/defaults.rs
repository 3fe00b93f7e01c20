//! Defaults and missing-field tracking
//!
//! Runs before every other stage so downstream calculators always receive a
//! fully populated [`ResolvedProfile`]. Each substitution is recorded so the
//! calculation basis can show what was assumed.

use crate::models::{
    CalculatorInput, ExerciseIntensity, Gender, HealthCondition, Medication, NutritionGoal,
    PregnancyStatus, WeightChangeRate, WorkStyle,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use uuid::Uuid;

/// Values substituted for absent profile fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub age_years: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub work_style: WorkStyle,
    pub exercise_frequency: u32,
    pub exercise_intensity: ExerciseIntensity,
    pub nutrition_goal: NutritionGoal,
    pub weight_change_rate: WeightChangeRate,
    pub pregnancy_status: PregnancyStatus,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            age_years: 30,
            gender: Gender::Unspecified,
            height_cm: 165.0,
            weight_kg: 60.0,
            work_style: WorkStyle::Sedentary,
            exercise_frequency: 0,
            exercise_intensity: ExerciseIntensity::Light,
            nutrition_goal: NutritionGoal::Maintain,
            weight_change_rate: WeightChangeRate::Moderate,
            pregnancy_status: PregnancyStatus::None,
        }
    }
}

/// Fully populated profile consumed by the calculators
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub subject_id: Uuid,
    pub age_years: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub work_style: WorkStyle,
    pub exercise_frequency: u32,
    pub exercise_intensity: ExerciseIntensity,
    pub nutrition_goal: NutritionGoal,
    pub weight_change_rate: WeightChangeRate,
    pub pregnancy_status: PregnancyStatus,
    pub health_conditions: BTreeSet<HealthCondition>,
    pub medications: BTreeSet<Medication>,
}

/// Record of which fields were missing and what replaced them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsReport {
    /// Missing field names in profile order
    pub missing_fields: Vec<String>,
    pub defaults_applied: BTreeMap<String, serde_json::Value>,
}

impl DefaultsReport {
    fn resolve<T: Serialize + Copy>(&mut self, field: &str, value: Option<T>, default: T) -> T {
        match value {
            Some(value) => value,
            None => {
                self.missing_fields.push(field.to_string());
                self.defaults_applied.insert(
                    field.to_string(),
                    serde_json::to_value(default).unwrap_or(serde_json::Value::Null),
                );
                default
            }
        }
    }
}

/// Fill every absent field from `defaults`
pub fn apply_defaults(
    input: &CalculatorInput,
    defaults: &ProfileDefaults,
) -> (ResolvedProfile, DefaultsReport) {
    let mut report = DefaultsReport::default();

    let age_years = report.resolve("age", input.age_years, defaults.age_years);
    let mut gender = report.resolve("gender", input.gender, defaults.gender);
    let height_cm = report.resolve("height", input.height_cm, defaults.height_cm);
    let weight_kg = report.resolve("weight", input.weight_kg, defaults.weight_kg);
    let work_style = report.resolve("work_style", input.work_style, defaults.work_style);
    let exercise_frequency = report.resolve(
        "exercise_frequency",
        input.exercise_frequency,
        defaults.exercise_frequency,
    );
    let exercise_intensity = report.resolve(
        "exercise_intensity",
        input.exercise_intensity,
        defaults.exercise_intensity,
    );
    let nutrition_goal = report.resolve("nutrition_goal", input.nutrition_goal, defaults.nutrition_goal);
    let weight_change_rate = report.resolve(
        "weight_change_rate",
        input.weight_change_rate,
        defaults.weight_change_rate,
    );
    let mut pregnancy_status = report.resolve(
        "pregnancy_status",
        input.pregnancy_status,
        defaults.pregnancy_status,
    );

    if gender == Gender::Male && pregnancy_status != PregnancyStatus::None {
        debug!(
            subject_id = %input.subject_id,
            status = %pregnancy_status,
            "Ignoring pregnancy status for male profile"
        );
        pregnancy_status = PregnancyStatus::None;
    }

    // Pregnancy and nursing rows, additions and floors only exist for female subjects
    if gender == Gender::Unspecified && pregnancy_status != PregnancyStatus::None {
        debug!(
            subject_id = %input.subject_id,
            status = %pregnancy_status,
            "Resolving unspecified gender to female for pregnancy status"
        );
        gender = Gender::Female;
    }

    if !report.missing_fields.is_empty() {
        debug!(
            subject_id = %input.subject_id,
            missing = ?report.missing_fields,
            "Applied profile defaults"
        );
    }

    let profile = ResolvedProfile {
        subject_id: input.subject_id,
        age_years,
        gender,
        height_cm,
        weight_kg,
        work_style,
        exercise_frequency,
        exercise_intensity,
        nutrition_goal,
        weight_change_rate,
        pregnancy_status,
        health_conditions: input.health_conditions.clone(),
        medications: input.medications.clone(),
    };

    (profile, report)
}
