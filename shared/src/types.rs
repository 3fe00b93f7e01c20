//! Boundary types
//!
//! [`ProfileRecord`] is the loosely typed profile a client or profile store
//! sends: numbers may be JSON numbers or numeric strings, categories are plain
//! strings and conditions are free-text tags. Converting it into a
//! [`CalculatorInput`] is the only place the engine can reject input.

use crate::age_group::AgeGroup;
use crate::errors::{CalculatorError, CalculatorResult};
use crate::models::{
    CalculatorInput, Gender, HealthCondition, Medication, Nutrient, PregnancyStatus,
};
use crate::reference::NutrientReference;
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// A number that may arrive as a JSON number or as text
///
/// Any other JSON value lands in `Other` so it can be rejected with the
/// field name instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericField {
    /// Parse the value; blank text counts as absent
    pub fn value(&self, field: &str) -> CalculatorResult<Option<f64>> {
        match self {
            NumericField::Number(n) => Ok(Some(*n)),
            NumericField::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>().map(Some).map_err(|_| {
                    CalculatorError::invalid_input(
                        field,
                        format!("{} must be a number, got {:?}", validation::field_label(field), text),
                    )
                })
            }
            NumericField::Other(value) => Err(CalculatorError::invalid_input(
                field,
                format!("{} must be a number, got {}", validation::field_label(field), value),
            )),
        }
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// Profile as supplied by a client or profile store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub subject_id: Option<Uuid>,
    /// Age in whole years; takes precedence over `birth_date`
    pub age: Option<NumericField>,
    pub birth_date: Option<NaiveDate>,
    /// Date `birth_date` is measured against
    pub as_of: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Height in cm
    pub height: Option<NumericField>,
    /// Weight in kg
    pub weight: Option<NumericField>,
    pub work_style: Option<String>,
    /// Exercise sessions per week
    pub exercise_frequency: Option<NumericField>,
    pub exercise_intensity: Option<String>,
    pub nutrition_goal: Option<String>,
    pub weight_change_rate: Option<String>,
    pub pregnancy_status: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub health_conditions: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub medications: Vec<String>,
}

/// Profile stores send `null` for an empty tag list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn number(field: &str, value: &Option<NumericField>) -> CalculatorResult<Option<f64>> {
    match value {
        Some(value) => value.value(field),
        None => Ok(None),
    }
}

fn category<T>(field: &str, value: &Option<String>) -> CalculatorResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<T>()
            .map(Some)
            .map_err(|message| CalculatorError::invalid_input(field, message)),
    }
}

fn checked<T>(field: &str, result: Result<T, String>) -> CalculatorResult<T> {
    result.map_err(|message| CalculatorError::invalid_input(field, message))
}

impl ProfileRecord {
    fn age_years(&self) -> CalculatorResult<Option<i32>> {
        if let Some(age) = number("age", &self.age)? {
            return checked("age", validation::validate_age_years(age)).map(Some);
        }
        match (self.birth_date, self.as_of) {
            (None, _) => Ok(None),
            (Some(_), None) => Err(CalculatorError::invalid_input(
                "as_of",
                "A reference date is required when birth_date is given",
            )),
            (Some(birth_date), Some(as_of)) => {
                checked("birth_date", validation::age_on(birth_date, as_of)).map(Some)
            }
        }
    }
}

impl TryFrom<&ProfileRecord> for CalculatorInput {
    type Error = CalculatorError;

    fn try_from(record: &ProfileRecord) -> Result<Self, Self::Error> {
        let mut input = CalculatorInput::new(record.subject_id.unwrap_or(Uuid::nil()));

        input.age_years = record.age_years()?;
        input.gender = category::<Gender>("gender", &record.gender)?;

        if let Some(height) = number("height", &record.height)? {
            checked("height", validation::validate_height_cm(height))?;
            input.height_cm = Some(height);
        }
        if let Some(weight) = number("weight", &record.weight)? {
            checked("weight", validation::validate_weight_kg(weight))?;
            input.weight_kg = Some(weight);
        }

        input.work_style = category("work_style", &record.work_style)?;
        input.exercise_frequency = number("exercise_frequency", &record.exercise_frequency)?
            .map(|f| checked("exercise_frequency", validation::validate_exercise_frequency(f)))
            .transpose()?;
        input.exercise_intensity = category("exercise_intensity", &record.exercise_intensity)?;
        input.nutrition_goal = category("nutrition_goal", &record.nutrition_goal)?;
        input.weight_change_rate = category("weight_change_rate", &record.weight_change_rate)?;
        input.pregnancy_status = category("pregnancy_status", &record.pregnancy_status)?;

        if input.gender == Some(Gender::Male)
            && input.pregnancy_status.is_some_and(|s| s != PregnancyStatus::None)
        {
            return Err(CalculatorError::invalid_input(
                "pregnancy_status",
                "Pregnancy status cannot be set for a male profile",
            ));
        }

        for tag in &record.health_conditions {
            match HealthCondition::from_tag(tag) {
                Some(condition) => {
                    input.health_conditions.insert(condition);
                }
                None => debug!(tag = %tag, "Ignoring unrecognized health condition"),
            }
        }
        for tag in &record.medications {
            match Medication::from_tag(tag) {
                Some(medication) => {
                    input.medications.insert(medication);
                }
                None => debug!(tag = %tag, "Ignoring unrecognized medication"),
            }
        }

        Ok(input)
    }
}

/// Query for a single reference value lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceQuery {
    pub nutrient: String,
    pub age: i32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub pregnancy_status: Option<String>,
}

/// A single reference value with its context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceResponse {
    pub version: String,
    pub nutrient: Nutrient,
    pub unit: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub pregnancy_status: PregnancyStatus,
    pub base: NutrientReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_addition: Option<NutrientReference>,
    /// Base value plus any addition
    pub total: f64,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
