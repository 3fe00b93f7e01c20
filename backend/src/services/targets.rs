//! Nutrition targets service
//!
//! Thin layer between the HTTP handlers and the calculation engine:
//! - fills the reference date for birth-date based profiles
//! - runs the calculator and records outcome counters
//! - answers single reference lookups

use crate::error::ApiError;
use crate::state::AppState;
use chrono::NaiveDate;
use nutrition_targets_shared::{
    AgeGroup, Gender, Nutrient, NutritionTargets, PregnancyStatus, ProfileRecord, ReferenceQuery,
    ReferenceResponse, STANDARD_VERSION,
};
use tracing::{debug, info};

/// Counter of calculations, labelled by outcome
pub const CALCULATIONS_TOTAL: &str = "nutrition_targets_calculations_total";

/// Counter of reference lookups
pub const REFERENCE_LOOKUPS_TOTAL: &str = "nutrition_targets_reference_lookups_total";

pub struct NutritionTargetsService;

impl NutritionTargetsService {
    /// Calculate targets for a profile record
    ///
    /// `today` is used as `as_of` when the record carries a birth date but
    /// no reference date.
    pub fn calculate(
        state: &AppState,
        mut record: ProfileRecord,
        today: NaiveDate,
    ) -> Result<NutritionTargets, ApiError> {
        if record.birth_date.is_some() && record.as_of.is_none() {
            record.as_of = Some(today);
        }

        match state.calculator().calculate_record(&record) {
            Ok(result) => {
                metrics::counter!(CALCULATIONS_TOTAL, "outcome" => "success").increment(1);
                info!(
                    subject_id = %result.targets.subject_id,
                    age_group = %result.basis.age_group,
                    daily_calories = result.targets.daily_calories,
                    defaults = result.basis.missing_fields.len(),
                    "Nutrition targets calculated"
                );
                Ok(result)
            }
            Err(err) => {
                metrics::counter!(CALCULATIONS_TOTAL, "outcome" => "invalid_input").increment(1);
                debug!(field = %err.field(), error = %err, "Rejected profile");
                Err(err.into())
            }
        }
    }

    /// Look up one reference value
    pub fn reference(state: &AppState, query: &ReferenceQuery) -> Result<ReferenceResponse, ApiError> {
        let nutrient: Nutrient = query
            .nutrient
            .parse()
            .map_err(|message| ApiError::Validation {
                message,
                field: Some("nutrient".to_string()),
            })?;
        let mut gender = parse_or_default::<Gender>("gender", query.gender.as_deref())?;
        let pregnancy_status =
            parse_or_default::<PregnancyStatus>("pregnancy_status", query.pregnancy_status.as_deref())?;
        // Same resolution as the calculator: pregnancy rows are female rows
        if gender == Gender::Unspecified && pregnancy_status != PregnancyStatus::None {
            gender = Gender::Female;
        }
        let age_group = AgeGroup::from_age(query.age);

        metrics::counter!(REFERENCE_LOOKUPS_TOTAL).increment(1);

        let lookup = state
            .tables
            .lookup(nutrient, age_group, gender, pregnancy_status)
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "No reference value for {} in age group {}",
                    nutrient, age_group
                ))
            })?;

        Ok(ReferenceResponse {
            version: STANDARD_VERSION.to_string(),
            nutrient,
            unit: nutrient.unit().to_string(),
            age_group,
            gender,
            pregnancy_status,
            total: lookup.total(),
            base: lookup.base,
            pregnancy_addition: lookup.addition,
        })
    }
}

fn parse_or_default<T>(field: &str, value: Option<&str>) -> Result<T, ApiError>
where
    T: std::str::FromStr<Err = String> + Default,
{
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => text.parse().map_err(|message| ApiError::Validation {
            message,
            field: Some(field.to_string()),
        }),
    }
}
