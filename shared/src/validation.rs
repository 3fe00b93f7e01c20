//! Input validation functions
//!
//! Range and shape checks for profile values arriving from the boundary.
//! Each validator returns a human-readable message; the caller attaches the
//! field name when turning it into a [`crate::CalculatorError`].

use chrono::NaiveDate;

/// Upper bound accepted for height (cm)
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Upper bound accepted for weight (kg)
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be greater than 0 cm".to_string());
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(format!("Height must be at most {} cm", MAX_HEIGHT_CM));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("Weight must be at most {} kg", MAX_WEIGHT_KG));
    }
    Ok(())
}

/// Validate an age in whole years
///
/// No range check: the age group resolver clamps out-of-table ages.
pub fn validate_age_years(age: f64) -> Result<i32, String> {
    whole_number(age, "Age")
}

/// Validate exercise sessions per week
pub fn validate_exercise_frequency(frequency: f64) -> Result<u32, String> {
    let sessions = whole_number(frequency, "Exercise frequency")?;
    u32::try_from(sessions).map_err(|_| "Exercise frequency cannot be negative".to_string())
}

fn whole_number(value: f64, label: &str) -> Result<i32, String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", label));
    }
    if value.fract() != 0.0 {
        return Err(format!("{} must be a whole number", label));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(format!("{} is out of range", label));
    }
    Ok(value as i32)
}

/// Derive age in completed years at `as_of`
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> Result<i32, String> {
    if birth_date > as_of {
        return Err("Birth date cannot be after the reference date".to_string());
    }
    as_of
        .years_since(birth_date)
        .and_then(|years| i32::try_from(years).ok())
        .ok_or_else(|| "Invalid birth date".to_string())
}

/// Display label for a profile field, used in client-facing messages
pub fn field_label(field: &str) -> &'static str {
    match field {
        "subject_id" => "Subject ID",
        "age" => "Age",
        "birth_date" => "Birth date",
        "as_of" => "Reference date",
        "gender" => "Gender",
        "height" => "Height",
        "weight" => "Weight",
        "work_style" => "Work style",
        "exercise_frequency" => "Exercise frequency",
        "exercise_intensity" => "Exercise intensity",
        "nutrition_goal" => "Nutrition goal",
        "weight_change_rate" => "Weight change rate",
        "pregnancy_status" => "Pregnancy status",
        "health_conditions" => "Health conditions",
        "medications" => "Medications",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(170.0, true)]
    #[case(45.5, true)]
    #[case(300.0, true)]
    #[case(0.0, false)]
    #[case(-10.0, false)]
    #[case(300.1, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_validate_height(#[case] height: f64, #[case] valid: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), valid);
    }

    #[rstest]
    #[case(65.0, true)]
    #[case(3.2, true)]
    #[case(0.0, false)]
    #[case(-1.0, false)]
    #[case(501.0, false)]
    #[case(f64::NAN, false)]
    fn test_validate_weight(#[case] weight: f64, #[case] valid: bool) {
        assert_eq!(validate_weight_kg(weight).is_ok(), valid);
    }

    #[test]
    fn test_age_must_be_whole() {
        assert_eq!(validate_age_years(34.0), Ok(34));
        assert_eq!(validate_age_years(0.0), Ok(0));
        assert_eq!(validate_age_years(130.0), Ok(130));
        assert!(validate_age_years(34.5).is_err());
        assert!(validate_age_years(f64::NAN).is_err());
    }

    #[test]
    fn test_exercise_frequency() {
        assert_eq!(validate_exercise_frequency(3.0), Ok(3));
        assert_eq!(validate_exercise_frequency(0.0), Ok(0));
        assert!(validate_exercise_frequency(-1.0).unwrap_err().contains("negative"));
        assert!(validate_exercise_frequency(2.5).unwrap_err().contains("whole"));
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let birth = NaiveDate::from_ymd_opt(1994, 5, 1).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()), Ok(29));
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()), Ok(30));
        assert!(age_on(birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()).is_err());
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label("weight"), "Weight");
        assert_eq!(field_label("pregnancy_status"), "Pregnancy status");
        assert_eq!(field_label("unknown"), "Field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Any positive height up to the maximum is accepted
        #[test]
        fn prop_positive_heights_accepted(height in 0.1f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        /// Property: Whole ages round-trip unchanged
        #[test]
        fn prop_whole_ages_accepted(age in 0i32..150) {
            prop_assert_eq!(validate_age_years(f64::from(age)), Ok(age));
        }
    }
}
