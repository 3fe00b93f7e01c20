//! Energy calculations
//!
//! Computes the daily calorie target from a resolved profile:
//!
//! 1. BMR via Mifflin-St Jeor, rounded to whole kcal
//! 2. PAL from work style plus an exercise addition, capped at [`PAL_MAX`]
//! 3. TDEE = BMR × PAL
//! 4. Goal adjustment from the (goal, rate) table
//! 5. Pregnancy/nursing addition
//! 6. Minimum calorie floor by sex
//!
//! Every intermediate number is kept in [`EnergyBasis`].

use crate::defaults::ResolvedProfile;
use crate::models::{
    ExerciseIntensity, Gender, NutritionGoal, PregnancyStatus, ReferenceSex, WeightChangeRate,
    WorkStyle,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound of the physical activity level
pub const PAL_MAX: f64 = 2.5;

/// Sessions per week the intensity bonus is calibrated for
const SESSIONS_PER_BONUS: f64 = 3.0;

/// Oldest age fed into the BMR equation; older and negative ages are clamped
pub const BMR_MAX_AGE: i32 = 120;

/// Minimum daily calories for male and unspecified subjects
pub const MIN_CALORIES_MALE: i32 = 1500;

/// Minimum daily calories for female subjects
pub const MIN_CALORIES_FEMALE: i32 = 1200;

/// Physical activity level breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalBasis {
    pub base: f64,
    pub exercise_addition: f64,
    pub result: f64,
    /// Whether the sum exceeded [`PAL_MAX`] and was clamped
    pub capped: bool,
}

/// Audit trail of the energy calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBasis {
    pub bmr_formula: String,
    pub bmr: i32,
    pub pal: PalBasis,
    pub tdee: i32,
    pub goal_adjustment: i32,
    pub pregnancy_addition: i32,
    pub minimum_calories: i32,
    pub minimum_applied: bool,
    pub daily_calories: i32,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// BMR
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// `Gender::Unspecified` uses the male constant. The age is clamped to
/// `0..=BMR_MAX_AGE` and the result saturates at the `i32` bounds.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> i32 {
    let age = age_years.clamp(0, BMR_MAX_AGE);
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender.reference_sex() {
        ReferenceSex::Male => base + 5.0,
        ReferenceSex::Female => base - 161.0,
    };
    bmr.round() as i32
}

// ============================================================================
// PAL
// ============================================================================

/// Calculate the physical activity level
///
/// PAL = work style base + intensity bonus × (sessions per week ÷ 3),
/// clamped to [`PAL_MAX`].
pub fn calculate_pal(
    work_style: WorkStyle,
    exercise_frequency: u32,
    intensity: ExerciseIntensity,
) -> PalBasis {
    let base = work_style.pal_base();
    let exercise_addition = round_to(
        intensity.pal_bonus() * (f64::from(exercise_frequency) / SESSIONS_PER_BONUS),
        3,
    );
    let unclamped = round_to(base + exercise_addition, 3);
    let capped = unclamped > PAL_MAX;

    if capped {
        debug!(pal = unclamped, max = PAL_MAX, "PAL capped");
    }

    PalBasis {
        base,
        exercise_addition,
        result: unclamped.min(PAL_MAX),
        capped,
    }
}

// ============================================================================
// Goal, Pregnancy and Floor
// ============================================================================

/// Daily calorie delta for a nutrition goal and weight change rate
pub fn goal_adjustment(goal: NutritionGoal, rate: WeightChangeRate) -> i32 {
    match (goal, rate) {
        (NutritionGoal::LoseWeight, WeightChangeRate::Slow) => -250,
        (NutritionGoal::LoseWeight, WeightChangeRate::Moderate) => -500,
        (NutritionGoal::LoseWeight, WeightChangeRate::Fast) => -750,
        (NutritionGoal::Maintain, _) => 0,
        (NutritionGoal::GainMuscle, WeightChangeRate::Slow) => 250,
        (NutritionGoal::GainMuscle, WeightChangeRate::Moderate) => 350,
        (NutritionGoal::GainMuscle, WeightChangeRate::Fast) => 500,
    }
}

/// Extra daily calories while pregnant or nursing
pub fn pregnancy_energy_addition(status: PregnancyStatus) -> i32 {
    match status {
        PregnancyStatus::None => 0,
        PregnancyStatus::Pregnant => 300,
        PregnancyStatus::Nursing => 500,
    }
}

/// Calorie floor for a gender
pub fn minimum_calories(gender: Gender) -> i32 {
    match gender.reference_sex() {
        ReferenceSex::Male => MIN_CALORIES_MALE,
        ReferenceSex::Female => MIN_CALORIES_FEMALE,
    }
}

/// Run the full energy pipeline for a resolved profile
pub fn calculate_energy(profile: &ResolvedProfile) -> EnergyBasis {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let pal = calculate_pal(
        profile.work_style,
        profile.exercise_frequency,
        profile.exercise_intensity,
    );
    let tdee = (f64::from(bmr) * pal.result).round() as i32;
    let goal_adjustment = goal_adjustment(profile.nutrition_goal, profile.weight_change_rate);
    let pregnancy_addition = pregnancy_energy_addition(profile.pregnancy_status);
    let minimum = minimum_calories(profile.gender);

    let computed =
        i64::from(tdee) + i64::from(goal_adjustment) + i64::from(pregnancy_addition);
    let minimum_applied = computed < i64::from(minimum);
    let daily_calories =
        i32::try_from(computed.max(i64::from(minimum))).unwrap_or(i32::MAX);
    if minimum_applied {
        debug!(
            subject_id = %profile.subject_id,
            computed,
            minimum,
            "Raised calories to minimum floor"
        );
    }

    EnergyBasis {
        bmr_formula: "mifflin_st_jeor".to_string(),
        bmr,
        pal,
        tdee,
        goal_adjustment,
        pregnancy_addition,
        minimum_calories: minimum,
        minimum_applied,
        daily_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{apply_defaults, ProfileDefaults};
    use crate::models::CalculatorInput;
    use proptest::prelude::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn profile(gender: Gender, age: i32, weight: f64, height: f64) -> ResolvedProfile {
        let mut input = CalculatorInput::new(Uuid::nil());
        input.gender = Some(gender);
        input.age_years = Some(age);
        input.weight_kg = Some(weight);
        input.height_cm = Some(height);
        apply_defaults(&input, &ProfileDefaults::default()).0
    }

    // =========================================================================
    // BMR Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        assert_eq!(calculate_bmr(70.0, 175.0, 30, Gender::Male), 1649);
        assert_eq!(calculate_bmr(55.0, 160.0, 30, Gender::Female), 1239);
    }

    #[test]
    fn test_bmr_age_is_clamped() {
        assert_eq!(
            calculate_bmr(70.0, 175.0, i32::MAX, Gender::Male),
            calculate_bmr(70.0, 175.0, BMR_MAX_AGE, Gender::Male)
        );
        assert_eq!(
            calculate_bmr(70.0, 175.0, i32::MIN, Gender::Female),
            calculate_bmr(70.0, 175.0, 0, Gender::Female)
        );
        assert_eq!(calculate_bmr(1e12, 175.0, 30, Gender::Male), i32::MAX);
    }

    #[test]
    fn test_bmr_unspecified_uses_male_equation() {
        assert_eq!(
            calculate_bmr(70.0, 175.0, 30, Gender::Unspecified),
            calculate_bmr(70.0, 175.0, 30, Gender::Male)
        );
    }

    // =========================================================================
    // PAL Tests
    // =========================================================================

    #[test]
    fn test_pal_sedentary_without_exercise() {
        let pal = calculate_pal(WorkStyle::Sedentary, 0, ExerciseIntensity::Light);
        assert_eq!(pal.base, 1.2);
        assert_eq!(pal.exercise_addition, 0.0);
        assert_eq!(pal.result, 1.2);
        assert!(!pal.capped);
    }

    #[test]
    fn test_pal_moderate_exercise_three_times() {
        let pal = calculate_pal(WorkStyle::Sedentary, 3, ExerciseIntensity::Moderate);
        assert_eq!(pal.exercise_addition, 0.1);
        assert_eq!(pal.result, 1.3);
        assert!(!pal.capped);
    }

    #[test]
    fn test_pal_capped_for_athletes() {
        let pal = calculate_pal(WorkStyle::VeryActive, 14, ExerciseIntensity::Athlete);
        assert_eq!(pal.base, 1.725);
        assert!(pal.capped);
        assert_eq!(pal.result, PAL_MAX);
    }

    // =========================================================================
    // Goal and Floor Tests
    // =========================================================================

    #[rstest]
    #[case(NutritionGoal::LoseWeight, WeightChangeRate::Moderate, -500)]
    #[case(NutritionGoal::LoseWeight, WeightChangeRate::Fast, -750)]
    #[case(NutritionGoal::Maintain, WeightChangeRate::Fast, 0)]
    #[case(NutritionGoal::GainMuscle, WeightChangeRate::Moderate, 350)]
    #[case(NutritionGoal::GainMuscle, WeightChangeRate::Slow, 250)]
    fn test_goal_adjustment(
        #[case] goal: NutritionGoal,
        #[case] rate: WeightChangeRate,
        #[case] expected: i32,
    ) {
        assert_eq!(goal_adjustment(goal, rate), expected);
    }

    #[test]
    fn test_minimum_floor_male() {
        let mut p = profile(Gender::Male, 80, 40.0, 150.0);
        p.nutrition_goal = NutritionGoal::LoseWeight;
        p.weight_change_rate = WeightChangeRate::Fast;

        let energy = calculate_energy(&p);
        assert!(energy.minimum_applied);
        assert_eq!(energy.daily_calories, 1500);
        assert!(energy.tdee + energy.goal_adjustment < 1500);
    }

    #[test]
    fn test_minimum_floor_female() {
        let mut p = profile(Gender::Female, 80, 38.0, 145.0);
        p.nutrition_goal = NutritionGoal::LoseWeight;
        p.weight_change_rate = WeightChangeRate::Fast;

        let energy = calculate_energy(&p);
        assert!(energy.minimum_applied);
        assert_eq!(energy.daily_calories, 1200);
    }

    #[test]
    fn test_floor_not_flagged_when_unused() {
        let energy = calculate_energy(&profile(Gender::Male, 30, 70.0, 175.0));
        assert!(!energy.minimum_applied);
        // 1649 × 1.2 = 1978.8
        assert_eq!(energy.tdee, 1979);
        assert_eq!(energy.daily_calories, 1979);
    }

    #[test]
    fn test_extreme_inputs_saturate_instead_of_overflowing() {
        let mut oldest = profile(Gender::Male, i32::MAX, 70.0, 175.0);
        oldest.nutrition_goal = NutritionGoal::LoseWeight;
        let energy = calculate_energy(&oldest);
        assert_eq!(energy.bmr, calculate_bmr(70.0, 175.0, BMR_MAX_AGE, Gender::Male));
        assert!(energy.daily_calories >= MIN_CALORIES_MALE);

        let mut heaviest = profile(Gender::Female, 30, 1e12, 175.0);
        heaviest.nutrition_goal = NutritionGoal::GainMuscle;
        heaviest.weight_change_rate = WeightChangeRate::Fast;
        heaviest.pregnancy_status = PregnancyStatus::Nursing;
        let energy = calculate_energy(&heaviest);
        assert_eq!(energy.tdee, i32::MAX);
        assert_eq!(energy.daily_calories, i32::MAX);
        assert!(!energy.minimum_applied);
    }

    #[test]
    fn test_pregnancy_and_nursing_additions() {
        let baseline = calculate_energy(&profile(Gender::Female, 30, 55.0, 160.0));

        let mut pregnant = profile(Gender::Female, 30, 55.0, 160.0);
        pregnant.pregnancy_status = PregnancyStatus::Pregnant;
        let mut nursing = pregnant.clone();
        nursing.pregnancy_status = PregnancyStatus::Nursing;

        assert!(!baseline.minimum_applied);
        assert_eq!(calculate_energy(&pregnant).daily_calories, baseline.daily_calories + 300);
        assert_eq!(calculate_energy(&nursing).daily_calories, baseline.daily_calories + 500);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: PAL never exceeds the cap and is flagged when clamped
        #[test]
        fn prop_pal_bounded(frequency in 0u32..40, style in 0usize..4, intensity in 0usize..4) {
            let styles = [WorkStyle::Sedentary, WorkStyle::LightActive, WorkStyle::ModeratelyActive, WorkStyle::VeryActive];
            let intensities = [ExerciseIntensity::Light, ExerciseIntensity::Moderate, ExerciseIntensity::High, ExerciseIntensity::Athlete];
            let pal = calculate_pal(styles[style], frequency, intensities[intensity]);
            prop_assert!(pal.result <= PAL_MAX);
            prop_assert!(pal.result >= pal.base);
            prop_assert_eq!(pal.capped, pal.base + pal.exercise_addition > PAL_MAX + 1e-9);
        }

        /// Property: Final calories never fall below the floor
        #[test]
        fn prop_calories_above_floor(
            weight in 3.0f64..200.0,
            height in 50.0f64..210.0,
            age in any::<i32>(),
            female in any::<bool>()
        ) {
            let gender = if female { Gender::Female } else { Gender::Male };
            let mut p = profile(gender, age, weight, height);
            p.nutrition_goal = NutritionGoal::LoseWeight;
            p.weight_change_rate = WeightChangeRate::Fast;
            let energy = calculate_energy(&p);
            prop_assert!(energy.daily_calories >= minimum_calories(gender));
            prop_assert!(energy.daily_calories > 0);
        }
    }
}
