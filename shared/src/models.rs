//! Core data model for nutrition target calculations
//!
//! Every categorical profile field is a closed enumeration. Free-text values
//! coming from profile stores are parsed at the boundary (see [`crate::types`])
//! so the engine only ever matches on these types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Gender as recorded on the profile
///
/// `Unspecified` resolves to the male reference values, BMR equation and
/// calorie floor everywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

/// Sex used to index reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSex {
    Male,
    Female,
}

impl Gender {
    /// Sex used for reference lookups and physiological equations
    pub fn reference_sex(&self) -> ReferenceSex {
        match self {
            Gender::Female => ReferenceSex::Female,
            Gender::Male | Gender::Unspecified => ReferenceSex::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "男性" => Ok(Gender::Male),
            "female" | "f" | "woman" | "女性" => Ok(Gender::Female),
            "unspecified" | "other" | "prefer_not_to_say" | "未回答" => Ok(Gender::Unspecified),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Daily work style, the base of the physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    /// Desk work, mostly seated
    #[default]
    Sedentary,
    /// Seated work with some standing or walking
    LightActive,
    /// Standing work, commuting on foot, housework
    ModeratelyActive,
    /// Physical labour
    VeryActive,
}

impl WorkStyle {
    /// PAL base multiplier for this work style
    pub fn pal_base(&self) -> f64 {
        match self {
            WorkStyle::Sedentary => 1.2,
            WorkStyle::LightActive => 1.375,
            WorkStyle::ModeratelyActive => 1.55,
            WorkStyle::VeryActive => 1.725,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStyle::Sedentary => "sedentary",
            WorkStyle::LightActive => "light_active",
            WorkStyle::ModeratelyActive => "moderately_active",
            WorkStyle::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for WorkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "desk" => Ok(WorkStyle::Sedentary),
            "light_active" | "lightly_active" | "light" => Ok(WorkStyle::LightActive),
            "moderately_active" | "moderate" | "standing" => Ok(WorkStyle::ModeratelyActive),
            "very_active" | "active" | "physical" => Ok(WorkStyle::VeryActive),
            _ => Err(format!("Unknown work style: {}", s)),
        }
    }
}

/// Intensity of planned exercise sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseIntensity {
    #[default]
    Light,
    Moderate,
    High,
    Athlete,
}

impl ExerciseIntensity {
    /// PAL bonus for three sessions per week at this intensity
    pub fn pal_bonus(&self) -> f64 {
        match self {
            ExerciseIntensity::Light => 0.05,
            ExerciseIntensity::Moderate => 0.1,
            ExerciseIntensity::High => 0.15,
            ExerciseIntensity::Athlete => 0.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseIntensity::Light => "light",
            ExerciseIntensity::Moderate => "moderate",
            ExerciseIntensity::High => "high",
            ExerciseIntensity::Athlete => "athlete",
        }
    }
}

impl fmt::Display for ExerciseIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExerciseIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "low" => Ok(ExerciseIntensity::Light),
            "moderate" | "medium" => Ok(ExerciseIntensity::Moderate),
            "high" | "intense" | "vigorous" => Ok(ExerciseIntensity::High),
            "athlete" | "competitive" => Ok(ExerciseIntensity::Athlete),
            _ => Err(format!("Unknown exercise intensity: {}", s)),
        }
    }
}

/// Nutrition goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    LoseWeight,
    #[default]
    Maintain,
    GainMuscle,
}

impl NutritionGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionGoal::LoseWeight => "lose_weight",
            NutritionGoal::Maintain => "maintain",
            NutritionGoal::GainMuscle => "gain_muscle",
        }
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NutritionGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" | "weight_loss" | "diet" => Ok(NutritionGoal::LoseWeight),
            "maintain" | "maintenance" | "health" => Ok(NutritionGoal::Maintain),
            "gain_muscle" | "muscle_gain" | "bulk" => Ok(NutritionGoal::GainMuscle),
            _ => Err(format!("Unknown nutrition goal: {}", s)),
        }
    }
}

/// How quickly the user wants their weight to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightChangeRate {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl WeightChangeRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightChangeRate::Slow => "slow",
            WeightChangeRate::Moderate => "moderate",
            WeightChangeRate::Fast => "fast",
        }
    }
}

impl fmt::Display for WeightChangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WeightChangeRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" | "gradual" => Ok(WeightChangeRate::Slow),
            "moderate" | "normal" | "standard" => Ok(WeightChangeRate::Moderate),
            "fast" | "aggressive" => Ok(WeightChangeRate::Fast),
            _ => Err(format!("Unknown weight change rate: {}", s)),
        }
    }
}

/// Pregnancy or nursing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyStatus {
    #[default]
    None,
    Pregnant,
    Nursing,
}

impl PregnancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PregnancyStatus::None => "none",
            PregnancyStatus::Pregnant => "pregnant",
            PregnancyStatus::Nursing => "nursing",
        }
    }
}

impl fmt::Display for PregnancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PregnancyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "no" | "not_pregnant" => Ok(PregnancyStatus::None),
            "pregnant" | "pregnancy" | "妊娠中" => Ok(PregnancyStatus::Pregnant),
            "nursing" | "lactating" | "breastfeeding" | "授乳中" => Ok(PregnancyStatus::Nursing),
            _ => Err(format!("Unknown pregnancy status: {}", s)),
        }
    }
}

// ============================================================================
// Health Conditions and Medications
// ============================================================================

/// Health conditions that change nutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Hypertension,
    Dyslipidemia,
    KidneyDisease,
    Anemia,
}

impl HealthCondition {
    /// Map a free-text profile tag onto a known condition
    ///
    /// Returns `None` for anything outside the supported vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "hypertension" | "high_blood_pressure" | "高血圧" | "高血圧症" => {
                Some(HealthCondition::Hypertension)
            }
            "dyslipidemia" | "hyperlipidemia" | "high_cholesterol" | "脂質異常症" | "高脂血症" => {
                Some(HealthCondition::Dyslipidemia)
            }
            "kidney_disease" | "chronic_kidney_disease" | "ckd" | "腎臓病" | "慢性腎臓病" => {
                Some(HealthCondition::KidneyDisease)
            }
            "anemia" | "anaemia" | "iron_deficiency" | "貧血" => Some(HealthCondition::Anemia),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::Hypertension => "hypertension",
            HealthCondition::Dyslipidemia => "dyslipidemia",
            HealthCondition::KidneyDisease => "kidney_disease",
            HealthCondition::Anemia => "anemia",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Medications that change nutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medication {
    Warfarin,
}

impl Medication {
    /// Map a free-text profile tag onto a known medication
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "warfarin" | "warfarin_potassium" | "coumadin" | "ワーファリン" | "ワルファリン" => {
                Some(Medication::Warfarin)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medication::Warfarin => "warfarin",
        }
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Nutrients
// ============================================================================

/// Table-backed nutrients tracked by the engine
///
/// Protein, fat and carbohydrate are derived from the calorie target instead
/// and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Fiber,
    Sodium,
    Potassium,
    Calcium,
    Phosphorus,
    Iron,
    Zinc,
    Iodine,
    Cholesterol,
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminB6,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    FolicAcid,
}

impl Nutrient {
    pub const ALL: [Nutrient; 19] = [
        Nutrient::Fiber,
        Nutrient::Sodium,
        Nutrient::Potassium,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
        Nutrient::Iron,
        Nutrient::Zinc,
        Nutrient::Iodine,
        Nutrient::Cholesterol,
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB6,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::FolicAcid,
    ];

    /// Unit the target value is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Fiber | Nutrient::Sodium => "g",
            Nutrient::Potassium
            | Nutrient::Calcium
            | Nutrient::Phosphorus
            | Nutrient::Iron
            | Nutrient::Zinc
            | Nutrient::Cholesterol
            | Nutrient::VitaminB1
            | Nutrient::VitaminB2
            | Nutrient::VitaminB6
            | Nutrient::VitaminC
            | Nutrient::VitaminE => "mg",
            Nutrient::VitaminA => "µgRAE",
            Nutrient::Iodine
            | Nutrient::VitaminB12
            | Nutrient::VitaminD
            | Nutrient::VitaminK
            | Nutrient::FolicAcid => "µg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Fiber => "fiber",
            Nutrient::Sodium => "sodium",
            Nutrient::Potassium => "potassium",
            Nutrient::Calcium => "calcium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Iron => "iron",
            Nutrient::Zinc => "zinc",
            Nutrient::Iodine => "iodine",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::VitaminB1 => "vitamin_b1",
            Nutrient::VitaminB2 => "vitamin_b2",
            Nutrient::VitaminB6 => "vitamin_b6",
            Nutrient::VitaminB12 => "vitamin_b12",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminD => "vitamin_d",
            Nutrient::VitaminE => "vitamin_e",
            Nutrient::VitaminK => "vitamin_k",
            Nutrient::FolicAcid => "folic_acid",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Nutrient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Nutrient::ALL
            .iter()
            .copied()
            .find(|n| n.as_str() == normalized)
            .or(match normalized.as_str() {
                "salt" | "salt_equivalent" => Some(Nutrient::Sodium),
                "folate" => Some(Nutrient::FolicAcid),
                "dietary_fiber" => Some(Nutrient::Fiber),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown nutrient: {}", s))
    }
}

// ============================================================================
// Calculator Input and Output
// ============================================================================

/// Typed calculator input
///
/// Every profile field is optional; the engine substitutes documented
/// defaults for anything absent and records what it substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub subject_id: Uuid,
    #[serde(default)]
    pub age_years: Option<i32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub work_style: Option<WorkStyle>,
    /// Exercise sessions per week
    #[serde(default)]
    pub exercise_frequency: Option<u32>,
    #[serde(default)]
    pub exercise_intensity: Option<ExerciseIntensity>,
    #[serde(default)]
    pub nutrition_goal: Option<NutritionGoal>,
    #[serde(default)]
    pub weight_change_rate: Option<WeightChangeRate>,
    #[serde(default)]
    pub pregnancy_status: Option<PregnancyStatus>,
    #[serde(default)]
    pub health_conditions: BTreeSet<HealthCondition>,
    #[serde(default)]
    pub medications: BTreeSet<Medication>,
}

impl CalculatorInput {
    /// Create an input with every optional field absent
    pub fn new(subject_id: Uuid) -> Self {
        Self {
            subject_id,
            age_years: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            work_style: None,
            exercise_frequency: None,
            exercise_intensity: None,
            nutrition_goal: None,
            weight_change_rate: None,
            pregnancy_status: None,
            health_conditions: BTreeSet::new(),
            medications: BTreeSet::new(),
        }
    }
}

/// Final daily targets, flat and ready to persist or display
///
/// Table-backed nutrients are `None` when the reference standard defines no
/// value for the subject's age group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetData {
    pub subject_id: Uuid,
    pub daily_calories: i32,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrate_g: f64,
    pub fiber_g: Option<f64>,
    /// Salt equivalent
    pub sodium_g: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub calcium_mg: Option<f64>,
    pub phosphorus_mg: Option<f64>,
    pub iron_mg: Option<f64>,
    pub zinc_mg: Option<f64>,
    pub iodine_ug: Option<f64>,
    pub cholesterol_mg: Option<f64>,
    pub vitamin_a_ug: Option<f64>,
    pub vitamin_b1_mg: Option<f64>,
    pub vitamin_b2_mg: Option<f64>,
    pub vitamin_b6_mg: Option<f64>,
    pub vitamin_b12_ug: Option<f64>,
    pub vitamin_c_mg: Option<f64>,
    pub vitamin_d_ug: Option<f64>,
    pub vitamin_e_mg: Option<f64>,
    pub vitamin_k_ug: Option<f64>,
    pub folic_acid_ug: Option<f64>,
}

impl TargetData {
    /// Build target data from macro grams and resolved nutrient values
    pub fn from_parts(
        subject_id: Uuid,
        daily_calories: i32,
        protein_g: f64,
        fat_g: f64,
        carbohydrate_g: f64,
        nutrients: &BTreeMap<Nutrient, f64>,
    ) -> Self {
        let value = |n: Nutrient| nutrients.get(&n).copied();
        Self {
            subject_id,
            daily_calories,
            protein_g,
            fat_g,
            carbohydrate_g,
            fiber_g: value(Nutrient::Fiber),
            sodium_g: value(Nutrient::Sodium),
            potassium_mg: value(Nutrient::Potassium),
            calcium_mg: value(Nutrient::Calcium),
            phosphorus_mg: value(Nutrient::Phosphorus),
            iron_mg: value(Nutrient::Iron),
            zinc_mg: value(Nutrient::Zinc),
            iodine_ug: value(Nutrient::Iodine),
            cholesterol_mg: value(Nutrient::Cholesterol),
            vitamin_a_ug: value(Nutrient::VitaminA),
            vitamin_b1_mg: value(Nutrient::VitaminB1),
            vitamin_b2_mg: value(Nutrient::VitaminB2),
            vitamin_b6_mg: value(Nutrient::VitaminB6),
            vitamin_b12_ug: value(Nutrient::VitaminB12),
            vitamin_c_mg: value(Nutrient::VitaminC),
            vitamin_d_ug: value(Nutrient::VitaminD),
            vitamin_e_mg: value(Nutrient::VitaminE),
            vitamin_k_ug: value(Nutrient::VitaminK),
            folic_acid_ug: value(Nutrient::FolicAcid),
        }
    }

    /// Target for a single table-backed nutrient
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Sodium => self.sodium_g,
            Nutrient::Potassium => self.potassium_mg,
            Nutrient::Calcium => self.calcium_mg,
            Nutrient::Phosphorus => self.phosphorus_mg,
            Nutrient::Iron => self.iron_mg,
            Nutrient::Zinc => self.zinc_mg,
            Nutrient::Iodine => self.iodine_ug,
            Nutrient::Cholesterol => self.cholesterol_mg,
            Nutrient::VitaminA => self.vitamin_a_ug,
            Nutrient::VitaminB1 => self.vitamin_b1_mg,
            Nutrient::VitaminB2 => self.vitamin_b2_mg,
            Nutrient::VitaminB6 => self.vitamin_b6_mg,
            Nutrient::VitaminB12 => self.vitamin_b12_ug,
            Nutrient::VitaminC => self.vitamin_c_mg,
            Nutrient::VitaminD => self.vitamin_d_ug,
            Nutrient::VitaminE => self.vitamin_e_mg,
            Nutrient::VitaminK => self.vitamin_k_ug,
            Nutrient::FolicAcid => self.folic_acid_ug,
        }
    }
}
