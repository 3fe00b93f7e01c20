//! Macronutrient targets
//!
//! Protein, fat and carbohydrate grams are derived from the final calorie
//! target with a per-goal ratio table. The default ratios sit inside the
//! DRI 2020 energy-percentage target ranges (protein 13-20 %, fat 20-30 %,
//! carbohydrate 50-65 %).

use crate::models::NutritionGoal;
use serde::{Deserialize, Serialize};

pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;
pub const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;

/// Share of daily calories per macronutrient, as fractions of 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
}

impl MacroRatio {
    pub const fn new(protein: f64, fat: f64, carbohydrate: f64) -> Self {
        Self {
            protein,
            fat,
            carbohydrate,
        }
    }

    /// Check that every share is positive and the shares sum to 1
    pub fn validate(&self) -> Result<(), String> {
        let shares = [self.protein, self.fat, self.carbohydrate];
        if shares.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err("Macro ratios must be positive numbers".to_string());
        }
        let total: f64 = shares.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(format!("Macro ratios must sum to 1.0 (got {:.3})", total));
        }
        Ok(())
    }
}

/// Macro ratio policy keyed by nutrition goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroRatioTable {
    pub lose_weight: MacroRatio,
    pub maintain: MacroRatio,
    pub gain_muscle: MacroRatio,
}

impl Default for MacroRatioTable {
    fn default() -> Self {
        Self {
            lose_weight: MacroRatio::new(0.20, 0.25, 0.55),
            maintain: MacroRatio::new(0.15, 0.25, 0.60),
            gain_muscle: MacroRatio::new(0.20, 0.25, 0.55),
        }
    }
}

impl MacroRatioTable {
    pub fn ratio_for(&self, goal: NutritionGoal) -> MacroRatio {
        match goal {
            NutritionGoal::LoseWeight => self.lose_weight,
            NutritionGoal::Maintain => self.maintain,
            NutritionGoal::GainMuscle => self.gain_muscle,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (goal, ratio) in [
            (NutritionGoal::LoseWeight, &self.lose_weight),
            (NutritionGoal::Maintain, &self.maintain),
            (NutritionGoal::GainMuscle, &self.gain_muscle),
        ] {
            ratio.validate().map_err(|e| format!("{}: {}", goal, e))?;
        }
        Ok(())
    }
}

/// Audit trail of the macro calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroBasis {
    pub ratio: MacroRatio,
    pub protein_kcal_per_g: f64,
    pub fat_kcal_per_g: f64,
    pub carbohydrate_kcal_per_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrate_g: f64,
}

fn grams(calories: i32, share: f64, kcal_per_g: f64) -> f64 {
    (f64::from(calories) * share / kcal_per_g * 10.0).round() / 10.0
}

/// Derive macro grams from the calorie target
pub fn calculate_macros(daily_calories: i32, ratio: MacroRatio) -> MacroBasis {
    MacroBasis {
        ratio,
        protein_kcal_per_g: PROTEIN_KCAL_PER_G,
        fat_kcal_per_g: FAT_KCAL_PER_G,
        carbohydrate_kcal_per_g: CARBOHYDRATE_KCAL_PER_G,
        protein_g: grams(daily_calories, ratio.protein, PROTEIN_KCAL_PER_G),
        fat_g: grams(daily_calories, ratio.fat, FAT_KCAL_PER_G),
        carbohydrate_g: grams(daily_calories, ratio.carbohydrate, CARBOHYDRATE_KCAL_PER_G),
    }
}
