//! Reference table store
//!
//! Immutable lookup tables mapping (nutrient, age group, sex) to a reference
//! value and its citation, plus pregnancy/nursing addition rows. Build one
//! [`ReferenceTables`] at startup and share it by reference; it holds no
//! interior mutability and is safe to read from any number of threads.

use crate::age_group::AgeGroup;
use crate::models::{Gender, Nutrient, PregnancyStatus, ReferenceSex};
use crate::reference_data::{Source, NUTRIENT_TABLES, PREGNANCY_ADDITIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of the reference standard and table revision in force
pub const STANDARD_VERSION: &str = "jp-dri-2020/1.0";

/// How a reference value should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisType {
    /// Amount meeting the needs of most people (RDA)
    RecommendedIntake,
    /// Amount assumed sufficient where an RDA cannot be set (AI)
    AdequateIntake,
    /// Target for preventing lifestyle-related disease (DG)
    TargetRange,
    /// Ceiling not to exceed
    UpperLimit,
}

/// Source a reference value was taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

impl Citation {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A single reference value with its interpretation and citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReference {
    pub value: f64,
    pub basis: BasisType,
    pub source: Citation,
}

/// Result of a reference lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLookup {
    /// Base value for the age group and sex
    pub base: NutrientReference,
    /// Pregnancy or nursing addition, when one is defined
    pub addition: Option<NutrientReference>,
}

impl ReferenceLookup {
    /// Base value plus any pregnancy/nursing addition
    pub fn total(&self) -> f64 {
        self.base.value + self.addition.as_ref().map_or(0.0, |a| a.value)
    }
}

/// One base row for a custom table
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    pub nutrient: Nutrient,
    pub age_group: AgeGroup,
    pub sex: ReferenceSex,
    pub reference: NutrientReference,
}

/// One pregnancy/nursing addition row for a custom table
#[derive(Debug, Clone)]
pub struct AdditionRow {
    pub nutrient: Nutrient,
    pub status: PregnancyStatus,
    pub reference: NutrientReference,
}

/// Immutable reference value store
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    base: BTreeMap<(Nutrient, AgeGroup, ReferenceSex), NutrientReference>,
    additions: BTreeMap<(Nutrient, PregnancyStatus), NutrientReference>,
}

impl ReferenceTables {
    /// Build the tables for the Japanese DRI 2020 standard
    pub fn standard() -> Self {
        let rows = NUTRIENT_TABLES.iter().flat_map(|table| {
            AgeGroup::all().flat_map(move |group| {
                let basis = if group.is_infant() {
                    table.infant_basis
                } else {
                    table.basis
                };
                [
                    (ReferenceSex::Male, table.male[group.index()]),
                    (ReferenceSex::Female, table.female[group.index()]),
                ]
                .into_iter()
                .filter_map(move |(sex, value)| {
                    value.map(|value| ReferenceRow {
                        nutrient: table.nutrient,
                        age_group: group,
                        sex,
                        reference: NutrientReference {
                            value,
                            basis,
                            source: table.source.citation(),
                        },
                    })
                })
            })
        });

        let additions = PREGNANCY_ADDITIONS
            .iter()
            .map(|(nutrient, status, value)| AdditionRow {
                nutrient: *nutrient,
                status: *status,
                reference: NutrientReference {
                    value: *value,
                    basis: BasisType::RecommendedIntake,
                    source: Source::Dri2020.citation(),
                },
            });

        Self::from_rows(rows, additions)
    }

    /// Build tables from explicit rows
    ///
    /// Later rows replace earlier rows with the same key.
    pub fn from_rows(
        rows: impl IntoIterator<Item = ReferenceRow>,
        additions: impl IntoIterator<Item = AdditionRow>,
    ) -> Self {
        let base = rows
            .into_iter()
            .map(|row| ((row.nutrient, row.age_group, row.sex), row.reference))
            .collect();
        let additions = additions
            .into_iter()
            .filter(|row| row.status != PregnancyStatus::None)
            .map(|row| ((row.nutrient, row.status), row.reference))
            .collect();

        Self { base, additions }
    }

    /// Look up the reference value for a nutrient
    ///
    /// `Gender::Unspecified` resolves to the male rows. Returns `None` when
    /// the standard defines no value for the bucket; callers treat that as
    /// "no applicable target".
    pub fn lookup(
        &self,
        nutrient: Nutrient,
        age_group: AgeGroup,
        gender: Gender,
        pregnancy_status: PregnancyStatus,
    ) -> Option<ReferenceLookup> {
        let base = self
            .base
            .get(&(nutrient, age_group, gender.reference_sex()))?
            .clone();
        let addition = self.additions.get(&(nutrient, pregnancy_status)).cloned();

        Some(ReferenceLookup { base, addition })
    }

    /// Number of base rows
    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}
