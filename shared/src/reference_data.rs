//! Authored reference values
//!
//! Dietary Reference Intakes for Japanese (2020 edition). Columns follow
//! [`AgeGroup`] order: 6-11m, 1-2, 3-5, 6-7, 8-9, 10-11, 12-14, 15-17,
//! 18-29, 30-49, 50-64, 65-74, 75+. `-` marks a bucket with no value.
//!
//! Cholesterol has no target in the 2020 edition; the adult caps below are
//! the last published targets (2010 edition).

use crate::age_group::AgeGroup;
use crate::models::{Nutrient, PregnancyStatus};
use crate::reference::{BasisType, Citation};

macro_rules! values {
    (@one -) => { None };
    (@one $v:literal) => { Some($v) };
    ($($v:tt),* $(,)?) => { [$(values!(@one $v)),*] };
}

/// Publication a table row is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Dri2020,
    Dri2010,
}

impl Source {
    pub(crate) fn citation(&self) -> Citation {
        match self {
            Source::Dri2020 => Citation::new(
                "日本人の食事摂取基準（2020年版）",
                "https://www.mhlw.go.jp/stf/newpage_08517.html",
            ),
            Source::Dri2010 => Citation::new(
                "日本人の食事摂取基準（2010年版）",
                "https://www.mhlw.go.jp/stf/seisakunitsuite/bunya/kenkou_iryou/kenkou/eiyou/syokuji_kijyun.html",
            ),
        }
    }
}

/// One nutrient's values across every age group
pub(crate) struct NutrientTable {
    pub nutrient: Nutrient,
    pub basis: BasisType,
    /// Basis for the infant bucket, which only ever has adequate intakes
    pub infant_basis: BasisType,
    pub source: Source,
    pub male: [Option<f64>; AgeGroup::COUNT],
    pub female: [Option<f64>; AgeGroup::COUNT],
}

use BasisType::{AdequateIntake as AI, RecommendedIntake as RDA, TargetRange as DG, UpperLimit as UL};

pub(crate) static NUTRIENT_TABLES: [NutrientTable; 19] = [
    NutrientTable {
        nutrient: Nutrient::Fiber,
        basis: DG,
        infant_basis: DG,
        source: Source::Dri2020,
        male: values![-, -, 8.0, 10.0, 11.0, 13.0, 17.0, 19.0, 21.0, 21.0, 21.0, 20.0, 20.0],
        female: values![-, -, 8.0, 10.0, 11.0, 13.0, 17.0, 18.0, 18.0, 18.0, 18.0, 17.0, 17.0],
    },
    NutrientTable {
        nutrient: Nutrient::Sodium,
        basis: DG,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![1.5, 3.0, 3.5, 4.5, 5.0, 6.0, 7.0, 7.5, 7.5, 7.5, 7.5, 7.5, 7.5],
        female: values![1.5, 3.0, 3.5, 4.5, 5.0, 6.0, 6.5, 6.5, 6.5, 6.5, 6.5, 6.5, 6.5],
    },
    NutrientTable {
        nutrient: Nutrient::Potassium,
        basis: AI,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![700.0, 900.0, 1000.0, 1300.0, 1500.0, 1800.0, 2300.0, 2700.0, 2500.0, 2500.0, 2500.0, 2500.0, 2500.0],
        female: values![700.0, 900.0, 1000.0, 1200.0, 1500.0, 1800.0, 1900.0, 2000.0, 2000.0, 2000.0, 2000.0, 2000.0, 2000.0],
    },
    NutrientTable {
        nutrient: Nutrient::Calcium,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![250.0, 450.0, 600.0, 600.0, 650.0, 700.0, 1000.0, 800.0, 800.0, 750.0, 750.0, 750.0, 700.0],
        female: values![250.0, 400.0, 550.0, 550.0, 750.0, 750.0, 800.0, 650.0, 650.0, 650.0, 650.0, 650.0, 600.0],
    },
    NutrientTable {
        nutrient: Nutrient::Phosphorus,
        basis: AI,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![260.0, 500.0, 700.0, 900.0, 1000.0, 1100.0, 1200.0, 1200.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0],
        female: values![260.0, 500.0, 700.0, 800.0, 1000.0, 1000.0, 1000.0, 900.0, 800.0, 800.0, 800.0, 800.0, 800.0],
    },
    NutrientTable {
        nutrient: Nutrient::Iron,
        basis: RDA,
        infant_basis: RDA,
        source: Source::Dri2020,
        male: values![5.0, 4.5, 5.5, 5.5, 7.0, 8.5, 10.0, 10.0, 7.5, 7.5, 7.5, 7.5, 7.0],
        // menstruating values up to 64, post-menopausal from 65
        female: values![4.5, 4.5, 5.5, 5.5, 7.5, 12.0, 12.0, 10.5, 10.5, 10.5, 11.0, 6.0, 6.0],
    },
    NutrientTable {
        nutrient: Nutrient::Zinc,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 10.0, 12.0, 11.0, 11.0, 11.0, 11.0, 10.0],
        female: values![3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    },
    NutrientTable {
        nutrient: Nutrient::Iodine,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![130.0, 50.0, 60.0, 75.0, 90.0, 110.0, 140.0, 140.0, 130.0, 130.0, 130.0, 130.0, 130.0],
        female: values![130.0, 50.0, 60.0, 75.0, 90.0, 110.0, 140.0, 140.0, 130.0, 130.0, 130.0, 130.0, 130.0],
    },
    NutrientTable {
        nutrient: Nutrient::Cholesterol,
        basis: UL,
        infant_basis: UL,
        source: Source::Dri2010,
        male: values![-, -, -, -, -, -, -, -, 750.0, 750.0, 750.0, 750.0, 750.0],
        female: values![-, -, -, -, -, -, -, -, 600.0, 600.0, 600.0, 600.0, 600.0],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminA,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![400.0, 400.0, 450.0, 400.0, 500.0, 600.0, 800.0, 900.0, 850.0, 900.0, 900.0, 850.0, 800.0],
        female: values![400.0, 350.0, 500.0, 400.0, 500.0, 600.0, 700.0, 650.0, 650.0, 700.0, 700.0, 700.0, 650.0],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminB1,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![0.2, 0.5, 0.7, 0.8, 1.0, 1.2, 1.4, 1.5, 1.4, 1.4, 1.3, 1.3, 1.2],
        female: values![0.2, 0.5, 0.7, 0.8, 0.9, 1.1, 1.3, 1.2, 1.1, 1.1, 1.1, 1.1, 0.9],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminB2,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![0.4, 0.6, 0.8, 0.9, 1.1, 1.4, 1.6, 1.7, 1.6, 1.6, 1.5, 1.5, 1.3],
        female: values![0.4, 0.5, 0.8, 0.9, 1.0, 1.3, 1.4, 1.4, 1.2, 1.2, 1.2, 1.2, 1.0],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminB6,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![0.3, 0.5, 0.6, 0.8, 0.9, 1.1, 1.4, 1.5, 1.4, 1.4, 1.4, 1.4, 1.4],
        female: values![0.3, 0.5, 0.6, 0.7, 0.9, 1.1, 1.3, 1.3, 1.1, 1.1, 1.1, 1.1, 1.1],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminB12,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![0.5, 0.9, 1.1, 1.3, 1.6, 1.9, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4],
        female: values![0.5, 0.9, 1.1, 1.3, 1.6, 1.9, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminC,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![40.0, 40.0, 50.0, 60.0, 70.0, 85.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
        female: values![40.0, 40.0, 50.0, 60.0, 70.0, 85.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminD,
        basis: AI,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![5.0, 3.0, 3.5, 4.5, 5.0, 6.5, 8.0, 9.0, 8.5, 8.5, 8.5, 8.5, 8.5],
        female: values![5.0, 3.5, 4.0, 5.0, 6.0, 8.0, 9.5, 8.5, 8.5, 8.5, 8.5, 8.5, 8.5],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminE,
        basis: AI,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![4.0, 3.0, 4.0, 5.0, 5.0, 5.5, 6.5, 7.0, 6.0, 6.0, 7.0, 7.0, 6.5],
        female: values![4.0, 3.0, 4.0, 5.0, 5.0, 5.5, 6.0, 5.5, 5.0, 5.5, 6.0, 6.5, 6.5],
    },
    NutrientTable {
        nutrient: Nutrient::VitaminK,
        basis: AI,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![7.0, 50.0, 60.0, 80.0, 90.0, 110.0, 140.0, 160.0, 150.0, 150.0, 150.0, 150.0, 150.0],
        female: values![7.0, 60.0, 70.0, 90.0, 110.0, 140.0, 170.0, 150.0, 150.0, 150.0, 150.0, 150.0, 150.0],
    },
    NutrientTable {
        nutrient: Nutrient::FolicAcid,
        basis: RDA,
        infant_basis: AI,
        source: Source::Dri2020,
        male: values![60.0, 90.0, 110.0, 140.0, 160.0, 190.0, 240.0, 240.0, 240.0, 240.0, 240.0, 240.0, 240.0],
        female: values![60.0, 90.0, 110.0, 140.0, 160.0, 190.0, 240.0, 240.0, 240.0, 240.0, 240.0, 240.0, 240.0],
    },
];

/// Additions on top of the base value while pregnant or nursing
///
/// Trimester is not captured on the profile, so the iron addition uses the
/// early-pregnancy figure.
pub(crate) static PREGNANCY_ADDITIONS: [(Nutrient, PregnancyStatus, f64); 20] = [
    (Nutrient::VitaminA, PregnancyStatus::Pregnant, 80.0),
    (Nutrient::VitaminA, PregnancyStatus::Nursing, 450.0),
    (Nutrient::VitaminB1, PregnancyStatus::Pregnant, 0.2),
    (Nutrient::VitaminB1, PregnancyStatus::Nursing, 0.2),
    (Nutrient::VitaminB2, PregnancyStatus::Pregnant, 0.3),
    (Nutrient::VitaminB2, PregnancyStatus::Nursing, 0.6),
    (Nutrient::VitaminB6, PregnancyStatus::Pregnant, 0.2),
    (Nutrient::VitaminB6, PregnancyStatus::Nursing, 0.3),
    (Nutrient::VitaminB12, PregnancyStatus::Pregnant, 0.4),
    (Nutrient::VitaminB12, PregnancyStatus::Nursing, 0.8),
    (Nutrient::FolicAcid, PregnancyStatus::Pregnant, 240.0),
    (Nutrient::FolicAcid, PregnancyStatus::Nursing, 100.0),
    (Nutrient::VitaminC, PregnancyStatus::Pregnant, 10.0),
    (Nutrient::VitaminC, PregnancyStatus::Nursing, 45.0),
    (Nutrient::Iodine, PregnancyStatus::Pregnant, 110.0),
    (Nutrient::Iodine, PregnancyStatus::Nursing, 140.0),
    (Nutrient::Iron, PregnancyStatus::Pregnant, 2.5),
    (Nutrient::Iron, PregnancyStatus::Nursing, 2.5),
    (Nutrient::Zinc, PregnancyStatus::Pregnant, 2.0),
    (Nutrient::Zinc, PregnancyStatus::Nursing, 4.0),
];
