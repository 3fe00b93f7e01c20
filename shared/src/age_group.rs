//! Age group resolution
//!
//! Reference values are published per age bucket. Both bucket boundaries are
//! inclusive and any integer age maps to a bucket: ages below the first bucket
//! clamp to it, ages above the last clamp to "75+".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bucket used to index reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "6-11m")]
    Months6To11,
    #[serde(rename = "1-2")]
    Years1To2,
    #[serde(rename = "3-5")]
    Years3To5,
    #[serde(rename = "6-7")]
    Years6To7,
    #[serde(rename = "8-9")]
    Years8To9,
    #[serde(rename = "10-11")]
    Years10To11,
    #[serde(rename = "12-14")]
    Years12To14,
    #[serde(rename = "15-17")]
    Years15To17,
    #[serde(rename = "18-29")]
    Years18To29,
    #[serde(rename = "30-49")]
    Years30To49,
    #[serde(rename = "50-64")]
    Years50To64,
    #[serde(rename = "65-74")]
    Years65To74,
    #[serde(rename = "75+")]
    Years75Plus,
}

/// Ordered bucket boundaries in whole years, inclusive on both ends
const BOUNDARIES: [(AgeGroup, i32, i32); 13] = [
    (AgeGroup::Months6To11, 0, 0),
    (AgeGroup::Years1To2, 1, 2),
    (AgeGroup::Years3To5, 3, 5),
    (AgeGroup::Years6To7, 6, 7),
    (AgeGroup::Years8To9, 8, 9),
    (AgeGroup::Years10To11, 10, 11),
    (AgeGroup::Years12To14, 12, 14),
    (AgeGroup::Years15To17, 15, 17),
    (AgeGroup::Years18To29, 18, 29),
    (AgeGroup::Years30To49, 30, 49),
    (AgeGroup::Years50To64, 50, 64),
    (AgeGroup::Years65To74, 65, 74),
    (AgeGroup::Years75Plus, 75, i32::MAX),
];

impl AgeGroup {
    pub const COUNT: usize = BOUNDARIES.len();

    /// All buckets in ascending order
    pub fn all() -> impl Iterator<Item = AgeGroup> {
        BOUNDARIES.iter().map(|(group, _, _)| *group)
    }

    /// Resolve an age in whole years to its bucket
    pub fn from_age(age_years: i32) -> AgeGroup {
        BOUNDARIES
            .iter()
            .find(|(_, min, max)| (*min..=*max).contains(&age_years))
            .map(|(group, _, _)| *group)
            .unwrap_or(AgeGroup::Months6To11)
    }

    /// Position of this bucket in the ordered table
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this bucket covers infants
    pub fn is_infant(&self) -> bool {
        matches!(self, AgeGroup::Months6To11)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Months6To11 => "6-11m",
            AgeGroup::Years1To2 => "1-2",
            AgeGroup::Years3To5 => "3-5",
            AgeGroup::Years6To7 => "6-7",
            AgeGroup::Years8To9 => "8-9",
            AgeGroup::Years10To11 => "10-11",
            AgeGroup::Years12To14 => "12-14",
            AgeGroup::Years15To17 => "15-17",
            AgeGroup::Years18To29 => "18-29",
            AgeGroup::Years30To49 => "30-49",
            AgeGroup::Years50To64 => "50-64",
            AgeGroup::Years65To74 => "65-74",
            AgeGroup::Years75Plus => "75+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "6-11m")]
    #[case(1, "1-2")]
    #[case(2, "1-2")]
    #[case(3, "3-5")]
    #[case(17, "15-17")]
    #[case(18, "18-29")]
    #[case(29, "18-29")]
    #[case(30, "30-49")]
    #[case(49, "30-49")]
    #[case(50, "50-64")]
    #[case(64, "50-64")]
    #[case(65, "65-74")]
    #[case(75, "75+")]
    #[case(100, "75+")]
    fn test_age_boundaries(#[case] age: i32, #[case] expected: &str) {
        assert_eq!(AgeGroup::from_age(age).label(), expected);
    }

    #[test]
    fn test_out_of_range_ages_clamp() {
        assert_eq!(AgeGroup::from_age(-5), AgeGroup::Months6To11);
        assert_eq!(AgeGroup::from_age(i32::MIN), AgeGroup::Months6To11);
        assert_eq!(AgeGroup::from_age(i32::MAX), AgeGroup::Years75Plus);
    }

    #[test]
    fn test_index_follows_table_order() {
        for (position, group) in AgeGroup::all().enumerate() {
            assert_eq!(group.index(), position);
        }
        assert_eq!(AgeGroup::all().count(), AgeGroup::COUNT);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&AgeGroup::Years18To29).unwrap();
        assert_eq!(json, "\"18-29\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Resolution never decreases as age increases
        #[test]
        fn prop_buckets_monotonic(a in -10i32..150, b in -10i32..150) {
            let (young, old) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(AgeGroup::from_age(young) <= AgeGroup::from_age(old));
        }
    }
}
