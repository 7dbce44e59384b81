// Derived metrics folded out of a city data snapshot
use crate::models::CityData;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-category sums, widened to `i128` so no set of `i64` counters can
/// overflow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceBreakdown {
    pub food: i128,
    pub medical: i128,
    pub shelter: i128,
}

impl ResourceBreakdown {
    pub fn total(&self) -> i128 {
        self.food + self.medical + self.shelter
    }
}

/// Sum of every food, medical and shelter counter across all cities.
/// Missing counters and missing `resources` contribute zero; negative
/// counters are summed as-is.
pub fn total_resources(cities: &CityData) -> i128 {
    cities.values().map(|record| record.resource_total()).sum()
}

pub fn resource_breakdown(cities: &CityData) -> ResourceBreakdown {
    cities
        .values()
        .filter_map(|record| record.resources.as_ref())
        .fold(ResourceBreakdown::default(), |acc, resources| ResourceBreakdown {
            food: acc.food + i128::from(resources.food_or_zero()),
            medical: acc.medical + i128::from(resources.medical_or_zero()),
            shelter: acc.shelter + i128::from(resources.shelter_or_zero()),
        })
}

/// Cities per disaster type; untyped cities are counted under "Unknown".
pub fn disaster_type_counts(cities: &CityData) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in cities.values() {
        let label = record
            .disaster_type
            .as_ref()
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Groups digits in threes: 2250 -> "2,250".
pub fn format_count(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityRecord, Resources, seed_cities};

    #[test]
    fn test_seed_total_and_breakdown() {
        let seed = seed_cities();
        assert_eq!(total_resources(&seed), 2250);

        let breakdown = resource_breakdown(&seed);
        assert_eq!(breakdown, ResourceBreakdown { food: 1500, medical: 450, shelter: 300 });
        assert_eq!(breakdown.total(), total_resources(&seed));
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let mut cities = CityData::new();
        cities.insert(
            "A".to_string(),
            CityRecord { resources: Some(Resources { food: Some(5), ..Default::default() }), ..Default::default() },
        );
        cities.insert("B".to_string(), CityRecord::default());
        assert_eq!(total_resources(&cities), 5);
        assert_eq!(total_resources(&CityData::new()), 0);
    }

    #[test]
    fn test_disaster_type_counts() {
        let mut cities = seed_cities();
        cities.insert("NewCity".to_string(), CityRecord::default());
        let counts = disaster_type_counts(&cities);
        assert_eq!(counts.get("Cyclone"), Some(&1));
        assert_eq!(counts.get("Unknown"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_totals_past_i64_range() {
        let mut cities = CityData::new();
        cities.insert(
            "X".to_string(),
            CityRecord { resources: Some(Resources::new(i64::MAX, 1, 0)), ..Default::default() },
        );
        cities.insert(
            "Y".to_string(),
            CityRecord { resources: Some(Resources::new(i64::MAX, 0, 0)), ..Default::default() },
        );

        let expected = 2 * i128::from(i64::MAX) + 1;
        assert_eq!(total_resources(&cities), expected);
        assert_eq!(resource_breakdown(&cities).food, 2 * i128::from(i64::MAX));
        assert_eq!(resource_breakdown(&cities).total(), expected);
        assert_eq!(format_count(i128::from(i64::MAX) + 1), "9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2250), "2,250");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-4500), "-4,500");
    }
}
