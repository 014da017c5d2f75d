//! Period, category and text filters over normalized rides.
//!
//! Every operation is pure, keeps relative order, and returns a new
//! sequence, so filters can be chained in any order with the same result.

use std::collections::BTreeSet;

use chrono::Datelike;
use unicode_normalization::UnicodeNormalization;

use crate::{Money, NormalizedRide, RideCategory};

/// Category selection for the combined views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Delivery,
    Pickup,
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: RideCategory) -> bool {
        match self {
            Self::All => true,
            Self::Delivery => category == RideCategory::Delivery,
            Self::Pickup => category == RideCategory::Pickup,
        }
    }
}

/// Keeps rides dated in the given year and zero-based month.
///
/// Dates are naive calendar dates; there is no timezone involved. A ride
/// whose date does not parse belongs to no period.
#[must_use]
pub fn filter_by_period(rides: Vec<NormalizedRide>, year: i32, month0: u32) -> Vec<NormalizedRide> {
    rides
        .into_iter()
        .filter(|ride| {
            ride.calendar_date()
                .is_some_and(|date| date.year() == year && date.month0() == month0)
        })
        .collect()
}

#[must_use]
pub fn filter_by_category(rides: Vec<NormalizedRide>, filter: CategoryFilter) -> Vec<NormalizedRide> {
    rides
        .into_iter()
        .filter(|ride| filter.matches(ride.category))
        .collect()
}

/// Case-insensitive substring search over operator, detail and postal code
/// (when present). The query is trimmed; an empty query passes everything
/// through unchanged.
#[must_use]
pub fn search(rides: Vec<NormalizedRide>, query: &str) -> Vec<NormalizedRide> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return rides;
    }
    rides
        .into_iter()
        .filter(|ride| {
            fold(&ride.operator).contains(&needle)
                || fold(&ride.detail).contains(&needle)
                || ride
                    .postal_code
                    .as_deref()
                    .is_some_and(|plz| fold(plz).contains(&needle))
        })
        .collect()
}

/// Ascending, deduplicated years across both categories. Drives the year
/// navigation; rides with malformed dates contribute nothing.
#[must_use]
pub fn distinct_years(rides: &[NormalizedRide]) -> Vec<i32> {
    rides
        .iter()
        .filter_map(NormalizedRide::calendar_date)
        .map(|date| date.year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Ascending zero-based months of the given year holding at least one ride.
#[must_use]
pub fn months_with_data(rides: &[NormalizedRide], year: i32) -> Vec<u32> {
    rides
        .iter()
        .filter_map(NormalizedRide::calendar_date)
        .filter(|date| date.year() == year)
        .map(|date| date.month0())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sum of the unified price field.
#[must_use]
pub fn total(rides: &[NormalizedRide]) -> Money {
    rides.iter().map(|ride| ride.price).sum()
}

// Text folding for search: NFC so composed and decomposed umlauts compare
// equal, then lowercase.
fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(id: &str, date: &str, category: RideCategory, operator: &str) -> NormalizedRide {
        NormalizedRide {
            id: id.to_string(),
            category,
            date: date.to_string(),
            operator: operator.to_string(),
            detail: "Wien Süd".to_string(),
            postal_code: (category == RideCategory::Delivery).then(|| "1100".to_string()),
            stops: "5".to_string(),
            hours: (category == RideCategory::Pickup).then(|| "2".to_string()),
            price: Money::from_euros(20),
        }
    }

    fn sample() -> Vec<NormalizedRide> {
        vec![
            ride("1", "2025-03-01", RideCategory::Delivery, "Ivan"),
            ride("2", "2025-03-15", RideCategory::Pickup, "Marko"),
            ride("3", "2025-04-01", RideCategory::Delivery, "Ana"),
            ride("4", "2024-12-31", RideCategory::Pickup, "Ivan"),
            ride("5", "bogus", RideCategory::Delivery, "Ivan"),
        ]
    }

    #[test]
    fn period_filter_matches_year_and_month() {
        let march = filter_by_period(sample(), 2025, 2);
        assert_eq!(
            march.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["1", "2"]
        );
        assert!(filter_by_period(sample(), 2025, 11).is_empty());
    }

    #[test]
    fn malformed_dates_match_no_period() {
        let rides = filter_by_period(sample(), 2025, 2);
        assert!(rides.iter().all(|r| r.id != "5"));
    }

    #[test]
    fn category_filter_all_passes_everything() {
        assert_eq!(filter_by_category(sample(), CategoryFilter::All).len(), 5);
        let pickups = filter_by_category(sample(), CategoryFilter::Pickup);
        assert!(pickups.iter().all(|r| r.category == RideCategory::Pickup));
    }

    #[test]
    fn filters_commute() {
        for filter in [CategoryFilter::All, CategoryFilter::Delivery, CategoryFilter::Pickup] {
            let a = filter_by_category(filter_by_period(sample(), 2025, 2), filter);
            let b = filter_by_period(filter_by_category(sample(), filter), 2025, 2);
            assert_eq!(a, b);

            let c = search(filter_by_category(sample(), filter), "ivan");
            let d = filter_by_category(search(sample(), "ivan"), filter);
            assert_eq!(c, d);
        }
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let hits = search(sample(), "  IVAN ");
        assert_eq!(
            hits.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["1", "4", "5"]
        );
    }

    #[test]
    fn search_matches_detail_and_postal_code() {
        let by_detail = search(sample(), "süd");
        assert_eq!(by_detail.len(), 5);
        let by_plz = search(sample(), "1100");
        assert!(by_plz.iter().all(|r| r.category == RideCategory::Delivery));
    }

    #[test]
    fn empty_search_returns_input_unchanged() {
        let rides = sample();
        assert_eq!(search(rides.clone(), ""), rides);
        assert_eq!(search(rides.clone(), "   "), rides);
    }

    #[test]
    fn distinct_years_sorted_and_deduplicated() {
        let rides = vec![
            ride("1", "2024-01-01", RideCategory::Delivery, "A"),
            ride("2", "2024-06-01", RideCategory::Pickup, "B"),
            ride("3", "2023-12-31", RideCategory::Delivery, "C"),
        ];
        assert_eq!(distinct_years(&rides), [2023, 2024]);
        let years = distinct_years(&sample());
        assert_eq!(years, [2024, 2025]);
    }

    #[test]
    fn months_with_data_sorted_zero_based() {
        assert_eq!(months_with_data(&sample(), 2025), [2, 3]);
        assert_eq!(months_with_data(&sample(), 2024), [11]);
        assert!(months_with_data(&sample(), 2020).is_empty());
    }

    #[test]
    fn total_sums_unified_price() {
        assert_eq!(total(&sample()), Money::from_euros(100));
        assert_eq!(total(&[]), Money::ZERO);
    }
}
