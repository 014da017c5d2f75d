//! Merging the two record shapes into one uniform ride sequence.
//!
//! The delivery/pickup field mapping (`driver` vs `fahrer`, `route` vs
//! `details`, `price` vs `euro`) is resolved here, once. Everything
//! downstream — filters, search, reports — reads the unified fields and
//! never looks at the category to pick a field name.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{DeliveryRecord, Money, PickupRecord, records::DATE_FORMAT};

/// Placeholder for fields a category does not carry.
pub const DASH: &str = "-";

/// Which collection a normalized ride came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RideCategory {
    Delivery,
    Pickup,
}

impl RideCategory {
    /// Display name, as the app has always labelled the two tour kinds.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivery => "Zustellung",
            Self::Pickup => "Abholung",
        }
    }
}

impl fmt::Display for RideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform view over a delivery or pickup record.
///
/// Ephemeral: derived for filtering and reporting, never persisted. Text
/// fields are dash-resolved so no empty value leaks into presentation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedRide {
    pub id: String,
    pub category: RideCategory,
    pub date: String,
    pub operator: String,
    pub detail: String,
    /// `None` for pickups, which have no destination postal code.
    pub postal_code: Option<String>,
    pub stops: String,
    /// Only pickups carry an hour count.
    pub hours: Option<String>,
    /// Unified price: `price` for deliveries, `euro` for pickups.
    pub price: Money,
}

impl NormalizedRide {
    /// Calendar date, if the stored string parses.
    ///
    /// The engine never fails on a malformed date; such rides simply fall
    /// outside every period bucket.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    #[must_use]
    pub fn postal_code_or_dash(&self) -> &str {
        self.postal_code.as_deref().unwrap_or(DASH)
    }
}

/// One normalized ride per input record, deliveries first, input order kept.
#[must_use]
pub fn normalize(deliveries: &[DeliveryRecord], pickups: &[PickupRecord]) -> Vec<NormalizedRide> {
    let mut rides = Vec::with_capacity(deliveries.len() + pickups.len());
    for record in deliveries {
        rides.push(NormalizedRide {
            id: record.id.clone(),
            category: RideCategory::Delivery,
            date: record.date.clone(),
            operator: or_dash(&record.driver),
            detail: or_dash(&record.route),
            postal_code: (!record.postal_code.trim().is_empty())
                .then(|| record.postal_code.clone()),
            stops: record.stops.clone(),
            hours: None,
            price: record.price,
        });
    }
    for record in pickups {
        rides.push(NormalizedRide {
            id: record.id.clone(),
            category: RideCategory::Pickup,
            date: record.date.clone(),
            operator: or_dash(&record.operator),
            detail: or_dash(&record.description),
            postal_code: None,
            stops: record.stops.clone(),
            hours: Some(record.hours.clone()),
            price: record.price,
        });
    }
    rides
}

/// Most recent date first; the all-rides view. Stable on equal dates,
/// malformed dates sink to the end.
#[must_use]
pub fn recent_first(mut rides: Vec<NormalizedRide>) -> Vec<NormalizedRide> {
    rides.sort_by(|a, b| b.calendar_date().cmp(&a.calendar_date()));
    rides
}

/// Oldest date first; the monthly/report view. Stable on equal dates,
/// malformed dates float to the front.
#[must_use]
pub fn chronological(mut rides: Vec<NormalizedRide>) -> Vec<NormalizedRide> {
    rides.sort_by_key(NormalizedRide::calendar_date);
    rides
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        DASH.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing;

    fn delivery(id: &str, date: &str, driver: &str) -> DeliveryRecord {
        DeliveryRecord {
            id: id.to_string(),
            date: date.to_string(),
            driver: driver.to_string(),
            route: "Wien Süd".to_string(),
            postal_code: "1100".to_string(),
            stops: "5".to_string(),
            price: pricing::delivery_price("1100", "5"),
        }
    }

    fn pickup(id: &str, date: &str, operator: &str) -> PickupRecord {
        PickupRecord {
            id: id.to_string(),
            date: date.to_string(),
            operator: operator.to_string(),
            description: "Lager".to_string(),
            stops: "4".to_string(),
            hours: "2".to_string(),
            price: pricing::pickup_price("2"),
            tag: "Abholung".to_string(),
        }
    }

    #[test]
    fn one_output_per_input() {
        let deliveries = [delivery("1", "2025-03-01", "Ivan")];
        let pickups = [pickup("2", "2025-03-02", "Marko"), pickup("3", "2025-03-03", "Ana")];
        let rides = normalize(&deliveries, &pickups);
        assert_eq!(rides.len(), deliveries.len() + pickups.len());
    }

    #[test]
    fn field_mapping_is_unified() {
        let rides = normalize(
            &[delivery("1", "2025-03-01", "Ivan")],
            &[pickup("2", "2025-03-02", "Marko")],
        );

        let d = &rides[0];
        assert_eq!(d.category, RideCategory::Delivery);
        assert_eq!(d.operator, "Ivan");
        assert_eq!(d.detail, "Wien Süd");
        assert_eq!(d.postal_code_or_dash(), "1100");
        assert!(d.hours.is_none());

        let p = &rides[1];
        assert_eq!(p.category, RideCategory::Pickup);
        assert_eq!(p.operator, "Marko");
        assert_eq!(p.detail, "Lager");
        assert_eq!(p.postal_code, None);
        assert_eq!(p.postal_code_or_dash(), DASH);
        assert_eq!(p.price, Money::from_euros(60));
    }

    #[test]
    fn blank_fields_become_dashes() {
        let mut record = delivery("1", "2025-03-01", "  ");
        record.route = String::new();
        record.postal_code = " ".to_string();
        let rides = normalize(&[record], &[]);
        assert_eq!(rides[0].operator, DASH);
        assert_eq!(rides[0].detail, DASH);
        assert_eq!(rides[0].postal_code, None);
    }

    #[test]
    fn orderings_are_stable_on_ties() {
        let rides = normalize(
            &[delivery("a", "2025-03-02", "Ivan"), delivery("b", "2025-03-02", "Ana")],
            &[pickup("c", "2025-03-01", "Marko")],
        );

        let recent = recent_first(rides.clone());
        assert_eq!(
            recent.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );

        let asc = chronological(rides);
        assert_eq!(
            asc.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["c", "a", "b"]
        );
    }

    #[test]
    fn malformed_dates_do_not_panic() {
        let rides = normalize(
            &[delivery("bad", "not-a-date", "Ivan"), delivery("ok", "2025-03-01", "Ana")],
            &[],
        );
        assert!(rides[0].calendar_date().is_none());

        let recent = recent_first(rides.clone());
        assert_eq!(recent.last().map(|r| r.id.as_str()), Some("bad"));
        let asc = chronological(rides);
        assert_eq!(asc.first().map(|r| r.id.as_str()), Some("bad"));
    }
}
