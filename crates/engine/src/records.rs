//! Persisted ride records.
//!
//! Two record kinds exist side by side: deliveries ("Zustellung") priced by
//! postal code and stop count, and pickups ("Abholung") priced by the hour.
//! Field names on the wire match the blobs the mobile app has been writing
//! all along (`plz`, `fahrer`, `details`, `euro`), so old data keeps loading.
//!
//! Prices are computed once, when the record is created, and stored. Table
//! changes never touch rides that were already logged.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Money, pricing};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A delivery tour. Persisted under the `"rides"` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Creation-time id, a millisecond timestamp string. Unique within the
    /// collection only.
    pub id: String,
    /// Naive calendar date, ISO `YYYY-MM-DD`.
    pub date: String,
    pub driver: String,
    pub route: String,
    #[serde(rename = "plz")]
    pub postal_code: String,
    pub stops: String,
    /// `postal_code_price + stop_price`, fixed at creation.
    pub price: Money,
}

impl DeliveryRecord {
    #[must_use]
    pub fn new(date: NaiveDate, driver: &str, route: &str, postal_code: &str, stops: &str) -> Self {
        Self {
            id: next_id(),
            date: date.format(DATE_FORMAT).to_string(),
            driver: driver.to_string(),
            route: route.to_string(),
            postal_code: postal_code.to_string(),
            stops: stops.to_string(),
            price: pricing::delivery_price(postal_code, stops),
        }
    }
}

/// A pickup tour. Persisted under the `"abholungen"` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickupRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "fahrer")]
    pub operator: String,
    #[serde(rename = "details")]
    pub description: String,
    /// Number of addresses; informational, not priced.
    pub stops: String,
    pub hours: String,
    #[serde(rename = "euro")]
    pub price: Money,
    /// Discriminant the app wrote into every pickup blob.
    #[serde(rename = "type", default = "pickup_tag")]
    pub tag: String,
}

impl PickupRecord {
    #[must_use]
    pub fn new(date: NaiveDate, operator: &str, description: &str, stops: &str, hours: &str) -> Self {
        Self {
            id: next_id(),
            date: date.format(DATE_FORMAT).to_string(),
            operator: operator.to_string(),
            description: description.to_string(),
            stops: stops.to_string(),
            hours: hours.to_string(),
            price: pricing::pickup_price(hours),
            tag: pickup_tag(),
        }
    }
}

fn pickup_tag() -> String {
    "Abholung".to_string()
}

fn next_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
