//! Ride aggregation and reporting engine for the Fahrtenbuch courier app.
//!
//! Drivers log two kinds of tours: deliveries ("Zustellung"), priced by
//! destination postal code and stop count, and pickups ("Abholung"), priced
//! by the hour. The engine computes prices at record creation from static
//! lookup tables ([`pricing`]), merges both collections into one normalized
//! sequence ([`normalize`]), filters it by period, category and free text,
//! and produces monthly [`Report`] payloads for an external document
//! renderer.
//!
//! Persistence is an opaque key-value blob store behind [`BlobStore`]; the
//! [`RideStore`] adapter is the only asynchronous seam. Everything else is
//! pure and operates on data already in memory.

pub use aggregate::{
    CategoryFilter, distinct_years, filter_by_category, filter_by_period, months_with_data,
    search, total,
};
pub use error::EngineError;
pub use money::Money;
pub use records::{DeliveryRecord, PickupRecord};
pub use report::{Report, build_report};
pub use rides::{DASH, NormalizedRide, RideCategory, chronological, normalize, recent_first};
pub use store::{BlobStore, FileStore, RideStore};

mod aggregate;
mod error;
mod money;
pub mod pricing;
mod records;
mod report;
mod rides;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
