//! Monthly report payloads for the document renderer.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    CategoryFilter, DeliveryRecord, Money, NormalizedRide, PickupRecord,
    aggregate::{filter_by_category, filter_by_period, total},
    rides::{chronological, normalize},
};

const CELL: &str = "border: 1px solid #000; padding: 6px;";

/// Structured report for one (year, zero-based month) bucket.
///
/// The engine's responsibility ends here; turning the payload into a PDF or
/// a mail attachment is the rendering collaborator's business. Empty `rows`
/// means "no data for this period", not an error.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub year: i32,
    pub month0: u32,
    /// Ascending by date.
    pub rows: Vec<NormalizedRide>,
    pub total: Money,
}

impl Report {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the report as the HTML table the share/print collaborator
    /// consumes. The caller provides the localized heading.
    #[must_use]
    pub fn to_html(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str("<html><body style=\"font-family: Arial; padding: 20px;\">");
        let _ = write!(html, "<h2>{}</h2>", escape(title));
        html.push_str("<table style=\"width: 100%; border-collapse: collapse;\">");
        html.push_str("<tr style=\"background-color: #002b7f; color: #ffd700;\">");
        for header in ["Datum", "Typ", "Fahrer", "Route", "PLZ", "Stopps", "Preis"] {
            let _ = write!(html, "<th style=\"{CELL}\">{header}</th>");
        }
        html.push_str("</tr>");
        for row in &self.rows {
            let price = row.price.to_string();
            html.push_str("<tr>");
            for cell in [
                row.date.as_str(),
                row.category.as_str(),
                row.operator.as_str(),
                row.detail.as_str(),
                row.postal_code_or_dash(),
                row.stops.as_str(),
                price.as_str(),
            ] {
                let _ = write!(html, "<td style=\"{CELL}\">{}</td>", escape(cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        let _ = write!(html, "<h3>Gesamt: {}</h3>", self.total);
        html.push_str("</body></html>");
        html
    }
}

/// Builds the report for one period: normalize, filter, sort ascending, sum.
#[must_use]
pub fn build_report(
    deliveries: &[DeliveryRecord],
    pickups: &[PickupRecord],
    year: i32,
    month0: u32,
    filter: CategoryFilter,
) -> Report {
    let rides = normalize(deliveries, pickups);
    let rides = filter_by_period(rides, year, month0);
    let rows = chronological(filter_by_category(rides, filter));
    let total = total(&rows);
    Report {
        year,
        month0,
        rows,
        total,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
