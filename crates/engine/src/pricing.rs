//! Static price tables for deliveries and the pickup hourly rate.
//!
//! Lookups are total: an unknown postal code or stop count contributes
//! nothing instead of failing, so a ride can always be entered.

use crate::Money;

/// Rate per started hour for pickup tours.
pub const HOURLY_RATE: Money = Money::from_euros(30);

/// Base price per destination postal code, in cents.
static POSTAL_CODE_PRICES: &[(&str, i64)] = &[
    ("1010", 18_50),
    ("1020", 17_00),
    ("1030", 17_00),
    ("1040", 16_50),
    ("1050", 16_50),
    ("1060", 16_00),
    ("1070", 16_00),
    ("1080", 16_00),
    ("1090", 16_50),
    ("1100", 17_50),
    ("1110", 18_00),
    ("1120", 17_00),
    ("1130", 18_00),
    ("1140", 17_50),
    ("1150", 16_50),
    ("1160", 17_00),
    ("1170", 17_50),
    ("1180", 17_50),
    ("1190", 18_50),
    ("1200", 17_00),
    ("1210", 19_00),
    ("1220", 19_50),
    ("1230", 19_00),
    ("2100", 24_00),
    ("2320", 22_00),
    ("2331", 21_00),
    ("2340", 23_00),
    ("2351", 22_50),
    ("3100", 35_00),
];

/// Surcharge per number of stops on the tour, in cents.
static STOP_PRICES: &[(&str, i64)] = &[
    ("1", 3_00),
    ("2", 5_50),
    ("3", 8_00),
    ("4", 10_00),
    ("5", 12_00),
    ("6", 14_00),
    ("7", 15_50),
    ("8", 17_00),
    ("9", 18_50),
    ("10", 20_00),
    ("12", 23_00),
    ("15", 27_50),
    ("20", 35_00),
];

fn lookup(table: &[(&str, i64)], key: &str) -> Money {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map_or(Money::ZERO, |&(_, cents)| Money::from_cents(cents))
}

#[must_use]
pub fn postal_code_price(postal_code: &str) -> Money {
    lookup(POSTAL_CODE_PRICES, postal_code.trim())
}

#[must_use]
pub fn stop_price(stops: &str) -> Money {
    lookup(STOP_PRICES, stops.trim())
}

/// Price of a delivery: postal code base plus stop surcharge.
#[must_use]
pub fn delivery_price(postal_code: &str, stops: &str) -> Money {
    postal_code_price(postal_code) + stop_price(stops)
}

/// Price of a pickup tour: hours worked times [`HOURLY_RATE`].
///
/// The hour field is free text coming from a form and is parsed the way the
/// app always did: leading digits count, anything else is zero.
#[must_use]
pub fn pickup_price(hours: &str) -> Money {
    Money::from_cents(leading_int(hours).saturating_mul(HOURLY_RATE.cents()))
}

fn leading_int(value: &str) -> i64 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_price_sums_both_tables() {
        let expected = postal_code_price("1010") + stop_price("5");
        assert_eq!(delivery_price("1010", "5"), expected);
        assert_eq!(delivery_price("1010", "5"), Money::from_cents(30_50));
    }

    #[test]
    fn unknown_keys_contribute_zero() {
        assert_eq!(postal_code_price("9999"), Money::ZERO);
        assert_eq!(stop_price("999"), Money::ZERO);
        assert_eq!(delivery_price("9999", "5"), stop_price("5"));
        assert_eq!(delivery_price("1010", "999"), postal_code_price("1010"));
        assert_eq!(delivery_price("", ""), Money::ZERO);
    }

    #[test]
    fn lookup_is_deterministic() {
        assert_eq!(delivery_price("1220", "3"), delivery_price("1220", "3"));
    }

    #[test]
    fn pickup_price_is_hours_times_rate() {
        assert_eq!(pickup_price("3"), Money::from_euros(90));
        assert_eq!(pickup_price("0"), Money::ZERO);
        assert_eq!(pickup_price("abc"), Money::ZERO);
    }

    #[test]
    fn pickup_price_takes_leading_digits() {
        // parseInt semantics: "2.5" reads as 2, whitespace is trimmed.
        assert_eq!(pickup_price("2.5"), Money::from_euros(60));
        assert_eq!(pickup_price(" 4 "), Money::from_euros(120));
        assert_eq!(pickup_price(""), Money::ZERO);
    }

    #[test]
    fn pickup_price_saturates_on_huge_hours() {
        // Hour counts near i64::MAX must not overflow the cents
        // multiplication; too many digits to parse at all read as zero.
        assert_eq!(
            pickup_price("9223372036854775"),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(pickup_price("99999999999999999999"), Money::ZERO);
    }
}
