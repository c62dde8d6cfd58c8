//! Display Formatting
//!
//! German-locale helpers for euro amounts and dates.

use chrono::{Datelike, NaiveDate};

const MONTHS_DE: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Format an amount as a euro string with German thousands grouping,
/// e.g. `1234.0` becomes `1.234 €`. Cents are shown only when present.
pub fn format_euro(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        out.push(',');
        out.push_str(&format!("{fraction:02}"));
    }
    out.push_str(" €");
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format an ISO date string as a German short date, e.g. `06. Aug 2026`.
///
/// Returns `None` when the input does not parse as `%Y-%m-%d`.
pub fn format_date_de(raw: &str) -> Option<String> {
    let date: NaiveDate = raw.parse().ok()?;
    Some(format!(
        "{:02}. {} {}",
        date.day(),
        MONTHS_DE[date.month0() as usize],
        date.year()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_euro_grouping() {
        assert_eq!(format_euro(0.0), "0 €");
        assert_eq!(format_euro(450.0), "450 €");
        assert_eq!(format_euro(1234.0), "1.234 €");
        assert_eq!(format_euro(1234567.0), "1.234.567 €");
    }

    #[test]
    fn test_format_euro_cents() {
        assert_eq!(format_euro(49.5), "49,50 €");
        assert_eq!(format_euro(19.99), "19,99 €");
    }

    #[test]
    fn test_format_date_de() {
        assert_eq!(format_date_de("2026-08-06").as_deref(), Some("06. Aug 2026"));
        assert_eq!(format_date_de("2026-12-24").as_deref(), Some("24. Dez 2026"));
        assert_eq!(format_date_de("not a date"), None);
    }
}
