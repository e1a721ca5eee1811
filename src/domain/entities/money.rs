//! Price formatting helpers.

/// Formats an amount in cents as dollars, e.g. `1890` → `$18.90`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}
