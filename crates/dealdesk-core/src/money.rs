//! Money helpers
//!
//! All amounts are plain `f64` values in a single implied currency. Rounding
//! happens only when a value leaves the engine.

/// Round to the nearest integer, halves away from zero (`2.5 -> 3`, `-2.5 -> -3`)
pub fn round_half_away(value: f64) -> i64 {
    // f64::round already rounds halves away from zero
    value.round() as i64
}

/// Format an amount as whole dollars with thousands separators (`$12,500`)
pub fn format_currency(amount: f64) -> String {
    let rounded = round_half_away(amount);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
