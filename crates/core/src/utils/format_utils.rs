use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero, the way amounts are shown to users.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts `,` between groups of three digits: `2350000` -> `2,350,000`.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `value` with thousands separators and exactly `dp` fraction digits.
pub fn format_grouped(value: Decimal, dp: u32) -> String {
    let rounded = round_half_up(value, dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let whole = abs.trunc().to_u128().unwrap_or_default();
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&whole.to_string()));

    if dp > 0 {
        let fraction = format!("{:.*}", dp as usize, abs.fract());
        // "0.50" -> ".50"
        out.push_str(fraction.trim_start_matches('0'));
    }
    out
}
