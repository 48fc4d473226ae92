use rust_decimal::{Decimal, RoundingStrategy};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;

/// `"1h 30m"`, `"45m"`, or `"0h 0m"` for nothing tracked.
pub fn format_duration(milliseconds: i64) -> String {
    if milliseconds <= 0 {
        return "0h 0m".to_string();
    }
    let hours = milliseconds / MS_PER_HOUR;
    let minutes = (milliseconds % MS_PER_HOUR) / MS_PER_MINUTE;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// USD with thousands separators and two decimals, e.g. `$12,450.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction:0<2}")
}
