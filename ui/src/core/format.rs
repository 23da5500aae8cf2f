//! Formatting helpers for presenting metrics.

use super::dataset::Value;

/// Shown in place of any value that is not a finite number.
pub const PLACEHOLDER: &str = "—";

/// Three decimals for finite numbers, the placeholder glyph otherwise.
pub fn format_metric(value: Option<&Value>) -> String {
    match value.and_then(Value::as_number) {
        Some(number) => format_number(number),
        None => PLACEHOLDER.to_string(),
    }
}

/// Three decimals, halves rounded away from zero; negative zero prints unsigned.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", fixed3(value.abs()))
}

/// An exact tie at the fourth decimal is an odd multiple of 1/16; `{:.3}`
/// would round it to even.
fn fixed3(magnitude: f64) -> String {
    let sixteenths = magnitude * 16.0;
    if magnitude < 1e12 && sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        let thousandths = (magnitude * 1000.0).ceil() as u64;
        return format!("{}.{:03}", thousandths / 1000, thousandths % 1000);
    }
    format!("{magnitude:.3}")
}
