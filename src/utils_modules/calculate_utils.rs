use crate::common::*;

#[doc = "Function that rounds a float to the given number of decimal places."]
pub fn get_decimal_round_conversion(value: f64, decimal: i32) -> f64 {
    let factor: f64 = 10f64.powi(decimal);
    (value * factor).round() / factor
}

#[doc = "Function that converts a difference against its baseline into a percentage."]
/// # Arguments
/// * `diff`     - after - before difference
/// * `baseline` - before value
///
/// # Returns
/// * f64 - 0.0 when the baseline is 0 so the comparison never divides by zero
pub fn get_diff_percentage(diff: i64, baseline: i64) -> f64 {
    if baseline == 0 {
        warn!("[get_diff_percentage] baseline is zero, returning 0");
        return 0.0;
    }

    get_decimal_round_conversion((diff as f64 / baseline as f64) * 100.0, 2)
}
