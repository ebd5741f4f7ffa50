//! Raw metric to 0-100 dimension scales.

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Logarithmic compression of a raw count onto 0-100.
///
/// `log(1 + v) / log(1 + cap)` reaches 1.0 at the cap and keeps growing past
/// it, so the clamp is what saturates outliers at 100.
pub fn log_scale(value: f64, cap: f64) -> u8 {
    let v = clamp(value, 0.0, f64::MAX);
    let c = if cap.is_nan() { 1.0 } else { cap.max(1.0) };
    let ratio = v.ln_1p() / c.ln_1p();
    clamp(ratio * 100.0, 0.0, 100.0).round() as u8
}

/// Linear blend of the long-form and media ratios, both already in `[0, 1]`.
pub fn style_score(long_ratio: f64, media_ratio: f64) -> u8 {
    clamp(long_ratio * 55.0 + media_ratio * 45.0, 0.0, 100.0).round() as u8
}
