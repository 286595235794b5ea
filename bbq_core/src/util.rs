//! Small numeric helpers shared across the kernel, stall model, and
//! Monte Carlo aggregation. Kept free of domain types so they stay
//! trivially unit-testable.

/// Standard logistic function.
#[inline]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Round `x` to `decimals` decimal places (half away from zero).
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Linear-interpolated percentile over an already-sorted slice, using
/// the same "nearest rank via linear interpolation" convention as
/// NumPy's default `percentile`.
///
/// Panics only if `sorted` is empty; callers are expected to have
/// checked for that case already (the percentile of an empty sample
/// set is not a meaningful finish time).
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of empty sample set");
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
