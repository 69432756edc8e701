//! Numeric equality and canonical encoding helpers.
//!
//! Floating-point values drift under chained division, so equality is always
//! tolerance-based, and any value that feeds a hash is first quantized to a
//! fixed number of decimal digits.

/// Tolerance-based float equality.
///
/// Returns `true` iff `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
/// NaN is never close to anything. Infinities are close only to themselves.
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// Round `value` to `digits` decimal digits and return the scaled integer.
///
/// `quantize(2.6666666666, 6) == 2_666_667`. Halves round away from zero.
/// Both signed zeros map to `0`, and NaN maps to `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(value: f64, digits: u32) -> i64 {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * scale).round() as i64
}

/// Encode a numeric multiset canonically.
///
/// Each value is quantized to `digits` decimal digits, the quantized values
/// are sorted ascending, and the result is written as
/// `count_le_u64 || value_le_i64 * count`. Two inputs that are permutations of
/// each other (after rounding) produce identical bytes.
#[must_use]
pub fn canonical_value_bytes(values: impl IntoIterator<Item = f64>, digits: u32) -> Vec<u8> {
    let mut quantized: Vec<i64> = values.into_iter().map(|v| quantize(v, digits)).collect();
    quantized.sort_unstable();

    let mut out = Vec::with_capacity(8 + quantized.len() * 8);
    out.extend_from_slice(&(quantized.len() as u64).to_le_bytes());
    for q in quantized {
        out.extend_from_slice(&q.to_le_bytes());
    }
    out
}
