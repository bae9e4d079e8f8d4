//! Q12 fixed-point arithmetic.
//!
//! Values are `i64` with 12 fractional bits, so `1.0` is `4096`. All
//! operations truncate; none of them round.

/// A Q12 fixed-point number.
pub type Q12 = i64;

/// Number of fractional bits.
pub const Q12_SHIFT: u32 = 12;

/// `1.0` in Q12.
pub const Q12_ONE: Q12 = 1 << Q12_SHIFT;

/// Converts an integer to Q12.
#[inline]
pub const fn to_q12(n: i64) -> Q12 {
    n << Q12_SHIFT
}

/// Multiplies two Q12 values, truncating the result.
#[inline]
pub const fn mul_q12(a: Q12, b: Q12) -> Q12 {
    (a * b) >> Q12_SHIFT
}

/// Divides two Q12 values, truncating toward zero.
///
/// # Panics
/// Panics if `b` is zero.
#[inline]
pub const fn div_q12(a: Q12, b: Q12) -> Q12 {
    (a << Q12_SHIFT) / b
}

/// Bounds `v` to `[lo, hi]`.
///
/// Unlike [`Ord::clamp`] this never panics: with `lo > hi` the result is `hi`.
#[inline]
pub fn clamp(v: i64, lo: i64, hi: i64) -> i64 {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_q12_round_trips() {
        for n in [-100_000, -1, 0, 1, 7, 320, 1 << 40] {
            assert_eq!(to_q12(n) >> Q12_SHIFT, n);
        }
    }

    #[test]
    fn test_mul_by_one_is_identity() {
        for a in [-50, 0, 3, 12_345] {
            assert_eq!(mul_q12(to_q12(a), to_q12(1)), to_q12(a));
        }
    }

    #[test]
    fn test_mul_fractions() {
        // 0.5 * 0.5 = 0.25
        assert_eq!(mul_q12(Q12_ONE / 2, Q12_ONE / 2), Q12_ONE / 4);
    }

    #[test]
    fn test_div_truncates() {
        // 1 / 3 = 1365.33.. in Q12
        assert_eq!(div_q12(to_q12(1), to_q12(3)), 1365);
        // Negative quotients truncate toward zero
        assert_eq!(div_q12(to_q12(-1), to_q12(3)), -1365);
        assert_eq!(div_q12(to_q12(10), to_q12(100)), 409);
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_panics() {
        let zero = std::hint::black_box(0);
        div_q12(Q12_ONE, zero);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5, 0, 31), 0);
        assert_eq!(clamp(17, 0, 31), 17);
        assert_eq!(clamp(4096, 0, 31), 31);
        assert_eq!(clamp(5, 10, 0), 0);
    }
}
