//! Integer magnitude extraction
//!
//! Everything here stays in integer arithmetic: no floating-point square root.

use num_complex::Complex;

/// Floor of the square root of `x`
///
/// Digit-by-digit (binary restoring) method, two bits of `x` per step.
pub fn isqrt(x: u128) -> u64 {
    let mut rem = x;
    let mut root: u128 = 0;

    // Highest power of four not exceeding x
    let mut bit: u128 = 1 << 126;
    while bit > rem {
        bit >>= 2;
    }

    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    root as u64
}

/// Squared norm `re² + im²` without overflow
#[inline]
pub fn norm_sqr(bin: Complex<i64>) -> u128 {
    let re = u128::from(bin.re.unsigned_abs());
    let im = u128::from(bin.im.unsigned_abs());
    re * re + im * im
}

/// `⌊sqrt(re² + im²)⌋`, or `None` when it does not fit in `u32`
#[inline]
pub fn magnitude(bin: Complex<i64>) -> Option<u32> {
    u32::try_from(isqrt(norm_sqr(bin))).ok()
}

/// Power of a bin: the magnitude squared
///
/// Square root first, then square, so the result matches squaring the
/// output of [`magnitude`] exactly. `None` under the same condition.
#[inline]
pub fn power(bin: Complex<i64>) -> Option<u64> {
    magnitude(bin).map(|mag| u64::from(mag) * u64::from(mag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (x, &root) in expected.iter().enumerate() {
            assert_eq!(isqrt(x as u128), root, "isqrt({x})");
        }
    }

    #[test]
    fn test_isqrt_floors_between_squares() {
        for r in [7u128, 1000, 65_535, 1 << 31, 3_000_000_007] {
            assert_eq!(isqrt(r * r), r as u64);
            assert_eq!(isqrt(r * r + 2 * r), r as u64);
            assert_eq!(isqrt(r * r - 1), (r - 1) as u64);
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        assert_eq!(isqrt(u128::from(u64::MAX)), u64::from(u32::MAX));
        assert_eq!(isqrt(u128::MAX), u64::MAX);
    }

    #[test]
    fn test_magnitude_pythagorean() {
        assert_eq!(magnitude(Complex::new(3, 4)), Some(5));
        assert_eq!(magnitude(Complex::new(-3, -4)), Some(5));
        assert_eq!(magnitude(Complex::new(0, 0)), Some(0));
        // sqrt(2) * 10 = 14.14 -> 14
        assert_eq!(magnitude(Complex::new(10, 10)), Some(14));
    }

    #[test]
    fn test_magnitude_beyond_u32() {
        assert_eq!(magnitude(Complex::new(i64::from(u32::MAX), 0)), Some(u32::MAX));
        assert_eq!(magnitude(Complex::new(i64::from(u32::MAX) + 1, 0)), None);
        assert_eq!(magnitude(Complex::new(i64::MIN, i64::MIN)), None);
        assert_eq!(power(Complex::new(i64::MIN, 0)), None);
    }

    #[test]
    fn test_power_is_squared_floor_magnitude() {
        // sqrt(200) = 14.14, floor 14, squared 196 (not 200)
        assert_eq!(power(Complex::new(10, 10)), Some(196));
        assert_eq!(power(Complex::new(3, 4)), Some(25));
    }
}
