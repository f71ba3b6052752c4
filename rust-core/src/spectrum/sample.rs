//! Numeric sample types accepted by the transform

/// A real-valued sample the transform can accumulate
///
/// Integer samples accumulate exactly. Floating-point samples add the
/// product in floating point and truncate back into the integer accumulator
/// after every term, the same way `long += int * float` behaves in C.
///
/// 16-bit and narrower samples always fit the `u32` magnitude output. For
/// 32-bit samples `amplitude * n` must stay below about 4.2e9, otherwise the
/// transform reports [`crate::DftError::MagnitudeOverflow`].
pub trait Sample: Copy {
    /// Return `acc + coeff * self` in the accumulator's width
    fn accumulate(self, acc: i64, coeff: i16) -> i64;
}

macro_rules! impl_integer_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                #[inline]
                fn accumulate(self, acc: i64, coeff: i16) -> i64 {
                    acc + i64::from(coeff) * i64::from(self)
                }
            }
        )*
    };
}

impl_integer_sample!(i8, i16, i32, u8, u16, u32);

impl Sample for f32 {
    #[inline]
    fn accumulate(self, acc: i64, coeff: i16) -> i64 {
        f64::from(self).accumulate(acc, coeff)
    }
}

impl Sample for f64 {
    #[inline]
    fn accumulate(self, acc: i64, coeff: i16) -> i64 {
        (acc as f64 + f64::from(coeff) * self) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accumulate_is_exact() {
        assert_eq!(100i16.accumulate(0, 1000), 100_000);
        assert_eq!((-32768i16).accumulate(5, -1000), 32_768_005);
        assert_eq!(u16::MAX.accumulate(0, 1000), 65_535_000);
        assert_eq!(i32::MAX.accumulate(0, 1000), 2_147_483_647_000);
    }

    #[test]
    fn test_float_accumulate_truncates_each_term() {
        // 0.0015 * 1000 = 1.5 -> 1
        assert_eq!(0.0015f64.accumulate(0, 1000), 1);
        // -1.5 truncates toward zero
        assert_eq!((-0.0015f64).accumulate(0, 1000), -1);
        // Truncation applies to the running sum, not to the product alone
        assert_eq!(0.0015f64.accumulate(1, 1000), 2);
        assert_eq!(2.5f32.accumulate(0, 3), 7);
    }
}
