//! Fixed-point trigonometric lookup tables
//!
//! One cosine/sine pair per supported transform length. Entries are scaled by
//! [`TABLE_SCALE`] and rounded to the nearest integer.

mod data;

use crate::error::{DftError, Result};

/// Scale factor the built-in tables were generated with
pub const TABLE_SCALE: i64 = 1000;

/// Transform lengths with a built-in table
pub const SUPPORTED_SIZES: [usize; 5] = [32, 64, 128, 256, 512];

/// Borrowed cosine/sine table pair for one transform length
#[derive(Debug, Clone, Copy)]
pub struct TrigTable<'a> {
    cos: &'a [i16],
    sin: &'a [i16],
    scale: i64,
}

static BUILTIN: [TrigTable<'static>; 5] = [
    TrigTable::builtin(&data::COS_32, &data::SIN_32),
    TrigTable::builtin(&data::COS_64, &data::SIN_64),
    TrigTable::builtin(&data::COS_128, &data::SIN_128),
    TrigTable::builtin(&data::COS_256, &data::SIN_256),
    TrigTable::builtin(&data::COS_512, &data::SIN_512),
];

impl TrigTable<'static> {
    const fn builtin(cos: &'static [i16], sin: &'static [i16]) -> Self {
        Self {
            cos,
            sin,
            scale: TABLE_SCALE,
        }
    }

    /// Look up the built-in table for exactly `len` samples
    ///
    /// No interpolation and no fallback: any length outside
    /// [`SUPPORTED_SIZES`] is rejected.
    pub fn for_len(len: usize) -> Result<Self> {
        BUILTIN
            .iter()
            .find(|table| table.len() == len)
            .copied()
            .ok_or(DftError::UnsupportedSampleCount(len))
    }
}

impl<'a> TrigTable<'a> {
    /// Wrap an externally generated table
    ///
    /// # Arguments
    /// * `cos` - `round(scale * cos(2πk/N))` for k = 0..N-1
    /// * `sin` - `round(scale * sin(2πk/N))` for k = 0..N-1
    /// * `scale` - Fixed-point factor the entries were multiplied by
    pub fn new(cos: &'a [i16], sin: &'a [i16], scale: i64) -> Result<Self> {
        if cos.len() != sin.len() {
            return Err(DftError::InvalidTable(format!(
                "cosine has {} entries, sine has {}",
                cos.len(),
                sin.len()
            )));
        }
        if cos.is_empty() {
            return Err(DftError::InvalidTable("table is empty".to_string()));
        }
        if scale <= 0 {
            return Err(DftError::InvalidTable(format!("scale must be positive, got {scale}")));
        }

        Ok(Self { cos, sin, scale })
    }

    /// Number of samples the table covers
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn cos(&self) -> &'a [i16] {
        self.cos
    }

    pub fn sin(&self) -> &'a [i16] {
        self.sin
    }
}

/// Whether a built-in table exists for `len`
pub fn is_supported(len: usize) -> bool {
    SUPPORTED_SIZES.contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_every_supported_size_resolves() {
        for &n in SUPPORTED_SIZES.iter() {
            let table = TrigTable::for_len(n).unwrap();
            assert_eq!(table.len(), n);
            assert_eq!(table.sin().len(), n);
            assert_eq!(table.scale(), TABLE_SCALE);
            assert!(is_supported(n));
        }
    }

    #[test]
    fn test_unsupported_sizes_rejected() {
        for n in [0, 1, 16, 100, 1024] {
            assert_eq!(
                TrigTable::for_len(n).unwrap_err(),
                DftError::UnsupportedSampleCount(n)
            );
            assert!(!is_supported(n));
        }
    }

    #[test]
    fn test_builtin_tables_match_trig_functions() {
        for &n in SUPPORTED_SIZES.iter() {
            let table = TrigTable::for_len(n).unwrap();
            for k in 0..n {
                let angle = 2.0 * PI * k as f64 / n as f64;
                let cos = (1000.0 * angle.cos()).round() as i16;
                let sin = (1000.0 * angle.sin()).round() as i16;
                assert!((table.cos()[k] - cos).abs() <= 1, "cos n={n} k={k}");
                assert!((table.sin()[k] - sin).abs() <= 1, "sin n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_quarter_period_landmarks() {
        let table = TrigTable::for_len(64).unwrap();
        assert_eq!(table.cos()[0], 1000);
        assert_eq!(table.sin()[0], 0);
        assert_eq!(table.sin()[16], 1000);
        assert_eq!(table.cos()[32], -1000);
        assert_eq!(table.sin()[48], -1000);
    }

    #[test]
    fn test_custom_table_validation() {
        let cos = [1000, 0, -1000, 0];
        let sin = [0, 1000, 0, -1000];

        let table = TrigTable::new(&cos, &sin, 1000).unwrap();
        assert_eq!(table.len(), 4);

        assert!(matches!(
            TrigTable::new(&cos, &sin[..3], 1000),
            Err(DftError::InvalidTable(_))
        ));
        assert!(matches!(
            TrigTable::new(&[], &[], 1000),
            Err(DftError::InvalidTable(_))
        ));
        assert!(matches!(
            TrigTable::new(&cos, &sin, 0),
            Err(DftError::InvalidTable(_))
        ));
    }
}
