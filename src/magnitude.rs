//! Advisory magnitude thresholds per integer width.
//!
//! Four nested bounds describe how large numerators and denominators may
//! grow before fixed-width arithmetic starts falling back to the wide path.
//! Each bound `mag` stands for the symmetric range `±mag/1` together with its
//! reciprocal refinement `±1/mag`.
//!
//! | width | sweet spot | preferable | workable | admissible |
//! |-------|-----------:|-----------:|---------:|-----------:|
//! | 8     | 3          | 3          | 3        | 15         |
//! | 16    | 13         | 15         | 31       | 127        |
//! | 32    | 215        | 255        | 1023     | 4095       |
//! | 64    | 55108      | 65535      | 2097151  | 8388607    |
//!
//! The thresholds are for tuning and documentation. Whether a particular
//! operation may overflow is decided by [`overflow`](crate::overflow).
//!
//! ```
//! use fast_ratio::{FastInt, MagnitudeClass};
//!
//! let t = <i32 as FastInt>::THRESHOLDS;
//! assert_eq!(t.sweet_spot, 215);
//! assert_eq!(t.classify(1000), MagnitudeClass::Workable);
//! ```

/// Four nested magnitude bounds derived from a bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagnitudeThresholds {
    /// Largest `m` with `m^4 + 5m` representable.
    pub sweet_spot: u64,
    /// Smallest all-ones value (`2^k - 1`) not below the sweet spot.
    pub preferable: u64,
    /// Largest `2^k - 1` with `m^3 + 4m` representable.
    pub workable: u64,
    /// `4 * (workable + 1) - 1`.
    pub admissible: u64,
}

/// Tightest threshold a magnitude falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MagnitudeClass {
    SweetSpot,
    Preferable,
    Workable,
    Admissible,
    Beyond,
}

impl MagnitudeThresholds {
    /// Derive the thresholds for a signed width of `bits` bits.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a constant) unless
    /// `8 <= bits <= 64`.
    pub const fn for_bits(bits: u32) -> Self {
        assert!(bits >= 8 && bits <= 64, "supported widths are 8 through 64 bits");

        let max = (1u128 << (bits - 1)) - 1;
        let sweet_spot = largest_quartic_fit(max);
        let workable = largest_cubic_all_ones_fit(max);

        Self {
            sweet_spot,
            preferable: (sweet_spot + 1).next_power_of_two() - 1,
            workable,
            admissible: 4 * (workable + 1) - 1,
        }
    }

    /// Classify a magnitude against the four bounds.
    pub const fn classify(&self, magnitude: u64) -> MagnitudeClass {
        if magnitude <= self.sweet_spot {
            MagnitudeClass::SweetSpot
        } else if magnitude <= self.preferable {
            MagnitudeClass::Preferable
        } else if magnitude <= self.workable {
            MagnitudeClass::Workable
        } else if magnitude <= self.admissible {
            MagnitudeClass::Admissible
        } else {
            MagnitudeClass::Beyond
        }
    }
}

/// Largest `m` with `m^4 + 5m <= max`.
const fn largest_quartic_fit(max: u128) -> u64 {
    // max < 2^63, so m < 2^16 and every probe fits in u128
    let mut lo = 0u128;
    let mut hi = 1u128 << 16;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if mid * mid * mid * mid + 5 * mid <= max {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as u64
}

/// Largest `m = 2^k - 1` with `m^3 + 4m <= max`.
const fn largest_cubic_all_ones_fit(max: u128) -> u64 {
    let mut k = 0u32;
    loop {
        let next = (1u128 << (k + 1)) - 1;
        if next * next * next + 4 * next > max {
            break;
        }
        k += 1;
    }
    ((1u128 << k) - 1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FastInt;
    use test_case::test_case;

    #[test_case(8 => (3, 3, 3, 15); "8 bits")]
    #[test_case(16 => (13, 15, 31, 127); "16 bits")]
    #[test_case(32 => (215, 255, 1023, 4095); "32 bits")]
    #[test_case(64 => (55108, 65535, 2097151, 8388607); "64 bits")]
    fn test_threshold_values(bits: u32) -> (u64, u64, u64, u64) {
        let t = MagnitudeThresholds::for_bits(bits);
        (t.sweet_spot, t.preferable, t.workable, t.admissible)
    }

    fn quartic(m: u64) -> u128 {
        let m = m as u128;
        m * m * m * m + 5 * m
    }

    fn cubic(m: u64) -> u128 {
        let m = m as u128;
        m * m * m + 4 * m
    }

    #[test_case(8; "8 bits")]
    #[test_case(16; "16 bits")]
    #[test_case(32; "32 bits")]
    #[test_case(64; "64 bits")]
    fn test_threshold_derivation(bits: u32) {
        let max = (1u128 << (bits - 1)) - 1;
        let t = MagnitudeThresholds::for_bits(bits);

        // sweet spot is the exact boundary of m^4 + 5m
        assert!(quartic(t.sweet_spot) <= max);
        assert!(quartic(t.sweet_spot + 1) > max);

        // preferable is all ones and the first such value covering the sweet spot
        assert_eq!((t.preferable + 1).count_ones(), 1);
        assert!(t.preferable >= t.sweet_spot);
        assert!(t.preferable / 2 < t.sweet_spot);

        // workable is the largest all-ones value satisfying m^3 + 4m
        assert_eq!((t.workable + 1).count_ones(), 1);
        assert!(cubic(t.workable) <= max);
        assert!(cubic(2 * t.workable + 1) > max);

        assert_eq!(t.admissible, 4 * (t.workable + 1) - 1);
    }

    #[test]
    fn test_thresholds_are_nested() {
        for t in [
            <i8 as FastInt>::THRESHOLDS,
            <i16 as FastInt>::THRESHOLDS,
            <i32 as FastInt>::THRESHOLDS,
            <i64 as FastInt>::THRESHOLDS,
        ] {
            assert!(t.sweet_spot <= t.preferable);
            assert!(t.preferable <= t.workable);
            assert!(t.workable <= t.admissible);
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let t = <i64 as FastInt>::THRESHOLDS;
        assert_eq!(t.classify(0), MagnitudeClass::SweetSpot);
        assert_eq!(t.classify(55108), MagnitudeClass::SweetSpot);
        assert_eq!(t.classify(55109), MagnitudeClass::Preferable);
        assert_eq!(t.classify(65535), MagnitudeClass::Preferable);
        assert_eq!(t.classify(65536), MagnitudeClass::Workable);
        assert_eq!(t.classify(2097151), MagnitudeClass::Workable);
        assert_eq!(t.classify(2097152), MagnitudeClass::Admissible);
        assert_eq!(t.classify(8388607), MagnitudeClass::Admissible);
        assert_eq!(t.classify(8388608), MagnitudeClass::Beyond);
        assert!(MagnitudeClass::SweetSpot < MagnitudeClass::Beyond);
    }
}
