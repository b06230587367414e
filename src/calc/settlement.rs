//! Settlement support (정착지원금) formula
//!
//! A time-boxed subsidy over the first 24 contract months, tiered by
//! recognized performance and capped at a fixed ceiling.

/// Payment ceiling: 5,000,000 KRW
pub const SETTLEMENT_CAP: f64 = 5_000_000.0;

/// Recognized-performance floor below which no settlement support is paid
pub const SETTLEMENT_FLOOR: f64 = 300_000.0;

/// Settlement support for a given contract month and recognized performance
///
/// Months 1-12 use a three-band multiplier; months 13-24 pay the recognized
/// amount flat above the floor. Months outside 1-24 pay nothing. The result
/// is always capped at [`SETTLEMENT_CAP`].
pub fn settlement_support(month_no: u32, recognized: f64) -> f64 {
    let pay = if (1..=12).contains(&month_no) {
        if recognized < SETTLEMENT_FLOOR {
            0.0
        } else if recognized < 1_000_000.0 {
            recognized * 1.5
        } else if recognized < 2_000_000.0 {
            recognized * 1.8
        } else {
            recognized * 2.0
        }
    } else if (13..=24).contains(&month_no) {
        if recognized < SETTLEMENT_FLOOR {
            0.0
        } else {
            recognized
        }
    } else {
        0.0
    };

    pay.min(SETTLEMENT_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_year_bands() {
        assert_eq!(settlement_support(1, 299_999.0), 0.0);
        assert_relative_eq!(settlement_support(1, 300_000.0), 450_000.0);
        assert_relative_eq!(settlement_support(6, 700_000.0), 1_050_000.0);
        assert_relative_eq!(settlement_support(12, 999_999.0), 999_999.0 * 1.5);
        assert_relative_eq!(settlement_support(12, 1_000_000.0), 1_800_000.0);
        assert_relative_eq!(settlement_support(3, 2_000_000.0), 4_000_000.0);
    }

    #[test]
    fn test_cap_applies_in_every_first_year_month() {
        // 2.5M × 2.0 = 5.0M raw, exactly at the cap
        for month in 1..=12 {
            assert_relative_eq!(settlement_support(month, 2_500_000.0), SETTLEMENT_CAP);
        }
        // Above the cap the payment stays pinned
        assert_relative_eq!(settlement_support(1, 4_000_000.0), SETTLEMENT_CAP);
    }

    #[test]
    fn test_second_year_flat() {
        assert_eq!(settlement_support(13, 299_999.0), 0.0);
        assert_relative_eq!(settlement_support(13, 300_000.0), 300_000.0);
        assert_relative_eq!(settlement_support(24, 1_500_000.0), 1_500_000.0);
        // Flat band is still capped
        assert_relative_eq!(settlement_support(20, 6_000_000.0), SETTLEMENT_CAP);
    }

    #[test]
    fn test_inactive_months() {
        assert_eq!(settlement_support(0, 1_000_000.0), 0.0);
        assert_eq!(settlement_support(25, 1_000_000.0), 0.0);
        assert_eq!(settlement_support(100, 1_000_000.0), 0.0);
    }
}
