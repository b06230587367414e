//! Core domain types: insurance category and FA grade tiers
//!
//! Grade labels and the insurer/product-group vocabularies are the Korean
//! strings used as lookup-table keys, so `as_str`/`FromStr` round-trip them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insurance category of the sold product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceType {
    /// Non-life (손보)
    NonLife,
    /// Life (생보)
    Life,
}

impl InsuranceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::NonLife => "손보",
            InsuranceType::Life => "생보",
        }
    }
}

impl FromStr for InsuranceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "손보" | "nonlife" => Ok(InsuranceType::NonLife),
            "생보" | "life" => Ok(InsuranceType::Life),
            other => Err(format!("Unknown insurance type: {}", other)),
        }
    }
}

/// FA grade tier, ordered lowest to highest
///
/// The payout-rate table is keyed by the Korean label of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaGrade {
    /// 도전
    Challenge,
    /// 일반
    Regular,
    /// 표준
    Standard,
    /// 우수
    Excellent,
    /// 프로
    Pro,
    /// VIP
    Vip,
    /// 노블레스
    Noblesse,
    /// 시그니처
    Signature,
}

/// Grade band thresholds in KRW of recognized performance, ascending.
/// Band k is [THRESHOLDS[k-1], THRESHOLDS[k]); below the first threshold
/// is the lowest tier, at or above the last is the highest.
pub const GRADE_THRESHOLDS: [f64; 7] = [
    300_000.0,
    500_000.0,
    700_000.0,
    1_000_000.0,
    1_500_000.0,
    2_000_000.0,
    2_500_000.0,
];

impl FaGrade {
    /// All eight tiers in ascending order
    pub const ALL: [FaGrade; 8] = [
        FaGrade::Challenge,
        FaGrade::Regular,
        FaGrade::Standard,
        FaGrade::Excellent,
        FaGrade::Pro,
        FaGrade::Vip,
        FaGrade::Noblesse,
        FaGrade::Signature,
    ];

    /// Classify a recognized-performance amount into a grade tier
    ///
    /// Total over all inputs and monotonic non-decreasing in the amount.
    pub fn from_recognized(recognized: f64) -> Self {
        for (i, threshold) in GRADE_THRESHOLDS.iter().enumerate() {
            if recognized < *threshold {
                return FaGrade::ALL[i];
            }
        }
        FaGrade::Signature
    }

    /// The Korean label used as the payout-table key
    pub fn as_str(&self) -> &'static str {
        match self {
            FaGrade::Challenge => "도전",
            FaGrade::Regular => "일반",
            FaGrade::Standard => "표준",
            FaGrade::Excellent => "우수",
            FaGrade::Pro => "프로",
            FaGrade::Vip => "VIP",
            FaGrade::Noblesse => "노블레스",
            FaGrade::Signature => "시그니처",
        }
    }

    /// Grades at or above 노블레스 carry an eligibility condition
    /// (combined non-life + life 25th-month persistency ≥ 90%) that the
    /// engine surfaces as an advisory warning rather than modeling.
    pub fn has_persistency_condition(&self) -> bool {
        matches!(self, FaGrade::Noblesse | FaGrade::Signature)
    }
}

impl FromStr for FaGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "도전" => Ok(FaGrade::Challenge),
            "일반" => Ok(FaGrade::Regular),
            "표준" => Ok(FaGrade::Standard),
            "우수" => Ok(FaGrade::Excellent),
            "프로" => Ok(FaGrade::Pro),
            "VIP" => Ok(FaGrade::Vip),
            "노블레스" => Ok(FaGrade::Noblesse),
            "시그니처" => Ok(FaGrade::Signature),
            other => Err(format!("Unknown FA grade: {}", other)),
        }
    }
}

impl fmt::Display for FaGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-life insurers carried by the agency
pub const INSURERS_NONLIFE: [&str; 13] = [
    "삼성", "현대", "DB", "KB", "메리츠", "한화", "롯데", "흥국", "MG", "농협", "AIG", "하나",
    "라이나",
];

/// Non-life product groups (sample payout-table granularity)
pub const PRODUCT_GROUPS_NONLIFE: [&str; 3] = ["보장", "연금", "저축"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(FaGrade::from_recognized(0.0), FaGrade::Challenge);
        assert_eq!(FaGrade::from_recognized(299_999.0), FaGrade::Challenge);
        assert_eq!(FaGrade::from_recognized(300_000.0), FaGrade::Regular);
        assert_eq!(FaGrade::from_recognized(500_000.0), FaGrade::Standard);
        assert_eq!(FaGrade::from_recognized(700_000.0), FaGrade::Excellent);
        assert_eq!(FaGrade::from_recognized(999_999.0), FaGrade::Excellent);
        assert_eq!(FaGrade::from_recognized(1_000_000.0), FaGrade::Pro);
        assert_eq!(FaGrade::from_recognized(1_500_000.0), FaGrade::Vip);
        assert_eq!(FaGrade::from_recognized(2_000_000.0), FaGrade::Noblesse);
        assert_eq!(FaGrade::from_recognized(2_499_999.0), FaGrade::Noblesse);
        assert_eq!(FaGrade::from_recognized(2_500_000.0), FaGrade::Signature);
        assert_eq!(FaGrade::from_recognized(10_000_000.0), FaGrade::Signature);
    }

    #[test]
    fn test_grade_monotonic() {
        // Sweep the domain in 10k steps; the resolved grade must never decrease
        let mut prev = FaGrade::from_recognized(0.0);
        let mut amount = 0.0;
        while amount <= 3_000_000.0 {
            let grade = FaGrade::from_recognized(amount);
            assert!(grade >= prev, "grade decreased at {}", amount);
            prev = grade;
            amount += 10_000.0;
        }
    }

    #[test]
    fn test_grade_labels_round_trip() {
        for grade in FaGrade::ALL {
            assert_eq!(grade.as_str().parse::<FaGrade>(), Ok(grade));
        }
        assert!("플래티넘".parse::<FaGrade>().is_err());
    }

    #[test]
    fn test_top_tier_condition_flag() {
        assert!(!FaGrade::Excellent.has_persistency_condition());
        assert!(!FaGrade::Vip.has_persistency_condition());
        assert!(FaGrade::Noblesse.has_persistency_condition());
        assert!(FaGrade::Signature.has_persistency_condition());
    }

    #[test]
    fn test_insurance_type_parse() {
        assert_eq!("손보".parse::<InsuranceType>(), Ok(InsuranceType::NonLife));
        assert_eq!("life".parse::<InsuranceType>(), Ok(InsuranceType::Life));
        assert!("화재".parse::<InsuranceType>().is_err());
    }
}
