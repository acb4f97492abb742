//! Goal alignment scoring
//!
//! Compares the sum of all goal targets against current holdings. The ratio
//! is targets over holdings and the category thresholds are tuned against
//! that direction.

use crate::client::Goal;
use crate::projection::rates::round2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light classification of the alignment ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentCategory {
    /// ratio > 0.9
    Verde,
    /// 0.7 < ratio <= 0.9
    AmareloClaro,
    /// 0.5 < ratio <= 0.7
    AmareloEscuro,
    /// ratio <= 0.5
    Vermelho,
}

impl AlignmentCategory {
    /// Classify a raw (unrounded) targets-over-holdings ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.9 {
            AlignmentCategory::Verde
        } else if ratio > 0.7 {
            AlignmentCategory::AmareloClaro
        } else if ratio > 0.5 {
            AlignmentCategory::AmareloEscuro
        } else {
            AlignmentCategory::Vermelho
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentCategory::Verde => "verde",
            AlignmentCategory::AmareloClaro => "amarelo-claro",
            AlignmentCategory::AmareloEscuro => "amarelo-escuro",
            AlignmentCategory::Vermelho => "vermelho",
        }
    }
}

impl fmt::Display for AlignmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment percentage and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Targets over holdings as a percentage, rounded to 2 decimals
    pub alignment: f64,
    pub category: AlignmentCategory,
}

/// Score goal targets against the client's holding value
///
/// Returns `None` when there is no holding on record, the holding is zero,
/// or there are no goals.
pub fn calculate_alignment(holding_value: Option<f64>, goals: &[Goal]) -> Option<AlignmentResult> {
    let holding = holding_value.filter(|&h| h != 0.0)?;
    if goals.is_empty() {
        return None;
    }

    let total_target: f64 = goals.iter().map(|g| g.target_value).sum();
    let ratio = total_target / holding;

    Some(AlignmentResult {
        alignment: round2(ratio * 100.0),
        category: AlignmentCategory::from_ratio(ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(id: u32, target_value: f64) -> Goal {
        Goal {
            id,
            goal_type: "investimento".to_string(),
            target_value,
            target_date: NaiveDate::from_ymd_opt(2035, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
        }
    }

    #[test]
    fn test_absent_without_holding_or_goals() {
        assert_eq!(calculate_alignment(None, &[goal(1, 950.0)]), None);
        assert_eq!(calculate_alignment(Some(1000.0), &[]), None);
        assert_eq!(calculate_alignment(None, &[]), None);
    }

    #[test]
    fn test_zero_holding_is_absent() {
        assert_eq!(calculate_alignment(Some(0.0), &[goal(1, 950.0)]), None);
    }

    #[test]
    fn test_category_tiers() {
        let cases = [
            (950.0, 95.0, AlignmentCategory::Verde),
            (800.0, 80.0, AlignmentCategory::AmareloClaro),
            (600.0, 60.0, AlignmentCategory::AmareloEscuro),
            (400.0, 40.0, AlignmentCategory::Vermelho),
        ];

        for (target, expected_alignment, expected_category) in cases {
            let result = calculate_alignment(Some(1000.0), &[goal(1, target)]).unwrap();
            assert_eq!(result.alignment, expected_alignment, "target {}", target);
            assert_eq!(result.category, expected_category, "target {}", target);
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(AlignmentCategory::from_ratio(0.9), AlignmentCategory::AmareloClaro);
        assert_eq!(AlignmentCategory::from_ratio(0.7), AlignmentCategory::AmareloEscuro);
        assert_eq!(AlignmentCategory::from_ratio(0.5), AlignmentCategory::Vermelho);
        assert_eq!(AlignmentCategory::from_ratio(0.9000001), AlignmentCategory::Verde);
    }

    #[test]
    fn test_category_uses_raw_ratio_not_rounded_percentage() {
        // 900.004 / 1000 rounds to 90.0% but the raw ratio is above 0.9
        let result = calculate_alignment(Some(1000.0), &[goal(1, 900.004)]).unwrap();
        assert_eq!(result.alignment, 90.0);
        assert_eq!(result.category, AlignmentCategory::Verde);
    }

    #[test]
    fn test_targets_are_summed_over_holdings() {
        let goals = [goal(1, 1500.0), goal(2, 500.0)];
        let result = calculate_alignment(Some(1000.0), &goals).unwrap();
        assert_eq!(result.alignment, 200.0);
        assert_eq!(result.category, AlignmentCategory::Verde);
    }

    #[test]
    fn test_serialized_labels() {
        let result = AlignmentResult {
            alignment: 80.0,
            category: AlignmentCategory::AmareloClaro,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["category"], "amarelo-claro");
        assert_eq!(
            serde_json::to_value(AlignmentCategory::AmareloEscuro).unwrap(),
            "amarelo-escuro"
        );
    }
}
