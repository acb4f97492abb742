//! Monthly savings suggestions per goal
//!
//! A closed-form linear estimate: recurring events are reduced to a flat
//! monthly-equivalent figure and no compounding is applied. Results are not
//! expected to agree with the wealth curve.

use crate::client::{Event, EventFrequency, Goal, Insurance};
use log::warn;
use serde::{Deserialize, Serialize};

/// Default horizon for suggestions, in months
pub const DEFAULT_SUGGESTION_MONTHS: u32 = 24;

pub const NO_GOALS_MESSAGE: &str = "Nenhuma meta encontrada para este cliente.";

/// Savings recommendation for one goal
///
/// The goal-less sentinel carries only `message`; every other field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    /// Required monthly contribution; `None` when the goal is already met
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_suggestion: Option<i64>,
    pub message: String,
}

impl Suggestion {
    /// Entry returned when the client has no goals
    pub fn no_goals() -> Self {
        Self {
            goal_id: None,
            goal_type: None,
            target: None,
            current: None,
            monthly_suggestion: None,
            message: NO_GOALS_MESSAGE.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.goal_id.is_none()
    }

    /// Whether current resources already cover the goal
    pub fn is_achieved(&self) -> bool {
        !self.is_sentinel() && self.monthly_suggestion.is_none()
    }
}

/// Flat monthly-equivalent cash flow of recurring events
///
/// Monthly events count in full, annual events count one twelfth, one-time
/// events are ignored. Start dates play no part.
pub fn monthly_impact(events: &[Event]) -> f64 {
    events
        .iter()
        .map(|e| match e.frequency {
            EventFrequency::Monthly => e.value,
            EventFrequency::Annual => e.value / 12.0,
            EventFrequency::Once => 0.0,
        })
        .sum()
}

/// Build one suggestion per goal, in goal order
///
/// `wallet_totals` and insurance coverage together form the current
/// resources. A zero `horizon_months` is treated as one month.
pub fn generate_suggestions(
    goals: &[Goal],
    wallet_totals: &[f64],
    insurances: &[Insurance],
    events: &[Event],
    horizon_months: u32,
) -> Vec<Suggestion> {
    if goals.is_empty() {
        return vec![Suggestion::no_goals()];
    }

    let months = if horizon_months == 0 {
        warn!("Suggestion horizon of 0 months clamped to 1");
        1
    } else {
        horizon_months
    };

    let holdings: f64 = wallet_totals.iter().sum();
    let coverage: f64 = insurances.iter().map(|i| i.coverage_value).sum();
    let total_current = holdings + coverage;
    let impact = monthly_impact(events);

    goals
        .iter()
        .map(|goal| suggest_for_goal(goal, total_current, impact, months))
        .collect()
}

fn suggest_for_goal(goal: &Goal, total_current: f64, monthly_impact: f64, months: u32) -> Suggestion {
    let gap = goal.target_value - total_current;

    let (monthly_suggestion, message) = if gap <= 0.0 {
        (None, format!("Meta \"{}\" já foi atingida.", goal.goal_type))
    } else {
        let horizon = f64::from(months);
        let required = ((gap - monthly_impact * horizon) / horizon).ceil() as i64;
        (
            Some(required),
            format!(
                "Para a meta \"{}\", invista R$ {}/mês por {} meses.",
                goal.goal_type, required, months
            ),
        )
    };

    Suggestion {
        goal_id: Some(goal.id),
        goal_type: Some(goal.goal_type.clone()),
        target: Some(goal.target_value),
        current: Some(total_current),
        monthly_suggestion,
        message,
    }
}
