use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{EffortLevel, EligibilityVerdict, RankedEntry, ScholarshipOpportunity};

const BASE_SCORE: i64 = 60;
const INELIGIBLE_PENALTY: i64 = 20;
const AMOUNT_UNIT: u64 = 1_000;
const AMOUNT_CAP: u64 = 30;
const UNRATED_EFFORT_SCORE: i64 = 5;
const URGENCY_HORIZON_DAYS: u64 = 45;
const URGENCY_BONUS: i64 = 10;
const MAX_SCORE: f64 = 100.0;

/// Weighted components behind a ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fit_penalty: i64,
    pub amount_score: i64,
    pub effort_score: i64,
    pub urgency_bonus: i64,
}

impl ScoreBreakdown {
    pub fn for_verdict(verdict: &EligibilityVerdict, today: NaiveDate) -> Self {
        let opportunity = &verdict.scholarship;
        Self {
            fit_penalty: if verdict.is_strong_fit() {
                0
            } else {
                INELIGIBLE_PENALTY
            },
            amount_score: amount_score(opportunity.amount),
            effort_score: effort_score(&opportunity.effort_level),
            urgency_bonus: if is_urgent(opportunity, today) {
                URGENCY_BONUS
            } else {
                0
            },
        }
    }

    pub fn raw(&self) -> i64 {
        BASE_SCORE - self.fit_penalty + self.amount_score + self.effort_score + self.urgency_bonus
    }

    /// Raw total clamped into [0, 100] and rounded to one decimal place.
    pub fn score(&self) -> f64 {
        let clamped = (self.raw() as f64).clamp(0.0, MAX_SCORE);
        (clamped * 10.0).round() / 10.0
    }

    pub fn reasoning(&self) -> String {
        format!(
            "Fit penalty {}, amount {}, effort {}, urgency {}",
            self.fit_penalty, self.amount_score, self.effort_score, self.urgency_bonus
        )
    }
}

fn amount_score(amount: u64) -> i64 {
    amount.div_ceil(AMOUNT_UNIT).min(AMOUNT_CAP) as i64
}

fn effort_score(level: &EffortLevel) -> i64 {
    match level {
        EffortLevel::Low => 20,
        EffortLevel::Medium => 10,
        EffortLevel::High => 0,
        EffortLevel::Unrated(_) => UNRATED_EFFORT_SCORE,
    }
}

fn is_urgent(opportunity: &ScholarshipOpportunity, today: NaiveDate) -> bool {
    today
        .checked_add_days(Days::new(URGENCY_HORIZON_DAYS))
        .map(|horizon| opportunity.deadline <= horizon)
        .unwrap_or(true)
}

/// Score every verdict and order them by descending score.
///
/// The sort is stable, so equal scores keep their input order; top-N selection
/// downstream relies on this.
pub fn rank_verdicts(verdicts: Vec<EligibilityVerdict>, today: NaiveDate) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = verdicts
        .into_iter()
        .map(|verdict| {
            let breakdown = ScoreBreakdown::for_verdict(&verdict, today);
            RankedEntry {
                scholarship: verdict.scholarship,
                score: breakdown.score(),
                reasoning: breakdown.reasoning(),
            }
        })
        .collect();

    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked
}
