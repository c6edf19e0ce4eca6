mod policy;
mod rules;

pub use policy::{REJECTED_PREFIX, STRONG_FIT_SUMMARY};
pub use rules::{EligibilityRuleKind, RuleOutcome, RuleSeverity};

use super::domain::{EligibilityVerdict, ScholarshipOpportunity, StudentProfile};
use policy::{collect_reasons, fit_summary};

/// Stateless evaluator applying the eligibility rule table to each opportunity.
///
/// Nothing is filtered out: every input opportunity yields exactly one verdict and
/// downstream stages read ineligibility from the fit summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Per-rule audit trail for a single opportunity, in evaluation order.
    pub fn check(
        &self,
        profile: &StudentProfile,
        opportunity: &ScholarshipOpportunity,
    ) -> Vec<RuleOutcome> {
        rules::evaluate_rules(profile, &opportunity.eligibility)
    }

    pub fn verdict(
        &self,
        profile: &StudentProfile,
        opportunity: &ScholarshipOpportunity,
    ) -> EligibilityVerdict {
        let outcomes = self.check(profile, opportunity);

        EligibilityVerdict {
            scholarship: opportunity.clone(),
            fit_summary: fit_summary(&outcomes),
            reasons: collect_reasons(&outcomes),
        }
    }

    pub fn evaluate(
        &self,
        profile: &StudentProfile,
        opportunities: &[ScholarshipOpportunity],
    ) -> Vec<EligibilityVerdict> {
        opportunities
            .iter()
            .map(|opportunity| self.verdict(profile, opportunity))
            .collect()
    }
}
