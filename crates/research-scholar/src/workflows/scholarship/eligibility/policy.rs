use super::rules::RuleOutcome;

pub const STRONG_FIT_SUMMARY: &str = "Strong fit based on GPA/major/location.";
pub const REJECTED_PREFIX: &str = "Rejected: ";
const UNKNOWN_REASON: &str = "Unknown reason";

/// Overall eligibility is the conjunction of hard rules; advisory misses never flip it.
pub(crate) fn is_eligible(outcomes: &[RuleOutcome]) -> bool {
    !outcomes.iter().any(RuleOutcome::disqualifies)
}

pub(crate) fn fit_summary(outcomes: &[RuleOutcome]) -> String {
    if is_eligible(outcomes) {
        return STRONG_FIT_SUMMARY.to_string();
    }

    let hard_reasons: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| outcome.disqualifies())
        .filter_map(|outcome| outcome.unmet.as_deref())
        .collect();

    if hard_reasons.is_empty() {
        format!("{REJECTED_PREFIX}{UNKNOWN_REASON}")
    } else {
        format!("{REJECTED_PREFIX}{}", hard_reasons.join(", "))
    }
}

pub(crate) fn collect_reasons(outcomes: &[RuleOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.unmet.clone())
        .collect()
}
