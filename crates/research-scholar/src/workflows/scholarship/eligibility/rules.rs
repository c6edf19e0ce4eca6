use serde::{Deserialize, Serialize};

use super::super::domain::{EligibilityRules, StudentProfile};
use super::super::normalizer::eq_ignore_case;

/// Whether an unmet rule disqualifies the applicant or only annotates the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSeverity {
    Hard,
    Advisory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityRuleKind {
    MinimumGpa,
    Major,
    Citizenship,
    Demographics,
}

/// Result of a single rule; `unmet` carries the reason when the rule failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: EligibilityRuleKind,
    pub severity: RuleSeverity,
    pub unmet: Option<String>,
}

impl RuleOutcome {
    pub fn passed(&self) -> bool {
        self.unmet.is_none()
    }

    pub fn disqualifies(&self) -> bool {
        self.severity == RuleSeverity::Hard && !self.passed()
    }
}

type RuleCheck = fn(&StudentProfile, &EligibilityRules) -> Option<String>;

struct EligibilityRule {
    kind: EligibilityRuleKind,
    severity: RuleSeverity,
    check: RuleCheck,
}

// Evaluation order is reflected in the reasons list.
const RULE_TABLE: [EligibilityRule; 4] = [
    EligibilityRule {
        kind: EligibilityRuleKind::MinimumGpa,
        severity: RuleSeverity::Hard,
        check: check_gpa,
    },
    EligibilityRule {
        kind: EligibilityRuleKind::Major,
        severity: RuleSeverity::Hard,
        check: check_major,
    },
    EligibilityRule {
        kind: EligibilityRuleKind::Citizenship,
        severity: RuleSeverity::Hard,
        check: check_citizenship,
    },
    EligibilityRule {
        kind: EligibilityRuleKind::Demographics,
        severity: RuleSeverity::Advisory,
        check: check_demographics,
    },
];

pub(crate) fn evaluate_rules(profile: &StudentProfile, rules: &EligibilityRules) -> Vec<RuleOutcome> {
    RULE_TABLE
        .iter()
        .map(|rule| RuleOutcome {
            rule: rule.kind,
            severity: rule.severity,
            unmet: (rule.check)(profile, rules),
        })
        .collect()
}

fn check_gpa(profile: &StudentProfile, rules: &EligibilityRules) -> Option<String> {
    if profile.gpa < rules.min_gpa {
        Some(format!("GPA {:?} < required {:?}", profile.gpa, rules.min_gpa))
    } else {
        None
    }
}

fn check_major(profile: &StudentProfile, rules: &EligibilityRules) -> Option<String> {
    if rules.majors.permits(&profile.major) {
        None
    } else {
        Some("Major not in eligible list".to_string())
    }
}

fn check_citizenship(profile: &StudentProfile, rules: &EligibilityRules) -> Option<String> {
    if rules.citizenship.permits(&profile.citizenship) {
        None
    } else {
        Some("Citizenship requirement not met".to_string())
    }
}

fn check_demographics(profile: &StudentProfile, rules: &EligibilityRules) -> Option<String> {
    let preferred: Vec<&String> = rules
        .demographics
        .iter()
        .filter(|tag| !tag.trim().is_empty())
        .collect();
    if preferred.is_empty() {
        return None;
    }

    let matched = preferred.iter().any(|tag| {
        profile
            .demographics
            .values()
            .any(|value| eq_ignore_case(value, tag))
    });

    if matched {
        None
    } else {
        Some("Demographic preference not matched".to_string())
    }
}
