use chrono::NaiveDate;

use super::super::domain::{
    EffortLevel, EligibilityRules, RuleScope, ScholarshipId, ScholarshipOpportunity,
};

const STEM_LEADERS_DEADLINE: NaiveDate = date(2025, 2, 15);
const ASIA_PACIFIC_DEADLINE: NaiveDate = date(2025, 1, 5);
const OPEN_SOURCE_DEADLINE: NaiveDate = date(2024, 12, 10);

/// Only called in const items, so an impossible date fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("demo deadline is not a calendar date"),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Built-in listing standing in for third-party scholarship directories.
pub(crate) fn demo_opportunities() -> Vec<ScholarshipOpportunity> {
    vec![
        ScholarshipOpportunity {
            id: ScholarshipId::from("RS-001"),
            title: "Global STEM Innovators Scholarship".to_string(),
            sponsor: "TechForward Foundation".to_string(),
            amount: 15_000,
            currency: "USD".to_string(),
            deadline: STEM_LEADERS_DEADLINE,
            eligibility: EligibilityRules {
                min_gpa: 3.5,
                majors: RuleScope::restricted(["computer science", "engineering", "data science"]),
                citizenship: RuleScope::Unconstrained,
                location: RuleScope::restricted(["global"]),
                demographics: strings(&["women", "first-generation"]),
            },
            effort_level: EffortLevel::High,
            description:
                "Supports STEM leaders in computer science building tools for social impact."
                    .to_string(),
            url: "https://example.org/scholarships/rs-001".to_string(),
        },
        ScholarshipOpportunity {
            id: ScholarshipId::from("RS-002"),
            title: "Asia-Pacific Research Grant".to_string(),
            sponsor: "APAC Scholars".to_string(),
            amount: 8_000,
            currency: "USD".to_string(),
            deadline: ASIA_PACIFIC_DEADLINE,
            eligibility: EligibilityRules {
                min_gpa: 3.2,
                majors: RuleScope::restricted(["international relations", "computer science"]),
                citizenship: RuleScope::restricted(["Australia", "New Zealand"]),
                location: RuleScope::restricted(["Australia", "New Zealand"]),
                demographics: Vec::new(),
            },
            effort_level: EffortLevel::Medium,
            description: "Funds cross-border research tackling regional challenges.".to_string(),
            url: "https://example.org/scholarships/rs-002".to_string(),
        },
        ScholarshipOpportunity {
            id: ScholarshipId::from("RS-003"),
            title: "Open Source Impact Award".to_string(),
            sponsor: "Code4Good".to_string(),
            amount: 5_000,
            currency: "USD".to_string(),
            deadline: OPEN_SOURCE_DEADLINE,
            eligibility: EligibilityRules {
                min_gpa: 3.0,
                majors: RuleScope::restricted(["computer science", "software engineering"]),
                citizenship: RuleScope::Unconstrained,
                location: RuleScope::Unconstrained,
                demographics: Vec::new(),
            },
            effort_level: EffortLevel::Low,
            description:
                "Recognizes computer science students maintaining high-impact OSS projects."
                    .to_string(),
            url: "https://example.org/scholarships/rs-003".to_string(),
        },
    ]
}
