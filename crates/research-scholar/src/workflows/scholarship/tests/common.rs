use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::PipelineSettings;
use crate::workflows::scholarship::domain::{
    ApplicationMaterial, EffortLevel, EligibilityRules, EligibilityVerdict, RankedEntry,
    RuleScope, ScholarshipId, ScholarshipOpportunity, StudentProfile,
};
use crate::workflows::scholarship::eligibility::STRONG_FIT_SUMMARY;
use crate::workflows::scholarship::{ScholarshipCatalog, ScholarshipPipeline};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 1, 1)
}

pub(super) fn student() -> StudentProfile {
    StudentProfile {
        name: "Ada Park".to_string(),
        email: "ada.park@example.edu".to_string(),
        academic_level: "Undergraduate".to_string(),
        gpa: 3.8,
        major: "computer science".to_string(),
        location: "global".to_string(),
        citizenship: "Any".to_string(),
        interests: vec!["AI".to_string()],
        demographics: BTreeMap::new(),
        skills: vec!["Rust".to_string(), "Python".to_string()],
        goals: "Build accessible AI tooling for first-gen students.".to_string(),
        experiences: vec!["Led robotics club".to_string()],
        preferred_countries: Vec::new(),
    }
}

pub(super) fn student_with_demographic(category: &str, value: &str) -> StudentProfile {
    let mut profile = student();
    profile
        .demographics
        .insert(category.to_string(), value.to_string());
    profile
}

pub(super) fn opportunity(
    id: &str,
    amount: u64,
    effort_level: EffortLevel,
    deadline: NaiveDate,
) -> ScholarshipOpportunity {
    ScholarshipOpportunity {
        id: ScholarshipId::from(id),
        title: format!("Award {id}"),
        sponsor: "Fixture Foundation".to_string(),
        amount,
        currency: "USD".to_string(),
        deadline,
        eligibility: EligibilityRules {
            min_gpa: 3.0,
            majors: RuleScope::restricted(["computer science"]),
            citizenship: RuleScope::Unconstrained,
            location: RuleScope::Unconstrained,
            demographics: Vec::new(),
        },
        effort_level,
        description: "Fixture opportunity.".to_string(),
        url: format!("https://example.org/{id}"),
    }
}

pub(super) fn strong_verdict(opportunity: ScholarshipOpportunity) -> EligibilityVerdict {
    EligibilityVerdict {
        scholarship: opportunity,
        fit_summary: STRONG_FIT_SUMMARY.to_string(),
        reasons: Vec::new(),
    }
}

pub(super) fn rejected_verdict(opportunity: ScholarshipOpportunity) -> EligibilityVerdict {
    EligibilityVerdict {
        scholarship: opportunity,
        fit_summary: "Rejected: Major not in eligible list".to_string(),
        reasons: vec!["Major not in eligible list".to_string()],
    }
}

pub(super) fn ranked(ids: &[&str]) -> Vec<RankedEntry> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| RankedEntry {
            scholarship: opportunity(id, 1_000, EffortLevel::Low, date(2025, 3, 1)),
            score: 90.0 - index as f64,
            reasoning: "Fit penalty 0, amount 1, effort 20, urgency 0".to_string(),
        })
        .collect()
}

pub(super) fn complete_material(id: &str) -> ApplicationMaterial {
    ApplicationMaterial {
        scholarship_id: ScholarshipId::from(id),
        essay_outline: "1. Hook\n2. Impact\n3. Alignment\n4. Future plan".to_string(),
        cv_bullets: vec!["Led AI initiative delivering measurable outcomes.".to_string()],
        lor_prompt: "Describe leadership.".to_string(),
    }
}

pub(super) fn settings(top_n: usize) -> PipelineSettings {
    PipelineSettings {
        top_n,
        ..PipelineSettings::default()
    }
}

pub(super) fn demo_pipeline() -> ScholarshipPipeline {
    ScholarshipPipeline::new(Arc::new(ScholarshipCatalog::demo()), settings(3)).with_today(today())
}
