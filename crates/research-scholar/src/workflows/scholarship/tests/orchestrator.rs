use std::sync::Arc;

use super::common::*;
use crate::workflows::scholarship::{
    PipelineError, ScholarshipCatalog, ScholarshipPipeline, PROFILE_PLACEHOLDER,
};

#[test]
fn computer_science_query_runs_end_to_end() {
    let pipeline = demo_pipeline();

    let report = pipeline
        .run("computer science", &student(), 3)
        .expect("pipeline runs");

    let found: Vec<&str> = report
        .seeker
        .scholarships
        .iter()
        .map(|opportunity| opportunity.id.as_str())
        .collect();
    assert_eq!(found, vec!["RS-001", "RS-003"]);
    assert!(report
        .matcher
        .eligibility
        .iter()
        .all(|verdict| verdict.is_strong_fit()));

    let ranked: Vec<(&str, f64)> = report
        .ranker
        .ranked
        .iter()
        .map(|entry| (entry.scholarship.id.as_str(), entry.score))
        .collect();
    assert_eq!(ranked, vec![("RS-003", 95.0), ("RS-001", 85.0)]);

    assert_eq!(report.writer.materials.len(), 2);
    assert_eq!(report.tracker.schedules.len(), 2);
    assert!(report.verifier.qa_reports.iter().all(|qa| qa.ready));
    assert_eq!(report.universities.recommendations.len(), 3);
}

#[test]
fn ranked_list_mirrors_eligibility_list() {
    let pipeline = demo_pipeline();
    let mut profile = student();
    profile.location = String::new();

    let report = pipeline.run("", &profile, 10).expect("pipeline runs");

    assert_eq!(report.ranker.ranked.len(), report.matcher.eligibility.len());
    assert_eq!(report.writer.materials.len(), 3);
    let rejected = report
        .matcher
        .eligibility
        .iter()
        .find(|verdict| verdict.scholarship.id.as_str() == "RS-002")
        .expect("RS-002 evaluated");
    assert!(!rejected.is_strong_fit());
}

#[test]
fn report_serializes_with_stage_keys() {
    let report = demo_pipeline()
        .run("computer science", &student(), 3)
        .expect("pipeline runs");

    let value = serde_json::to_value(&report).expect("serializes");

    assert_eq!(value["query"], "computer science");
    assert_eq!(value["profile"]["name"], "Ada Park");
    assert!(value["seeker"]["scholarships"].is_array());
    assert!(value["matcher"]["eligibility"][0]["fit_summary"].is_string());
    assert_eq!(value["ranker"]["ranked"][0]["score"], 95.0);
    assert!(value["writer"]["materials"][0]["essay_outline"].is_string());
    assert_eq!(value["tracker"]["schedules"][1]["milestones"][3]["due"], "2025-02-12");
    assert_eq!(value["verifier"]["qa_reports"][0]["ready"], true);
    assert_eq!(value["universities"]["recommendations"][0]["university"]["id"], "UNI-001");
}

#[test]
fn zero_limit_is_rejected() {
    match demo_pipeline().run("computer science", &student(), 0) {
        Err(PipelineError::InputValidation { field, .. }) => assert_eq!(field, "limit"),
        other => panic!("expected limit validation error, got {other:?}"),
    }
}

#[test]
fn out_of_range_gpa_aborts_the_run() {
    let mut profile = student();
    profile.gpa = 4.3;

    match demo_pipeline().run("computer science", &profile, 3) {
        Err(PipelineError::InputValidation { field, .. }) => assert_eq!(field, "gpa"),
        other => panic!("expected gpa validation error, got {other:?}"),
    }
}

#[test]
fn top_n_setting_bounds_downstream_stages() {
    let pipeline = ScholarshipPipeline::new(Arc::new(ScholarshipCatalog::demo()), settings(1))
        .with_today(today());
    let mut profile = student();
    profile.location = String::new();
    profile.interests.clear();

    let report = pipeline.run("", &profile, 10).expect("pipeline runs");

    assert_eq!(report.ranker.ranked.len(), 3);
    assert_eq!(report.writer.materials.len(), 1);
    assert_eq!(report.tracker.schedules.len(), 1);
    assert_eq!(report.verifier.qa_reports.len(), 1);
    assert_eq!(report.universities.recommendations.len(), 1);
    assert!(report.writer.materials[0].cv_bullets[0].contains(PROFILE_PLACEHOLDER));
}

#[test]
fn pinned_date_drives_urgency_and_countdown() {
    let pipeline = demo_pipeline().with_today(date(2024, 12, 31));

    let report = pipeline
        .run("computer science", &student(), 3)
        .expect("pipeline runs");

    let rs001 = report
        .ranker
        .ranked
        .iter()
        .find(|entry| entry.scholarship.id.as_str() == "RS-001")
        .expect("RS-001 ranked");
    assert_eq!(rs001.score, 75.0);
    assert_eq!(report.tracker.schedules[1].days_until_deadline, 46);
}
