use super::common::*;
use crate::workflows::scholarship::schedule::{plan_schedule, plan_schedules};
use crate::workflows::scholarship::{ApplicationTimelineBlueprint, EffortLevel, PipelineError};

#[test]
fn milestones_are_anchored_backward_from_deadline() {
    let blueprint = ApplicationTimelineBlueprint::standard();
    let scholarship = opportunity("RS-001", 15_000, EffortLevel::High, date(2025, 2, 15));

    let schedule = plan_schedule(&blueprint, &scholarship, today()).expect("schedule");

    let plan: Vec<(&str, chrono::NaiveDate)> = schedule
        .milestones
        .iter()
        .map(|milestone| (milestone.label.as_str(), milestone.due))
        .collect();
    assert_eq!(
        plan,
        vec![
            ("Confirm eligibility + requirements", date(2025, 1, 18)),
            ("Draft essays & CV updates", date(2025, 1, 25)),
            ("Secure LOR commitments", date(2025, 2, 1)),
            ("Final review & submit", date(2025, 2, 12)),
        ]
    );
    assert_eq!(schedule.days_until_deadline, 45);
    assert!(!schedule.is_expired());
}

#[test]
fn past_deadlines_produce_negative_day_counts() {
    let blueprint = ApplicationTimelineBlueprint::standard();
    let scholarship = opportunity("RS-003", 5_000, EffortLevel::Low, date(2024, 12, 10));

    let schedule = plan_schedule(&blueprint, &scholarship, today()).expect("schedule");

    assert_eq!(schedule.days_until_deadline, -22);
    assert!(schedule.is_expired());
    assert_eq!(schedule.milestones.len(), 4);
}

#[test]
fn schedules_cover_at_most_top_n_entries() {
    let blueprint = ApplicationTimelineBlueprint::standard();
    let ranked = ranked(&["RS-A", "RS-B", "RS-C"]);

    assert_eq!(plan_schedules(&blueprint, &ranked, 2, today()).expect("schedules").len(), 2);
    assert_eq!(plan_schedules(&blueprint, &ranked, 8, today()).expect("schedules").len(), 3);
}

#[test]
fn schedule_serializes_with_report_field_names() {
    let blueprint = ApplicationTimelineBlueprint::standard();
    let scholarship = opportunity("RS-001", 15_000, EffortLevel::High, date(2025, 2, 15));

    let value =
        serde_json::to_value(plan_schedule(&blueprint, &scholarship, today()).expect("schedule"))
            .expect("serializes");

    assert_eq!(value["starts_in_days"], 45);
    assert_eq!(value["deadline"], "2025-02-15");
    assert_eq!(value["milestones"][3]["label"], "Final review & submit");
    assert_eq!(value["milestones"][3]["due"], "2025-02-12");
}

#[test]
fn deadlines_at_the_calendar_floor_are_rejected() {
    let blueprint = ApplicationTimelineBlueprint::standard();
    let scholarship = opportunity("RS-MIN", 1_000, EffortLevel::Low, chrono::NaiveDate::MIN);

    match plan_schedule(&blueprint, &scholarship, today()) {
        Err(PipelineError::InputValidation { field, .. }) => assert_eq!(field, "deadline"),
        other => panic!("expected deadline rejection, got {other:?}"),
    }
}
