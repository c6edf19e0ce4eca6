mod blueprint;

pub use blueprint::{ApplicationTimelineBlueprint, MilestoneDueRule, MilestoneTemplate};

use chrono::NaiveDate;

use super::domain::{Milestone, MilestoneSchedule, RankedEntry, ScholarshipOpportunity};
use super::error::PipelineError;

/// Plan milestones backward from each of the first `top_n` deadlines.
///
/// Past deadlines are not rejected; they surface as a negative `days_until_deadline`.
pub fn plan_schedules(
    blueprint: &ApplicationTimelineBlueprint,
    ranked: &[RankedEntry],
    top_n: usize,
    today: NaiveDate,
) -> Result<Vec<MilestoneSchedule>, PipelineError> {
    ranked
        .iter()
        .take(top_n)
        .map(|entry| plan_schedule(blueprint, &entry.scholarship, today))
        .collect()
}

pub fn plan_schedule(
    blueprint: &ApplicationTimelineBlueprint,
    scholarship: &ScholarshipOpportunity,
    today: NaiveDate,
) -> Result<MilestoneSchedule, PipelineError> {
    let deadline = scholarship.deadline;
    let milestones = blueprint
        .milestones()
        .iter()
        .map(|template| {
            Ok(Milestone {
                label: template.label.to_string(),
                due: template.due.resolve(deadline)?,
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    Ok(MilestoneSchedule {
        scholarship_id: scholarship.id.clone(),
        deadline,
        days_until_deadline: deadline.signed_duration_since(today).num_days(),
        milestones,
    })
}
