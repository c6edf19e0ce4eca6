use chrono::{Days, NaiveDate};

use super::super::error::PipelineError;

/// Offset rule anchoring a milestone to the scholarship deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneDueRule {
    DaysBeforeDeadline(u32),
}

impl MilestoneDueRule {
    /// Fails when the offset would step past the earliest representable date.
    pub(crate) fn resolve(&self, deadline: NaiveDate) -> Result<NaiveDate, PipelineError> {
        match self {
            MilestoneDueRule::DaysBeforeDeadline(days) => deadline
                .checked_sub_days(Days::new(u64::from(*days)))
                .ok_or_else(|| {
                    PipelineError::invalid(
                        "deadline",
                        format!("{deadline} is too early to plan {days} days ahead"),
                    )
                }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneTemplate {
    pub label: &'static str,
    pub due: MilestoneDueRule,
}

#[derive(Debug)]
pub struct ApplicationTimelineBlueprint {
    milestones: Vec<MilestoneTemplate>,
}

impl ApplicationTimelineBlueprint {
    pub fn standard() -> Self {
        Self {
            milestones: standard_milestones(),
        }
    }

    pub fn milestones(&self) -> &[MilestoneTemplate] {
        &self.milestones
    }
}

impl Default for ApplicationTimelineBlueprint {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_milestones() -> Vec<MilestoneTemplate> {
    vec![
        MilestoneTemplate {
            label: "Confirm eligibility + requirements",
            due: MilestoneDueRule::DaysBeforeDeadline(28),
        },
        MilestoneTemplate {
            label: "Draft essays & CV updates",
            due: MilestoneDueRule::DaysBeforeDeadline(21),
        },
        MilestoneTemplate {
            label: "Secure LOR commitments",
            due: MilestoneDueRule::DaysBeforeDeadline(14),
        },
        MilestoneTemplate {
            label: "Final review & submit",
            due: MilestoneDueRule::DaysBeforeDeadline(3),
        },
    ]
}
