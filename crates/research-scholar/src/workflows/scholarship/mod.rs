//! Scholarship discovery workflow: catalog, the six pipeline stages and the orchestrator
//! that chains them into a single report.

pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod error;
pub mod materials;
mod normalizer;
pub mod orchestrator;
pub mod profile;
pub mod ranking;
pub mod router;
pub mod schedule;
pub mod search;
pub mod universities;
pub mod verification;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogImportError, ScholarshipCatalog};
pub use domain::{
    ApplicationMaterial, ArtifactKind, EffortLevel, EligibilityRules, EligibilityVerdict,
    Milestone, MilestoneSchedule, QaReport, RankedEntry, RuleScope, ScholarshipId,
    ScholarshipOpportunity, StudentProfile, PROFILE_PLACEHOLDER,
};
pub use eligibility::{EligibilityEngine, EligibilityRuleKind, RuleOutcome, RuleSeverity};
pub use error::PipelineError;
pub use materials::generate_materials;
pub use orchestrator::{ScholarshipPipeline, ScholarshipReport};
pub use profile::{
    extract_profile, ExtractedDemographics, ExtractedProfile, ExtractionError,
    JsonPayloadExtractor, ProfileExtractor,
};
pub use ranking::{rank_verdicts, ScoreBreakdown};
pub use router::{scholarship_router, ReportRequest};
pub use schedule::{plan_schedule, plan_schedules, ApplicationTimelineBlueprint};
pub use search::search_opportunities;
pub use universities::{demo_programs, match_universities, UniversityMatch, UniversityProgram};
pub use verification::verify_materials;
