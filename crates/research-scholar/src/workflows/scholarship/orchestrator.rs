use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::catalog::ScholarshipCatalog;
use super::domain::{
    ApplicationMaterial, EligibilityVerdict, MilestoneSchedule, QaReport, RankedEntry,
    ScholarshipOpportunity, StudentProfile,
};
use super::eligibility::EligibilityEngine;
use super::error::PipelineError;
use super::materials::generate_materials;
use super::ranking::rank_verdicts;
use super::schedule::{plan_schedules, ApplicationTimelineBlueprint};
use super::search::search_opportunities;
use super::universities::{demo_programs, match_universities, UniversityMatch, UniversityProgram};
use super::verification::verify_materials;
use crate::config::PipelineSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerOutput {
    pub scholarships: Vec<ScholarshipOpportunity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherOutput {
    pub eligibility: Vec<EligibilityVerdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerOutput {
    pub ranked: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriterOutput {
    pub materials: Vec<ApplicationMaterial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerOutput {
    pub schedules: Vec<MilestoneSchedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierOutput {
    pub qa_reports: Vec<QaReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityOutput {
    pub recommendations: Vec<UniversityMatch>,
}

/// Aggregate output of one pipeline run, keyed by stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipReport {
    pub query: String,
    pub profile: StudentProfile,
    pub seeker: SeekerOutput,
    pub matcher: MatcherOutput,
    pub ranker: RankerOutput,
    pub writer: WriterOutput,
    pub tracker: TrackerOutput,
    pub verifier: VerifierOutput,
    pub universities: UniversityOutput,
}

/// Runs the stages in fixed order over a shared read-only catalog.
///
/// Holds configuration only, so one instance can serve concurrent runs.
#[derive(Debug, Clone)]
pub struct ScholarshipPipeline {
    catalog: Arc<ScholarshipCatalog>,
    settings: PipelineSettings,
    eligibility: EligibilityEngine,
    timeline: Arc<ApplicationTimelineBlueprint>,
    universities: Arc<Vec<UniversityProgram>>,
    today: Option<NaiveDate>,
}

impl ScholarshipPipeline {
    pub fn new(catalog: Arc<ScholarshipCatalog>, settings: PipelineSettings) -> Self {
        Self {
            catalog,
            settings,
            eligibility: EligibilityEngine::new(),
            timeline: Arc::new(ApplicationTimelineBlueprint::standard()),
            universities: Arc::new(demo_programs()),
            today: None,
        }
    }

    /// Pin the evaluation date instead of reading the UTC clock on every run.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_universities(mut self, programs: Vec<UniversityProgram>) -> Self {
        self.universities = Arc::new(programs);
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &ScholarshipCatalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn run(
        &self,
        query: &str,
        profile: &StudentProfile,
        limit: usize,
    ) -> Result<ScholarshipReport, PipelineError> {
        self.run_as_of(query, profile, limit, self.today())
    }

    pub fn run_as_of(
        &self,
        query: &str,
        profile: &StudentProfile,
        limit: usize,
        today: NaiveDate,
    ) -> Result<ScholarshipReport, PipelineError> {
        profile.validate()?;
        if limit == 0 {
            return Err(PipelineError::invalid("limit", "limit must be at least 1"));
        }

        let top_n = self.settings.top_n;
        info!(
            query,
            limit,
            top_n,
            model = %self.settings.model,
            %today,
            "starting scholarship pipeline run"
        );

        let scholarships =
            search_opportunities(self.catalog.opportunities(), query, limit, Some(profile));
        debug!(count = scholarships.len(), "search stage complete");

        let eligibility = self.eligibility.evaluate(profile, &scholarships);
        debug!(
            count = eligibility.len(),
            eligible = eligibility.iter().filter(|verdict| verdict.is_strong_fit()).count(),
            "eligibility stage complete"
        );

        let ranked = rank_verdicts(eligibility.clone(), today);
        debug!(count = ranked.len(), "ranking stage complete");
        if ranked.len() < top_n {
            warn!(
                ranked = ranked.len(),
                top_n, "fewer ranked scholarships than configured top-N"
            );
        }

        let materials = generate_materials(profile, &ranked, top_n)?;
        debug!(count = materials.len(), "materials stage complete");

        let schedules = plan_schedules(&self.timeline, &ranked, top_n, today)?;
        for schedule in schedules.iter().filter(|schedule| schedule.is_expired()) {
            warn!(
                scholarship_id = %schedule.scholarship_id,
                days_until_deadline = schedule.days_until_deadline,
                "scholarship deadline has passed"
            );
        }
        debug!(count = schedules.len(), "scheduling stage complete");

        let qa_reports = verify_materials(&ranked, &materials, top_n)?;
        debug!(
            count = qa_reports.len(),
            ready = qa_reports.iter().filter(|report| report.ready).count(),
            "verification stage complete"
        );

        let recommendations = match_universities(profile, &self.universities, top_n);

        info!(
            scholarships = scholarships.len(),
            ranked = ranked.len(),
            materials = materials.len(),
            universities = recommendations.len(),
            "scholarship pipeline run finished"
        );

        Ok(ScholarshipReport {
            query: query.to_string(),
            profile: profile.clone(),
            seeker: SeekerOutput { scholarships },
            matcher: MatcherOutput { eligibility },
            ranker: RankerOutput { ranked },
            writer: WriterOutput { materials },
            tracker: TrackerOutput { schedules },
            verifier: VerifierOutput { qa_reports },
            universities: UniversityOutput { recommendations },
        })
    }
}
