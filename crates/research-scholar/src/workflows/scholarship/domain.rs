use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::PipelineError;
use super::normalizer::{eq_ignore_case, is_any_sentinel};

/// Value substituted when a profile has no interests or experiences to template from.
pub const PROFILE_PLACEHOLDER: &str = "General";

const MAX_GPA: f64 = 4.0;

/// Identifier wrapper for catalog opportunities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScholarshipId(pub String);

impl ScholarshipId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScholarshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScholarshipId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Applicant snapshot consumed by every stage. Treated as read-only for the length of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub academic_level: String,
    pub gpa: f64,
    pub major: String,
    pub location: String,
    pub citizenship: String,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Category → free-text descriptor (e.g. `gender` → `women`). Non-string JSON values are dropped.
    #[serde(default, deserialize_with = "string_values_only")]
    pub demographics: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub preferred_countries: Vec<String>,
}

impl StudentProfile {
    /// Parse a profile JSON document and check its invariants.
    pub fn from_json_str(raw: &str) -> Result<Self, PipelineError> {
        let profile: StudentProfile =
            serde_json::from_str(raw).map_err(|err| PipelineError::InputValidation {
                field: "profile".to_string(),
                reason: err.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.gpa.is_finite() || self.gpa < 0.0 || self.gpa > MAX_GPA {
            return Err(PipelineError::InputValidation {
                field: "gpa".to_string(),
                reason: format!("GPA {} must be between 0.0 and {MAX_GPA:.1}", self.gpa),
            });
        }

        Ok(())
    }

    pub fn first_interest(&self) -> &str {
        first_or_placeholder(&self.interests)
    }

    pub fn first_experience(&self) -> &str {
        first_or_placeholder(&self.experiences)
    }

    /// True when any demographic descriptor equals `tag`, ignoring case.
    pub fn has_demographic(&self, tag: &str) -> bool {
        self.demographics
            .values()
            .any(|value| eq_ignore_case(value, tag))
    }
}

fn first_or_placeholder(values: &[String]) -> &str {
    values
        .iter()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .unwrap_or(PROFILE_PLACEHOLDER)
}

fn string_values_only<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}

/// Eligibility list that is either open to everyone or restricted to named values.
///
/// On the wire this is a plain list; an empty list or one containing `"Any"` (any casing)
/// means unconstrained, and unconstrained scopes serialize back as `["Any"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum RuleScope {
    #[default]
    Unconstrained,
    RestrictedTo(Vec<String>),
}

impl RuleScope {
    pub fn restricted<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from(values.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, RuleScope::Unconstrained)
    }

    pub fn permits(&self, value: &str) -> bool {
        match self {
            RuleScope::Unconstrained => true,
            RuleScope::RestrictedTo(values) => {
                values.iter().any(|allowed| eq_ignore_case(allowed, value))
            }
        }
    }
}

impl From<Vec<String>> for RuleScope {
    fn from(values: Vec<String>) -> Self {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        if values.is_empty() || values.iter().any(|value| is_any_sentinel(value)) {
            RuleScope::Unconstrained
        } else {
            RuleScope::RestrictedTo(values)
        }
    }
}

impl From<RuleScope> for Vec<String> {
    fn from(scope: RuleScope) -> Self {
        match scope {
            RuleScope::Unconstrained => vec!["Any".to_string()],
            RuleScope::RestrictedTo(values) => values,
        }
    }
}

/// Rules a sponsor publishes for an opportunity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRules {
    #[serde(default)]
    pub min_gpa: f64,
    #[serde(default)]
    pub majors: RuleScope,
    #[serde(default)]
    pub citizenship: RuleScope,
    #[serde(default)]
    pub location: RuleScope,
    /// Preferred demographic tags. Advisory only; never disqualifies.
    #[serde(default)]
    pub demographics: Vec<String>,
}

/// Applicant work an opportunity demands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffortLevel {
    Low,
    Medium,
    High,
    Unrated(String),
}

impl EffortLevel {
    pub fn label(&self) -> &str {
        match self {
            EffortLevel::Low => "Low",
            EffortLevel::Medium => "Medium",
            EffortLevel::High => "High",
            EffortLevel::Unrated(raw) => raw,
        }
    }
}

impl From<String> for EffortLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => EffortLevel::Low,
            "Medium" => EffortLevel::Medium,
            "High" => EffortLevel::High,
            _ => EffortLevel::Unrated(value),
        }
    }
}

impl From<EffortLevel> for String {
    fn from(level: EffortLevel) -> Self {
        level.label().to_string()
    }
}

/// Catalog entry describing a scholarship offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipOpportunity {
    pub id: ScholarshipId,
    pub title: String,
    pub sponsor: String,
    pub amount: u64,
    pub currency: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub eligibility: EligibilityRules,
    pub effort_level: EffortLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

/// Eligibility stage output: the opportunity plus the verdict trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub scholarship: ScholarshipOpportunity,
    pub fit_summary: String,
    /// Every unmet rule in evaluation order, advisory ones included.
    pub reasons: Vec<String>,
}

impl EligibilityVerdict {
    pub fn is_strong_fit(&self) -> bool {
        self.fit_summary.starts_with("Strong")
    }
}

/// Ranking stage output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub scholarship: ScholarshipOpportunity,
    pub score: f64,
    pub reasoning: String,
}

/// Drafted application packet for one ranked scholarship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMaterial {
    pub scholarship_id: ScholarshipId,
    pub essay_outline: String,
    pub cv_bullets: Vec<String>,
    pub lor_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub due: NaiveDate,
}

/// Backward-planned milestones toward one deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSchedule {
    pub scholarship_id: ScholarshipId,
    pub deadline: NaiveDate,
    /// Signed; negative once the deadline has passed.
    #[serde(rename = "starts_in_days")]
    pub days_until_deadline: i64,
    pub milestones: Vec<Milestone>,
}

impl MilestoneSchedule {
    pub fn is_expired(&self) -> bool {
        self.days_until_deadline < 0
    }
}

/// Artifacts every application packet must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    EssayOutline,
    CvBullets,
    LorPrompt,
}

impl ArtifactKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::EssayOutline, Self::CvBullets, Self::LorPrompt]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EssayOutline => "Essay outline",
            Self::CvBullets => "CV bullets",
            Self::LorPrompt => "LOR prompt",
        }
    }
}

/// Readiness verdict for one scholarship's packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaReport {
    pub scholarship_id: ScholarshipId,
    pub ready: bool,
    pub missing: Vec<String>,
    pub notes: String,
}

/// Fails with a contract violation when `ids` repeats a scholarship.
pub(crate) fn ensure_unique_ids<'a, I>(stage: &'static str, ids: I) -> Result<(), PipelineError>
where
    I: IntoIterator<Item = &'a ScholarshipId>,
{
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PipelineError::ContractViolation {
                stage,
                detail: format!("scholarship {id} appears more than once"),
            });
        }
    }

    Ok(())
}
