use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::StudentProfile;
use super::error::PipelineError;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document text is empty; unable to extract a profile")]
    EmptyDocument,
    #[error("profile extraction service failed: {0}")]
    Service(String),
    #[error("extraction payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] PipelineError),
}

/// Fixed demographic descriptors an extraction service may report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractedDemographics {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub first_generation: Option<String>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub socioeconomic_status: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl ExtractedDemographics {
    /// Category → value pairs with blank descriptors removed.
    pub fn into_map(self) -> BTreeMap<String, String> {
        [
            ("gender", self.gender),
            ("first_generation", self.first_generation),
            ("ethnicity", self.ethnicity),
            ("socioeconomic_status", self.socioeconomic_status),
            ("other", self.other),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key.to_string(), value))
        })
        .collect()
    }
}

/// Profile record as returned by a CV extraction service, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown_email")]
    pub email: String,
    #[serde(default = "unknown")]
    pub academic_level: String,
    #[serde(default)]
    pub gpa: f64,
    #[serde(default = "undeclared")]
    pub major: String,
    #[serde(default = "unknown")]
    pub location: String,
    #[serde(default = "unknown")]
    pub citizenship: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub demographics: ExtractedDemographics,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "unknown")]
    pub goals: String,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub preferred_countries: Vec<String>,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn unknown_email() -> String {
    "unknown@example.com".to_string()
}

fn undeclared() -> String {
    "Undeclared".to_string()
}

impl ExtractedProfile {
    pub fn into_student_profile(self) -> Result<StudentProfile, PipelineError> {
        let profile = StudentProfile {
            name: self.name,
            email: self.email,
            academic_level: self.academic_level,
            gpa: self.gpa,
            major: self.major,
            location: self.location,
            citizenship: self.citizenship,
            interests: self.interests,
            demographics: self.demographics.into_map(),
            skills: self.skills,
            goals: self.goals,
            experiences: self.experiences,
            preferred_countries: self.preferred_countries,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Boundary to whatever turns CV text into a profile record (a hosted model, a parser).
pub trait ProfileExtractor {
    fn extract(&self, document_text: &str) -> Result<ExtractedProfile, ExtractionError>;
}

/// Extractor for payloads another tool already produced as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayloadExtractor;

impl ProfileExtractor for JsonPayloadExtractor {
    fn extract(&self, document_text: &str) -> Result<ExtractedProfile, ExtractionError> {
        Ok(serde_json::from_str(document_text)?)
    }
}

pub fn extract_profile<E>(
    extractor: &E,
    document_text: &str,
) -> Result<StudentProfile, ExtractionError>
where
    E: ProfileExtractor + ?Sized,
{
    if document_text.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    let extracted = extractor.extract(document_text)?;
    Ok(extracted.into_student_profile()?)
}
