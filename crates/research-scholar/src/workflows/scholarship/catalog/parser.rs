use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{
    EffortLevel, EligibilityRules, RuleScope, ScholarshipId, ScholarshipOpportunity,
};
use super::super::error::PipelineError;
use super::CatalogImportError;

const LIST_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    sponsor: String,
    amount: u64,
    #[serde(default)]
    currency: String,
    deadline: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    min_gpa: f64,
    #[serde(default)]
    majors: String,
    #[serde(default)]
    citizenship: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    demographics: String,
    effort_level: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
}

impl CatalogRow {
    fn into_opportunity(self) -> Result<ScholarshipOpportunity, PipelineError> {
        let deadline = parse_deadline(&self.id, &self.deadline)?;

        Ok(ScholarshipOpportunity {
            id: ScholarshipId(self.id.trim().to_string()),
            title: self.title,
            sponsor: self.sponsor,
            amount: self.amount,
            currency: self.currency,
            deadline,
            eligibility: EligibilityRules {
                min_gpa: self.min_gpa,
                majors: RuleScope::from(split_list(&self.majors)),
                citizenship: RuleScope::from(split_list(&self.citizenship)),
                location: RuleScope::from(split_list(&self.location)),
                demographics: split_list(&self.demographics),
            },
            effort_level: EffortLevel::from(self.effort_level),
            description: self.description,
            url: self.url,
        })
    }
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<ScholarshipOpportunity>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut opportunities = Vec::new();

    for row in csv_reader.deserialize::<CatalogRow>() {
        opportunities.push(row?.into_opportunity()?);
    }

    Ok(opportunities)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<ScholarshipOpportunity>, CatalogImportError> {
    let opportunities: Vec<ScholarshipOpportunity> = serde_json::from_reader(reader)?;
    Ok(opportunities)
}

pub(crate) fn parse_deadline(id: &str, raw: &str) -> Result<NaiveDate, PipelineError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| {
        PipelineError::invalid(
            "deadline",
            format!("{id}: '{raw}' is not a YYYY-MM-DD date ({err})"),
        )
    })
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(value) => value.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_cells_split_on_semicolons() {
        assert_eq!(
            split_list(" computer science ; engineering;; "),
            vec!["computer science".to_string(), "engineering".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn deadline_errors_name_the_opportunity() {
        match parse_deadline("RS-404", "15/02/2025") {
            Err(PipelineError::InputValidation { field, reason }) => {
                assert_eq!(field, "deadline");
                assert!(reason.contains("RS-404"));
            }
            other => panic!("expected deadline validation error, got {other:?}"),
        }
    }
}
