mod demo;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{ScholarshipId, ScholarshipOpportunity};
use super::error::PipelineError;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Invalid(PipelineError),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read scholarship catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid catalog JSON data: {}", err),
            CatalogImportError::Invalid(err) => write!(f, "catalog rejected: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<PipelineError> for CatalogImportError {
    fn from(err: PipelineError) -> Self {
        Self::Invalid(err)
    }
}

/// Read-only listing of opportunities, built once and shared by every pipeline run.
#[derive(Debug, Clone)]
pub struct ScholarshipCatalog {
    opportunities: Vec<ScholarshipOpportunity>,
}

impl ScholarshipCatalog {
    pub fn new(opportunities: Vec<ScholarshipOpportunity>) -> Result<Self, PipelineError> {
        let mut seen: HashSet<&ScholarshipId> = HashSet::new();
        for opportunity in &opportunities {
            if opportunity.id.as_str().trim().is_empty() {
                return Err(PipelineError::invalid(
                    "id",
                    format!("opportunity '{}' has an empty id", opportunity.title),
                ));
            }
            if !seen.insert(&opportunity.id) {
                return Err(PipelineError::invalid(
                    "id",
                    format!("duplicate scholarship id {}", opportunity.id),
                ));
            }
        }

        Ok(Self { opportunities })
    }

    pub fn demo() -> Self {
        Self {
            opportunities: demo::demo_opportunities(),
        }
    }

    /// Load a catalog file; `.json` is a JSON array, anything else is CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogImportError::Invalid(PipelineError::NotFound {
                resource: format!("catalog file {}", path.display()),
            }));
        }

        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_csv_reader(file)
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let opportunities = parser::parse_csv(reader)?;
        Ok(Self::new(opportunities)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let opportunities = parser::parse_json(reader)?;
        Ok(Self::new(opportunities)?)
    }

    pub fn opportunities(&self) -> &[ScholarshipOpportunity] {
        &self.opportunities
    }

    pub fn get(&self, id: &ScholarshipId) -> Option<&ScholarshipOpportunity> {
        self.opportunities
            .iter()
            .find(|opportunity| &opportunity.id == id)
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}

impl Default for ScholarshipCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::scholarship::domain::{EffortLevel, RuleScope};
    use std::io::Cursor;

    const HEADER: &str = "id,title,sponsor,amount,currency,deadline,min_gpa,majors,citizenship,location,demographics,effort_level,description,url\n";

    #[test]
    fn demo_catalog_lists_three_opportunities_in_order() {
        let catalog = ScholarshipCatalog::demo();
        let ids: Vec<&str> = catalog
            .opportunities()
            .iter()
            .map(|opportunity| opportunity.id.as_str())
            .collect();
        assert_eq!(ids, vec!["RS-001", "RS-002", "RS-003"]);
    }

    #[test]
    fn demo_deadlines_are_real_dates() {
        let deadlines: Vec<String> = ScholarshipCatalog::demo()
            .opportunities()
            .iter()
            .map(|opportunity| opportunity.deadline.to_string())
            .collect();
        assert_eq!(deadlines, vec!["2025-02-15", "2025-01-05", "2024-12-10"]);
    }

    #[test]
    fn csv_rows_become_opportunities() {
        let csv = format!(
            "{HEADER}RS-100,Data Fellowship,Open Data Trust,12000,EUR,2026-03-01,3.3,data science;statistics,Any,,women,Medium,Funds open data work.,https://example.org/rs-100\n"
        );

        let catalog = ScholarshipCatalog::from_csv_reader(Cursor::new(csv)).expect("csv parses");
        let opportunity = catalog
            .get(&ScholarshipId::from("RS-100"))
            .expect("opportunity present");

        assert_eq!(opportunity.amount, 12_000);
        assert_eq!(
            opportunity.deadline,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid")
        );
        assert_eq!(opportunity.eligibility.min_gpa, 3.3);
        assert!(opportunity.eligibility.majors.permits("Statistics"));
        assert!(opportunity.eligibility.citizenship.is_unconstrained());
        assert!(opportunity.eligibility.location.is_unconstrained());
        assert_eq!(opportunity.eligibility.demographics, vec!["women".to_string()]);
        assert_eq!(opportunity.effort_level, EffortLevel::Medium);
    }

    #[test]
    fn csv_rejects_unparseable_deadlines() {
        let csv = format!("{HEADER}RS-101,Bad Date,Sponsor,1000,USD,next spring,,,,,,Low,,\n");

        match ScholarshipCatalog::from_csv_reader(Cursor::new(csv)) {
            Err(CatalogImportError::Invalid(PipelineError::InputValidation { field, .. })) => {
                assert_eq!(field, "deadline")
            }
            other => panic!("expected deadline validation error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut opportunities = ScholarshipCatalog::demo().opportunities().to_vec();
        opportunities.push(opportunities[0].clone());

        match ScholarshipCatalog::new(opportunities) {
            Err(PipelineError::InputValidation { field, reason }) => {
                assert_eq!(field, "id");
                assert!(reason.contains("RS-001"));
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn json_catalog_accepts_any_sentinel_lists() {
        let json = r#"[{
            "id": "RS-200",
            "title": "Community Builders Award",
            "sponsor": "Civic Lab",
            "amount": 2500,
            "currency": "USD",
            "deadline": "2026-05-01",
            "eligibility": {"min_gpa": 2.5, "majors": ["Any"], "location": ["any"], "citizenship": []},
            "effort_level": "Low"
        }]"#;

        let catalog =
            ScholarshipCatalog::from_json_reader(Cursor::new(json)).expect("json parses");
        let rules = &catalog.opportunities()[0].eligibility;
        assert_eq!(rules.majors, RuleScope::Unconstrained);
        assert_eq!(rules.location, RuleScope::Unconstrained);
        assert_eq!(rules.citizenship, RuleScope::Unconstrained);
    }

    #[test]
    fn missing_catalog_file_is_not_found() {
        match ScholarshipCatalog::from_path("/nonexistent/catalog.csv") {
            Err(CatalogImportError::Invalid(PipelineError::NotFound { resource })) => {
                assert!(resource.contains("catalog.csv"))
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
