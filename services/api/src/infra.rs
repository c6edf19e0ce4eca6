use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use research_scholar::config::PipelineSettings;
use research_scholar::workflows::scholarship::{
    CatalogImportError, ScholarshipCatalog, ScholarshipPipeline,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from `catalog_path` when configured, otherwise the built-in listing.
pub(crate) fn load_catalog(
    settings: &PipelineSettings,
) -> Result<ScholarshipCatalog, CatalogImportError> {
    match &settings.catalog_path {
        Some(path) => ScholarshipCatalog::from_path(path),
        None => Ok(ScholarshipCatalog::demo()),
    }
}

pub(crate) fn build_pipeline(
    settings: &PipelineSettings,
) -> Result<ScholarshipPipeline, CatalogImportError> {
    let catalog = load_catalog(settings)?;
    Ok(ScholarshipPipeline::new(Arc::new(catalog), settings.clone()))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_scholar::workflows::scholarship::PipelineError;
    use std::path::PathBuf;

    #[test]
    fn default_settings_use_builtin_catalog() {
        let pipeline = build_pipeline(&PipelineSettings::default()).expect("pipeline builds");
        assert_eq!(pipeline.catalog().len(), 3);
    }

    #[test]
    fn configured_catalog_path_must_exist() {
        let settings = PipelineSettings {
            catalog_path: Some(PathBuf::from("/nonexistent/scholarships.csv")),
            ..PipelineSettings::default()
        };

        match build_pipeline(&settings) {
            Err(CatalogImportError::Invalid(PipelineError::NotFound { .. })) => {}
            other => panic!("expected missing catalog, got {other:?}"),
        }
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-02-15 "),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 15).expect("valid date"))
        );
        assert!(parse_date("15/02/2025")
            .expect_err("invalid format")
            .contains("15/02/2025"));
    }
}
