use crate::infra::{build_pipeline, parse_date};
use chrono::NaiveDate;
use clap::Args;
use research_scholar::config::AppConfig;
use research_scholar::error::AppError;
use research_scholar::workflows::scholarship::{
    extract_profile, JsonPayloadExtractor, PipelineError, ScholarshipReport, StudentProfile,
};
use std::path::{Path, PathBuf};

const DEFAULT_QUERY: &str = "scholarships for women in computer science building social impact startups";

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to a JSON file containing the student profile
    #[arg(long, default_value = "profiles/sample_profile.json")]
    pub(crate) profile: PathBuf,
    /// Discovery query matched against scholarship titles and descriptions
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub(crate) query: String,
    /// Number of scholarships returned from search
    #[arg(long, default_value_t = 5)]
    pub(crate) limit: usize,
    /// Override how many ranked scholarships receive materials and schedules
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// CSV or JSON catalog to search instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Evaluation date for urgency and countdowns (defaults to today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional path to save the JSON report
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// JSON payload produced by a CV extraction service
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Optional path where the normalized profile should be saved
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        profile,
        query,
        limit,
        top_n,
        catalog,
        today,
        output,
    } = args;

    let mut settings = AppConfig::load()?.pipeline;
    if let Some(top_n) = top_n {
        settings.top_n = top_n;
    }
    if catalog.is_some() {
        settings.catalog_path = catalog;
    }

    let profile = read_profile(&profile)?;
    let mut pipeline = build_pipeline(&settings)?;
    if let Some(today) = today {
        pipeline = pipeline.with_today(today);
    }

    let report = pipeline.run(&query, &profile, limit)?;
    let rendered = serde_json::to_string_pretty(&report)?;

    println!("=== Research Scholar Report ===");
    for line in summarize(&report) {
        println!("{line}");
    }
    println!("\n{rendered}");

    if let Some(path) = output {
        std::fs::write(&path, &rendered)?;
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let payload = read_existing(&args.input, "extraction payload")?;
    let profile = extract_profile(&JsonPayloadExtractor, &payload)?;
    let rendered = serde_json::to_string_pretty(&profile)?;

    println!("=== Normalized Profile ===");
    println!("{rendered}");

    if let Some(path) = args.output {
        std::fs::write(&path, &rendered)?;
        println!("\nProfile saved to {}", path.display());
    }

    Ok(())
}

fn read_profile(path: &Path) -> Result<StudentProfile, AppError> {
    let raw = read_existing(path, "profile file")?;
    Ok(StudentProfile::from_json_str(&raw)?)
}

fn read_existing(path: &Path, kind: &str) -> Result<String, AppError> {
    if !path.exists() {
        return Err(PipelineError::NotFound {
            resource: format!("{kind} {}", path.display()),
        }
        .into());
    }

    Ok(std::fs::read_to_string(path)?)
}

fn summarize(report: &ScholarshipReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Query: \"{}\" | found {} | ranked {}",
        report.query,
        report.seeker.scholarships.len(),
        report.ranker.ranked.len()
    )];

    for (position, entry) in report.ranker.ranked.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} {} ({:.1}) {}",
            position + 1,
            entry.scholarship.id,
            entry.scholarship.title,
            entry.score,
            entry.reasoning
        ));
    }

    for qa in &report.verifier.qa_reports {
        let status = if qa.ready { "ready" } else { "incomplete" };
        lines.push(format!("QA {}: {} - {}", qa.scholarship_id, status, qa.notes));
    }

    lines
}
