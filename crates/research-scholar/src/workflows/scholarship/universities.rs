use serde::{Deserialize, Serialize};

use super::domain::{RuleScope, StudentProfile};
use super::normalizer::{eq_ignore_case, normalize_text};

const PREFERRED_COUNTRY_POINTS: u32 = 30;
const OPEN_DESTINATION_POINTS: u32 = 10;
const INTEREST_POINTS: u32 = 10;
const INTEREST_CAP: u32 = 30;
const SUPPORT_PROGRAM_POINTS: u32 = 20;
const MAJOR_POINTS: u32 = 20;

/// Degree program a student could pair with a scholarship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityProgram {
    pub id: String,
    pub name: String,
    pub location: String,
    pub country: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub eligible_majors: RuleScope,
    /// Demographic tags with dedicated support (e.g. `women`, `first-generation`).
    #[serde(default)]
    pub support_programs: Vec<String>,
    #[serde(default)]
    pub tuition_support: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityMatch {
    pub university: UniversityProgram,
    pub score: u32,
    pub fit_reasons: Vec<String>,
}

/// Score programs against the profile and keep the best `top_n`, ties in input order.
pub fn match_universities(
    profile: &StudentProfile,
    programs: &[UniversityProgram],
    top_n: usize,
) -> Vec<UniversityMatch> {
    let mut matches: Vec<UniversityMatch> = programs
        .iter()
        .map(|program| score_program(profile, program))
        .collect();

    matches.sort_by(|left, right| right.score.cmp(&left.score));
    matches.truncate(top_n);
    matches
}

fn score_program(profile: &StudentProfile, program: &UniversityProgram) -> UniversityMatch {
    let mut score = 0;
    let mut fit_reasons = Vec::new();

    let preferred: Vec<&String> = profile
        .preferred_countries
        .iter()
        .filter(|country| !country.trim().is_empty())
        .collect();
    if preferred.is_empty() {
        score += OPEN_DESTINATION_POINTS;
        fit_reasons.push("Open to any destination".to_string());
    } else if preferred
        .iter()
        .any(|country| eq_ignore_case(country, &program.country))
    {
        score += PREFERRED_COUNTRY_POINTS;
        fit_reasons.push(format!("Located in preferred country {}", program.country));
    }

    let mut interest_points = 0;
    for interest in &profile.interests {
        if interest_points >= INTEREST_CAP {
            break;
        }
        if program
            .focus_areas
            .iter()
            .any(|area| contains_phrase(area, interest))
        {
            interest_points += INTEREST_POINTS;
            fit_reasons.push(format!("Focus areas align with {}", interest.trim()));
        }
    }
    score += interest_points;

    if let Some(tag) = program
        .support_programs
        .iter()
        .find(|tag| profile.has_demographic(tag))
    {
        score += SUPPORT_PROGRAM_POINTS;
        fit_reasons.push(format!("Dedicated support for {}", tag.trim()));
    }

    if program.eligible_majors.permits(&profile.major) {
        score += MAJOR_POINTS;
        fit_reasons.push(format!("Admits {} majors", profile.major.trim()));
    }

    UniversityMatch {
        university: program.clone(),
        score,
        fit_reasons,
    }
}

/// Whole-word containment so short interests such as `AI` do not match inside other words.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    let needle = normalize_text(needle);
    if needle.is_empty() {
        return false;
    }

    let haystack = normalize_text(haystack);
    format!(" {haystack} ").contains(&format!(" {needle} "))
}

pub fn demo_programs() -> Vec<UniversityProgram> {
    vec![
        UniversityProgram {
            id: "UNI-001".to_string(),
            name: "University of Melbourne Data Science Program".to_string(),
            location: "Melbourne, Australia".to_string(),
            country: "Australia".to_string(),
            focus_areas: strings(&["AI", "data science", "climate analytics"]),
            eligible_majors: RuleScope::restricted(["computer science", "data science", "statistics"]),
            support_programs: strings(&["women", "first-generation"]),
            tuition_support: "Up to 50% tuition waiver for women in STEM".to_string(),
            website: "https://example.org/universities/uni-001".to_string(),
        },
        UniversityProgram {
            id: "UNI-002".to_string(),
            name: "TU Delft Robotics and AI Track".to_string(),
            location: "Delft, Netherlands".to_string(),
            country: "Netherlands".to_string(),
            focus_areas: strings(&["robotics", "AI", "sustainable engineering"]),
            eligible_majors: RuleScope::restricted(["engineering", "computer science"]),
            support_programs: strings(&["first-generation"]),
            tuition_support: "Holland Scholarship of EUR 5,000".to_string(),
            website: "https://example.org/universities/uni-002".to_string(),
        },
        UniversityProgram {
            id: "UNI-003".to_string(),
            name: "University of Toronto Social Impact Computing".to_string(),
            location: "Toronto, Canada".to_string(),
            country: "Canada".to_string(),
            focus_areas: strings(&["civic technology", "open source", "AI ethics"]),
            eligible_majors: RuleScope::Unconstrained,
            support_programs: strings(&["women", "indigenous", "low-income"]),
            tuition_support: "Need-based bursaries for all admitted students".to_string(),
            website: "https://example.org/universities/uni-003".to_string(),
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
