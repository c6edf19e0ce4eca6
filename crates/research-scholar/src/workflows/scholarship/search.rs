use super::domain::{ScholarshipOpportunity, StudentProfile};
use super::normalizer::normalize_text;

/// Keyword search over the catalog.
///
/// Terms are OR-ed: an opportunity matches when any query term occurs in its title or
/// description, and every opportunity matches an empty query. When a profile with a
/// location is supplied, opportunities restricted to other locations are dropped.
/// Results keep catalog order and are truncated to `limit`.
pub fn search_opportunities(
    catalog: &[ScholarshipOpportunity],
    query: &str,
    limit: usize,
    profile: Option<&StudentProfile>,
) -> Vec<ScholarshipOpportunity> {
    let terms: Vec<String> = normalize_text(query)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let location = profile
        .map(|profile| profile.location.trim())
        .filter(|location| !location.is_empty());

    catalog
        .iter()
        .filter(|opportunity| matches_terms(opportunity, &terms))
        .filter(|opportunity| match location {
            Some(location) => opportunity.eligibility.location.permits(location),
            None => true,
        })
        .take(limit)
        .cloned()
        .collect()
}

fn matches_terms(opportunity: &ScholarshipOpportunity, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }

    let corpus = normalize_text(&format!("{} {}", opportunity.title, opportunity.description));
    terms.iter().any(|term| corpus.contains(term.as_str()))
}
