use super::domain::{
    ensure_unique_ids, ApplicationMaterial, RankedEntry, ScholarshipOpportunity, StudentProfile,
};
use super::error::PipelineError;

pub(crate) const STAGE: &str = "materials";

const FIXED_CV_BULLETS: [&str; 2] = [
    "Built open-source tool adopted by 5+ campuses.",
    "Mentored first-gen students on scholarship readiness.",
];

/// Draft an application packet for each of the first `top_n` ranked scholarships.
///
/// Profiles without interests or experiences are templated with the `General` placeholder.
pub fn generate_materials(
    profile: &StudentProfile,
    ranked: &[RankedEntry],
    top_n: usize,
) -> Result<Vec<ApplicationMaterial>, PipelineError> {
    let selected = &ranked[..top_n.min(ranked.len())];
    ensure_unique_ids(STAGE, selected.iter().map(|entry| &entry.scholarship.id))?;

    Ok(selected
        .iter()
        .map(|entry| draft_material(profile, &entry.scholarship))
        .collect())
}

fn draft_material(
    profile: &StudentProfile,
    scholarship: &ScholarshipOpportunity,
) -> ApplicationMaterial {
    let interest = profile.first_interest();

    let essay_outline = [
        format!("1. Hook: {}'s mission in {}", profile.name, profile.major),
        format!("2. Impact: Highlight flagship {interest} project delivering community impact"),
        format!("3. Alignment: Why {} accelerates the mission", scholarship.sponsor),
        format!("4. Future plan: Milestones funded by ${}", scholarship.amount),
    ]
    .join("\n");

    let mut cv_bullets = vec![format!("Led {interest} initiative delivering measurable outcomes.")];
    cv_bullets.extend(FIXED_CV_BULLETS.iter().map(|bullet| bullet.to_string()));

    let lor_prompt = format!(
        "Describe {}'s leadership in {} and impact on underrepresented communities.",
        profile.name,
        profile.first_experience()
    );

    ApplicationMaterial {
        scholarship_id: scholarship.id.clone(),
        essay_outline,
        cv_bullets,
        lor_prompt,
    }
}
