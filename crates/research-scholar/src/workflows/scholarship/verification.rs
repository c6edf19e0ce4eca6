use std::collections::HashMap;

use super::domain::{
    ensure_unique_ids, ApplicationMaterial, ArtifactKind, QaReport, RankedEntry, ScholarshipId,
};
use super::error::PipelineError;

pub(crate) const STAGE: &str = "verification";

const READY_NOTE: &str = "Ready for submission.";
const GAPS_NOTE: &str = "Fill the gaps.";

/// Check each of the first `top_n` ranked scholarships for a complete packet.
///
/// A scholarship with no material record is missing every artifact.
pub fn verify_materials(
    ranked: &[RankedEntry],
    materials: &[ApplicationMaterial],
    top_n: usize,
) -> Result<Vec<QaReport>, PipelineError> {
    let selected = &ranked[..top_n.min(ranked.len())];
    ensure_unique_ids(STAGE, selected.iter().map(|entry| &entry.scholarship.id))?;
    ensure_unique_ids(STAGE, materials.iter().map(|material| &material.scholarship_id))?;

    let index: HashMap<&ScholarshipId, &ApplicationMaterial> = materials
        .iter()
        .map(|material| (&material.scholarship_id, material))
        .collect();

    Ok(selected
        .iter()
        .map(|entry| {
            let id = &entry.scholarship.id;
            let material = index.get(id).copied();
            let missing: Vec<String> = ArtifactKind::ordered()
                .into_iter()
                .filter(|kind| !material.is_some_and(|material| artifact_present(material, *kind)))
                .map(|kind| kind.label().to_string())
                .collect();
            let ready = missing.is_empty();

            QaReport {
                scholarship_id: id.clone(),
                ready,
                missing,
                notes: if ready { READY_NOTE } else { GAPS_NOTE }.to_string(),
            }
        })
        .collect())
}

fn artifact_present(material: &ApplicationMaterial, kind: ArtifactKind) -> bool {
    match kind {
        ArtifactKind::EssayOutline => !material.essay_outline.is_empty(),
        ArtifactKind::CvBullets => !material.cv_bullets.is_empty(),
        ArtifactKind::LorPrompt => !material.lor_prompt.is_empty(),
    }
}
