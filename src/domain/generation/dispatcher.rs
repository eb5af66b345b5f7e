//! Artifact dispatch: mapping segmented artifacts to named payloads.

use super::artifact::{Artifact, ArtifactKind};

/// A named byte payload ready for delivery as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deliverable {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Deliverable {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Maps segmented artifacts to deliverables with canonical filenames.
///
/// When segmentation recovered nothing but the raw reply is non-empty, the
/// whole reply is wrapped as a single opaque deliverable so the user is
/// never left without output.
pub fn dispatch(artifacts: Vec<Artifact>, raw: &str) -> Vec<Deliverable> {
    if artifacts.is_empty() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![Deliverable::new(
            ArtifactKind::Opaque.filename(),
            trimmed.as_bytes().to_vec(),
        )];
    }

    artifacts
        .into_iter()
        .map(|artifact| {
            let filename = artifact.kind().filename();
            Deliverable::new(filename, artifact.into_bytes())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifacts_get_their_canonical_filenames() {
        let artifacts = vec![
            Artifact::new(ArtifactKind::DockerBuild, "FROM alpine").unwrap(),
            Artifact::new(ArtifactKind::OrchestrationManifest, "kind: Pod").unwrap(),
            Artifact::new(ArtifactKind::PipelineDefinition, "on: push").unwrap(),
        ];
        let deliverables = dispatch(artifacts, "ignored");
        let names: Vec<&str> = deliverables.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["Dockerfile", "kubernetes.yaml", "ci.yml"]);
        assert_eq!(deliverables[0].bytes, b"FROM alpine".to_vec());
    }

    #[test]
    fn empty_artifact_set_wraps_raw_text_as_opaque() {
        let deliverables = dispatch(Vec::new(), "  unparseable reply  ");
        assert_eq!(deliverables.len(), 1);
        assert_eq!(deliverables[0].filename, "generated_files.txt");
        assert_eq!(deliverables[0].bytes, b"unparseable reply".to_vec());
    }

    #[test]
    fn empty_artifact_set_and_empty_raw_yields_nothing() {
        assert!(dispatch(Vec::new(), "   ").is_empty());
    }

    #[test]
    fn opaque_artifact_uses_fallback_filename() {
        let artifacts = vec![Artifact::new(ArtifactKind::Opaque, "whatever").unwrap()];
        let deliverables = dispatch(artifacts, "whatever");
        assert_eq!(deliverables[0].filename, "generated_files.txt");
    }
}
