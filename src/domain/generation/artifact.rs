//! Artifacts recovered from one generation reply.

use serde::{Deserialize, Serialize};

/// What kind of deployment file an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Container build file (Dockerfile).
    DockerBuild,
    /// Orchestration manifest (Kubernetes YAML).
    OrchestrationManifest,
    /// CI/CD pipeline definition.
    PipelineDefinition,
    /// Unlabeled content the segmenter could not classify.
    Opaque,
}

impl ArtifactKind {
    /// Canonical delivery filename for this kind.
    pub fn filename(&self) -> &'static str {
        match self {
            Self::DockerBuild => "Dockerfile",
            Self::OrchestrationManifest => "kubernetes.yaml",
            Self::PipelineDefinition => "ci.yml",
            Self::Opaque => "generated_files.txt",
        }
    }
}

/// One labeled document extracted from a generation reply.
///
/// Content is always trimmed at both ends; the constructor returns `None`
/// for whitespace-only bodies so empty artifacts are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    kind: ArtifactKind,
    content: String,
}

impl Artifact {
    /// Creates an artifact from a raw body, trimming both ends.
    ///
    /// Returns `None` if the trimmed body is empty.
    pub fn new(kind: ArtifactKind, body: &str) -> Option<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            content: trimmed.to_string(),
        })
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content as a byte payload for delivery.
    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_both_ends() {
        let artifact = Artifact::new(ArtifactKind::DockerBuild, "\n  FROM python:3.12\n\n").unwrap();
        assert_eq!(artifact.content(), "FROM python:3.12");
    }

    #[test]
    fn whitespace_only_body_yields_none() {
        assert!(Artifact::new(ArtifactKind::Opaque, "  \n\t ").is_none());
    }

    #[test]
    fn kinds_map_to_canonical_filenames() {
        assert_eq!(ArtifactKind::DockerBuild.filename(), "Dockerfile");
        assert_eq!(ArtifactKind::OrchestrationManifest.filename(), "kubernetes.yaml");
        assert_eq!(ArtifactKind::PipelineDefinition.filename(), "ci.yml");
        assert_eq!(ArtifactKind::Opaque.filename(), "generated_files.txt");
    }

    #[test]
    fn into_bytes_returns_utf8_payload() {
        let artifact = Artifact::new(ArtifactKind::PipelineDefinition, "steps: []").unwrap();
        assert_eq!(artifact.into_bytes(), b"steps: []".to_vec());
    }
}
