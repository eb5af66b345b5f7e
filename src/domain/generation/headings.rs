//! Section heading labels shared by the prompt builder and the segmenter.
//!
//! Changing a label here changes both what the engine is asked to emit and
//! what the segmenter looks for, keeping the two sides in lockstep.

/// Label for the container build file section.
pub const DOCKERFILE_LABEL: &str = "Dockerfile";

/// Label for the orchestration manifest section.
pub const MANIFEST_LABEL: &str = "Kubernetes manifest";

/// Label for the pipeline definition section.
pub const PIPELINE_LABEL: &str = "CI/CD pipeline";

/// Heading line in the surface form the prompt embeds, e.g. `### Dockerfile`.
pub fn heading_line(label: &str) -> String {
    format!("### {}", label)
}
