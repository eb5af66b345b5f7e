//! Generation domain: prompt assembly and response splitting.
//!
//! The prompt builder and the segmenter share a load-bearing contract: the
//! prompt embeds the exact section headings the segmenter's marker scan
//! recognizes. Both sides use the heading constants defined in `headings`.

mod artifact;
mod dispatcher;
mod headings;
mod prompt;
mod segmenter;

pub use artifact::{Artifact, ArtifactKind};
pub use dispatcher::{dispatch, Deliverable};
pub use headings::{DOCKERFILE_LABEL, MANIFEST_LABEL, PIPELINE_LABEL};
pub use prompt::{build_deploy_prompt, build_pipeline_prompt, ADVISOR_PREAMBLE};
pub use segmenter::segment;
