//! Response segmenter: recovers labeled artifacts from one raw text blob.
//!
//! The generation engine's output format is not contractually guaranteed, so
//! extraction degrades through a ladder of fallbacks instead of failing:
//!
//! 1. Strict heading scan: lines that consist of a short `#` run plus one of
//!    the section labels. Bodies run from just after a heading to the next
//!    recognized heading or end of text. Missing labels are fine; whatever
//!    headings are present are extracted (partial-match mode).
//! 2. Mixed-format two-way split: a looser marker scan for the Dockerfile /
//!    Kubernetes pair where the label is immediately followed by content on
//!    the same line.
//! 3. `---` delimiter-line split into two halves.
//! 4. The whole trimmed text as a single opaque artifact.
//!
//! Implemented as explicit two-pass line scanning (offset collection, then
//! body slicing) so each tier is independently testable. Segmentation is a
//! pure function of the input and therefore idempotent.

use super::artifact::{Artifact, ArtifactKind};
use super::headings::{DOCKERFILE_LABEL, MANIFEST_LABEL, PIPELINE_LABEL};

/// Minimum and maximum length of the `#` run that introduces a heading.
const HEADING_RUN: std::ops::RangeInclusive<usize> = 2..=4;

/// A strict heading found in pass 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeadingMark {
    kind: ArtifactKind,
    /// Byte offset of the start of the heading line.
    line_start: usize,
    /// Byte offset just past the heading line (start of the body).
    body_start: usize,
}

/// A loose marker found by the mixed-format scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LooseMark {
    /// Byte offset of the start of the marker line.
    line_start: usize,
    /// Byte offset just past the label text.
    label_end: usize,
}

/// Splits one raw generation reply into zero or more artifacts.
pub fn segment(raw: &str) -> Vec<Artifact> {
    let marks = scan_headings(raw);
    if !marks.is_empty() {
        return slice_bodies(raw, &marks);
    }

    if let Some(artifacts) = mixed_pair_split(raw) {
        return artifacts;
    }

    if let Some(artifacts) = delimiter_split(raw) {
        return artifacts;
    }

    Artifact::new(ArtifactKind::Opaque, raw).into_iter().collect()
}

/// Iterates lines with their starting byte offsets, newline included.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, line)
    })
}

/// Maps a label to its artifact kind, case-insensitively.
fn kind_for_label(text: &str) -> Option<ArtifactKind> {
    if text.eq_ignore_ascii_case(DOCKERFILE_LABEL) {
        Some(ArtifactKind::DockerBuild)
    } else if text.eq_ignore_ascii_case(MANIFEST_LABEL) {
        Some(ArtifactKind::OrchestrationManifest)
    } else if text.eq_ignore_ascii_case(PIPELINE_LABEL) {
        Some(ArtifactKind::PipelineDefinition)
    } else {
        None
    }
}

/// Pass 1: records every line that is exactly a heading (a `#` run followed
/// by a known label, optionally ending with a colon).
fn scan_headings(raw: &str) -> Vec<HeadingMark> {
    let mut marks = Vec::new();
    for (line_start, line) in lines_with_offsets(raw) {
        let trimmed = line.trim();
        let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
        if !HEADING_RUN.contains(&hashes) {
            continue;
        }
        let rest = trimmed[hashes..].trim();
        let rest = rest.strip_suffix(':').unwrap_or(rest).trim_end();
        if let Some(kind) = kind_for_label(rest) {
            marks.push(HeadingMark {
                kind,
                line_start,
                body_start: line_start + line.len(),
            });
        }
    }
    marks
}

/// Pass 2: slices bodies between consecutive marks; the last body runs to
/// end of text. Repeated labels still act as boundaries, but only the first
/// occurrence of each label emits an artifact.
fn slice_bodies(raw: &str, marks: &[HeadingMark]) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = Vec::new();
    for (i, mark) in marks.iter().enumerate() {
        if artifacts.iter().any(|a| a.kind() == mark.kind) {
            continue;
        }
        let body_end = marks
            .get(i + 1)
            .map(|next| next.line_start)
            .unwrap_or(raw.len());
        if let Some(artifact) = Artifact::new(mark.kind, &raw[mark.body_start..body_end]) {
            artifacts.push(artifact);
        }
    }
    artifacts
}

/// Finds the first loose marker for a label: a line starting with a `#` run
/// whose text begins with the label, content allowed on the same line.
fn scan_loose(raw: &str, label: &str) -> Option<LooseMark> {
    for (line_start, line) in lines_with_offsets(raw) {
        let hashes = line.len() - line.trim_start_matches('#').len();
        if !HEADING_RUN.contains(&hashes) {
            continue;
        }
        let after_hashes = &line[hashes..];
        let ws = after_hashes.len() - after_hashes.trim_start().len();
        let label_start = hashes + ws;
        let label_end = label_start + label.len();
        if line.len() < label_end || !line.is_char_boundary(label_end) {
            continue;
        }
        if line[label_start..label_end].eq_ignore_ascii_case(label) {
            return Some(LooseMark {
                line_start,
                label_end: line_start + label_end,
            });
        }
    }
    None
}

/// Tier 2: stricter two-way split for replies that label the Dockerfile and
/// Kubernetes sections in mixed format (content directly after the label).
///
/// Requires both markers. When the Dockerfile marker comes first, its body
/// ends where the Kubernetes marker line begins; otherwise the whole reply
/// is treated as the build file.
fn mixed_pair_split(raw: &str) -> Option<Vec<Artifact>> {
    let docker = scan_loose(raw, DOCKERFILE_LABEL)?;
    let k8s = scan_loose(raw, MANIFEST_LABEL)?;

    let mut artifacts = Vec::new();
    if docker.label_end < k8s.line_start {
        artifacts.extend(Artifact::new(
            ArtifactKind::DockerBuild,
            &raw[docker.label_end..k8s.line_start],
        ));
        artifacts.extend(Artifact::new(
            ArtifactKind::OrchestrationManifest,
            &raw[k8s.label_end..],
        ));
    } else {
        artifacts.extend(Artifact::new(ArtifactKind::DockerBuild, raw));
    }
    Some(artifacts)
}

/// Tier 3: splits on the first line consisting of `---`. Text before the
/// delimiter is one artifact; everything after it (later delimiters kept
/// in place) is the second.
fn delimiter_split(raw: &str) -> Option<Vec<Artifact>> {
    let (line_start, line) = lines_with_offsets(raw).find(|(_, line)| line.trim() == "---")?;

    let mut artifacts = Vec::new();
    artifacts.extend(Artifact::new(ArtifactKind::DockerBuild, &raw[..line_start]));
    artifacts.extend(Artifact::new(
        ArtifactKind::OrchestrationManifest,
        &raw[line_start + line.len()..],
    ));
    Some(artifacts)
}
