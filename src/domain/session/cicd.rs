//! CI/CD platform choice and fuzzy matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// CI/CD platform the user wants a pipeline for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CicdPlatform {
    GithubActions,
    Jenkins,
    Gitlab,
    /// User explicitly wants no pipeline.
    None,
}

/// Failure modes of [`CicdPlatform::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CicdMatchError {
    /// Input matched no platform at all.
    #[error("'{input}' is not a recognized CI/CD platform")]
    Unrecognized { input: String },

    /// Input matched more than one platform; refusing to guess.
    #[error("'{input}' is ambiguous, matches: {}", candidates.join(", "))]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },
}

impl CicdPlatform {
    /// All platforms, in the order they are offered to the user.
    pub const ALL: [CicdPlatform; 4] = [
        CicdPlatform::GithubActions,
        CicdPlatform::Jenkins,
        CicdPlatform::Gitlab,
        CicdPlatform::None,
    ];

    /// Canonical lowercase spelling, the form matched against user input.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::GithubActions => "github actions",
            Self::Jenkins => "jenkins",
            Self::Gitlab => "gitlab",
            Self::None => "none",
        }
    }

    /// Display label as offered in the stage question.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GithubActions => "GitHub Actions",
            Self::Jenkins => "Jenkins",
            Self::Gitlab => "GitLab",
            Self::None => "None",
        }
    }

    /// Conventional filename for a standalone pipeline file on this platform.
    pub fn pipeline_filename(&self) -> &'static str {
        match self {
            Self::GithubActions => "ci.yml",
            Self::Jenkins => "Jenkinsfile",
            Self::Gitlab => ".gitlab-ci.yml",
            Self::None => "ci.yml",
        }
    }

    /// What the generation engine should produce under the pipeline heading.
    pub fn generation_directive(&self) -> String {
        match self {
            Self::None => {
                "No pipeline was requested. State briefly that this section is \
                 intentionally empty."
                    .to_string()
            }
            other => format!(
                "{} CI/CD YAML for build, test, docker push, and deployment.",
                other.label()
            ),
        }
    }

    /// Parses user input into a platform.
    ///
    /// Matching is case-insensitive. An exact match against the canonical
    /// name wins outright. Otherwise, fuzzy containment applies: a platform
    /// is a candidate when the input is a substring of its name or its name
    /// is a substring of the input. A single candidate is accepted. When
    /// several candidates share the input (short fragments like "g" hit both
    /// git-prefixed names), a candidate is accepted only if it is the sole
    /// dominant one: the input covers at least half of its name. Anything
    /// else is rejected so the caller reprompts instead of guessing.
    pub fn parse(input: &str) -> Result<Self, CicdMatchError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CicdMatchError::Unrecognized {
                input: input.to_string(),
            });
        }

        for platform in Self::ALL {
            if platform.canonical_name() == normalized {
                return Ok(platform);
            }
        }

        let mut candidates: Vec<(CicdPlatform, bool)> = Vec::new();
        for platform in Self::ALL {
            let name = platform.canonical_name();
            if normalized.contains(name) {
                // Name fully present in the input, e.g. "jenkins please".
                candidates.push((platform, true));
            } else if name.contains(&normalized) {
                let dominant = normalized.len() * 2 >= name.len();
                candidates.push((platform, dominant));
            }
        }

        if candidates.len() == 1 {
            return Ok(candidates[0].0);
        }

        let dominant: Vec<CicdPlatform> = candidates
            .iter()
            .filter(|(_, dominant)| *dominant)
            .map(|(p, _)| *p)
            .collect();
        if let [single] = dominant.as_slice() {
            return Ok(*single);
        }

        if candidates.is_empty() {
            Err(CicdMatchError::Unrecognized {
                input: input.to_string(),
            })
        } else {
            Err(CicdMatchError::Ambiguous {
                input: input.to_string(),
                candidates: candidates
                    .iter()
                    .map(|(p, _)| p.canonical_name().to_string())
                    .collect(),
            })
        }
    }
}

impl fmt::Display for CicdPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
