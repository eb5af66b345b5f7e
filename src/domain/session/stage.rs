//! Dialogue stage state machine.
//!
//! Defines the steps of the parameter-collection dialogue and the valid
//! transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current step of the multi-turn deployment dialogue.
///
/// Stages advance monotonically forward:
/// `Idle` → `AwaitFramework` → `AwaitIngress` → `AwaitCicd` →
/// `AwaitConfirmation` → `Completed` or `Cancelled`.
///
/// Cancellation is allowed from any non-terminal stage and removes the
/// session immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    /// Session created, first question not yet asked.
    #[default]
    Idle,

    /// Waiting for the application framework (free text).
    AwaitFramework,

    /// Waiting for the HTTPS ingress / internal service answer.
    AwaitIngress,

    /// Waiting for the CI/CD platform choice.
    AwaitCicd,

    /// All parameters collected, waiting for yes/no confirmation.
    AwaitConfirmation,

    /// User confirmed; generation pipeline has been triggered.
    Completed,

    /// User declined or aborted; nothing was generated.
    Cancelled,
}

impl DialogueStage {
    /// Returns the question to ask the user on entering this stage.
    ///
    /// Terminal stages and `Idle` have no question. The confirmation stage
    /// question is built from the session summary instead (see
    /// [`super::DeploySession::summary`]).
    pub fn question(&self) -> Option<&'static str> {
        match self {
            Self::AwaitFramework => {
                Some("What framework are you using? (e.g., Flask, FastAPI, Node.js)")
            }
            Self::AwaitIngress => Some("Do you want HTTPS Ingress or only internal service?"),
            Self::AwaitCicd => Some(
                "Which CI/CD platform do you want: GitHub Actions, Jenkins, GitLab, or None?",
            ),
            Self::Idle | Self::AwaitConfirmation | Self::Completed | Self::Cancelled => None,
        }
    }

    /// Returns true if the dialogue is still collecting input.
    pub fn accepts_user_input(&self) -> bool {
        matches!(
            self,
            Self::AwaitFramework | Self::AwaitIngress | Self::AwaitCicd | Self::AwaitConfirmation
        )
    }
}

impl StateMachine for DialogueStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueStage::*;
        matches!(
            (self, target),
            // Start signal asks the first question
            (Idle, AwaitFramework) |
            // Parameter collection, strictly forward
            (AwaitFramework, AwaitIngress) |
            (AwaitIngress, AwaitCicd) |
            (AwaitCicd, AwaitConfirmation) |
            // Positive confirmation triggers generation
            (AwaitConfirmation, Completed) |
            // Explicit cancellation from any non-terminal stage
            (Idle, Cancelled) |
            (AwaitFramework, Cancelled) |
            (AwaitIngress, Cancelled) |
            (AwaitCicd, Cancelled) |
            (AwaitConfirmation, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStage::*;
        match self {
            Idle => vec![AwaitFramework, Cancelled],
            AwaitFramework => vec![AwaitIngress, Cancelled],
            AwaitIngress => vec![AwaitCicd, Cancelled],
            AwaitCicd => vec![AwaitConfirmation, Cancelled],
            AwaitConfirmation => vec![Completed, Cancelled],
            Completed | Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STAGES: [DialogueStage; 7] = [
        DialogueStage::Idle,
        DialogueStage::AwaitFramework,
        DialogueStage::AwaitIngress,
        DialogueStage::AwaitCicd,
        DialogueStage::AwaitConfirmation,
        DialogueStage::Completed,
        DialogueStage::Cancelled,
    ];

    mod stage_definition {
        use super::*;

        #[test]
        fn default_stage_is_idle() {
            assert_eq!(DialogueStage::default(), DialogueStage::Idle);
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&DialogueStage::AwaitFramework).unwrap();
            assert_eq!(json, "\"await_framework\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let stage: DialogueStage = serde_json::from_str("\"await_cicd\"").unwrap();
            assert_eq!(stage, DialogueStage::AwaitCicd);
        }

        #[test]
        fn collection_stages_have_questions() {
            assert!(DialogueStage::AwaitFramework.question().is_some());
            assert!(DialogueStage::AwaitIngress.question().is_some());
            assert!(DialogueStage::AwaitCicd.question().is_some());
            assert!(DialogueStage::AwaitConfirmation.question().is_none());
            assert!(DialogueStage::Completed.question().is_none());
        }

        #[test]
        fn cicd_question_lists_all_platforms() {
            let question = DialogueStage::AwaitCicd.question().unwrap();
            for platform in ["GitHub Actions", "Jenkins", "GitLab", "None"] {
                assert!(question.contains(platform), "missing {}", platform);
            }
        }
    }

    mod transitions {
        use super::*;
        use crate::domain::foundation::StateMachine;

        #[test]
        fn stages_advance_in_order() {
            use DialogueStage::*;
            let order = [Idle, AwaitFramework, AwaitIngress, AwaitCicd, AwaitConfirmation];
            for pair in order.windows(2) {
                assert!(pair[0].can_transition_to(&pair[1]));
            }
            assert!(AwaitConfirmation.can_transition_to(&Completed));
        }

        #[test]
        fn no_stage_is_skipped() {
            use DialogueStage::*;
            assert!(!Idle.can_transition_to(&AwaitIngress));
            assert!(!AwaitFramework.can_transition_to(&AwaitCicd));
            assert!(!AwaitIngress.can_transition_to(&AwaitConfirmation));
            assert!(!AwaitCicd.can_transition_to(&Completed));
        }

        #[test]
        fn no_stage_moves_backward() {
            use DialogueStage::*;
            assert!(!AwaitIngress.can_transition_to(&AwaitFramework));
            assert!(!AwaitConfirmation.can_transition_to(&AwaitCicd));
            assert!(!Completed.can_transition_to(&AwaitFramework));
        }

        #[test]
        fn any_non_terminal_stage_can_cancel() {
            use DialogueStage::*;
            for stage in [Idle, AwaitFramework, AwaitIngress, AwaitCicd, AwaitConfirmation] {
                assert!(stage.can_transition_to(&Cancelled));
            }
        }

        #[test]
        fn terminal_stages_have_no_transitions() {
            assert!(DialogueStage::Completed.is_terminal());
            assert!(DialogueStage::Cancelled.is_terminal());
        }

        #[test]
        fn can_transition_to_is_consistent_with_valid_transitions() {
            for stage in ALL_STAGES {
                for target in stage.valid_transitions() {
                    assert!(
                        stage.can_transition_to(&target),
                        "inconsistent for {:?} -> {:?}",
                        stage,
                        target
                    );
                }
            }
        }
    }
}
