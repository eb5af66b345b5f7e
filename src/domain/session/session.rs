//! Deploy session aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp, UserId, ValidationError};

use super::{CicdPlatform, DialogueStage};

/// Per-user dialogue state: current stage plus the deployment parameters
/// collected so far.
///
/// Each parameter is set exactly once, by the stage that collects it. The
/// aggregate enforces that recording a parameter is only possible in the
/// stage waiting for it, and that the stage then advances; callers never
/// mutate `stage` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySession {
    user_id: UserId,
    stage: DialogueStage,
    framework: Option<String>,
    https_ingress: Option<bool>,
    cicd: Option<CicdPlatform>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DeploySession {
    /// Creates a fresh session at the `Idle` stage.
    pub fn new(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            user_id,
            stage: DialogueStage::Idle,
            framework: None,
            https_ingress: None,
            cicd: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn stage(&self) -> DialogueStage {
        self.stage
    }

    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn https_ingress(&self) -> Option<bool> {
        self.https_ingress
    }

    pub fn cicd(&self) -> Option<CicdPlatform> {
        self.cicd
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last successful stage transition. Tracked so an idle-expiry policy
    /// can be layered on without changing the aggregate.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Begins the dialogue: `Idle` → `AwaitFramework`.
    pub fn begin(&mut self) -> Result<(), ValidationError> {
        self.advance(DialogueStage::AwaitFramework)
    }

    /// Records the framework verbatim and advances to the ingress question.
    ///
    /// Any non-empty text is accepted.
    pub fn record_framework(&mut self, text: &str) -> Result<(), ValidationError> {
        if self.stage != DialogueStage::AwaitFramework {
            return Err(self.wrong_stage("framework"));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("framework"));
        }
        self.framework = Some(text.to_string());
        self.advance(DialogueStage::AwaitIngress)
    }

    /// Classifies the ingress answer and advances to the CI/CD question.
    ///
    /// Any text mentioning "https" or "ingress" (case-insensitive) means
    /// HTTPS ingress; everything else means internal service only.
    pub fn record_ingress(&mut self, text: &str) -> Result<(), ValidationError> {
        if self.stage != DialogueStage::AwaitIngress {
            return Err(self.wrong_stage("https_ingress"));
        }
        let lowered = text.to_lowercase();
        self.https_ingress = Some(lowered.contains("https") || lowered.contains("ingress"));
        self.advance(DialogueStage::AwaitCicd)
    }

    /// Records an already-parsed CI/CD platform and advances to confirmation.
    pub fn record_cicd(&mut self, platform: CicdPlatform) -> Result<(), ValidationError> {
        if self.stage != DialogueStage::AwaitCicd {
            return Err(self.wrong_stage("cicd"));
        }
        self.cicd = Some(platform);
        self.advance(DialogueStage::AwaitConfirmation)
    }

    /// Returns true if the text is a positive confirmation ("yes" or "y").
    pub fn is_confirmation(text: &str) -> bool {
        matches!(text.trim().to_lowercase().as_str(), "yes" | "y")
    }

    /// Marks the session completed after a positive confirmation.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        if self.stage != DialogueStage::AwaitConfirmation {
            return Err(self.wrong_stage("confirmation"));
        }
        self.advance(DialogueStage::Completed)
    }

    /// Cancels the session from any non-terminal stage.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        self.advance(DialogueStage::Cancelled)
    }

    /// Human-readable summary of the collected parameters, shown at the
    /// confirmation stage.
    pub fn summary(&self) -> String {
        let ingress = match self.https_ingress {
            Some(true) => "HTTPS Ingress",
            Some(false) => "internal service only",
            None => "(not set)",
        };
        let cicd = self
            .cicd
            .map(|p| p.label())
            .unwrap_or("(not set)");
        format!(
            "Framework: {}\nHTTPS Ingress: {}\nCI/CD platform: {}",
            self.framework.as_deref().unwrap_or("(not set)"),
            ingress,
            cicd,
        )
    }

    fn advance(&mut self, target: DialogueStage) -> Result<(), ValidationError> {
        self.stage = self.stage.transition_to(target)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn wrong_stage(&self, field: &str) -> ValidationError {
        ValidationError::invalid_format(
            field,
            format!("not collected at stage {:?}", self.stage),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DeploySession {
        DeploySession::new(UserId::new("tester").unwrap())
    }

    fn session_at_confirmation() -> DeploySession {
        let mut s = session();
        s.begin().unwrap();
        s.record_framework("FastAPI").unwrap();
        s.record_ingress("https please").unwrap();
        s.record_cicd(CicdPlatform::GithubActions).unwrap();
        s
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn new_session_starts_idle_with_nothing_collected() {
            let s = session();
            assert_eq!(s.stage(), DialogueStage::Idle);
            assert!(s.framework().is_none());
            assert!(s.https_ingress().is_none());
            assert!(s.cicd().is_none());
        }

        #[test]
        fn happy_path_walks_every_stage_in_order() {
            let mut s = session();
            s.begin().unwrap();
            assert_eq!(s.stage(), DialogueStage::AwaitFramework);
            s.record_framework("Flask").unwrap();
            assert_eq!(s.stage(), DialogueStage::AwaitIngress);
            s.record_ingress("internal").unwrap();
            assert_eq!(s.stage(), DialogueStage::AwaitCicd);
            s.record_cicd(CicdPlatform::Jenkins).unwrap();
            assert_eq!(s.stage(), DialogueStage::AwaitConfirmation);
            s.complete().unwrap();
            assert_eq!(s.stage(), DialogueStage::Completed);
        }

        #[test]
        fn cancel_works_from_any_collection_stage() {
            let mut s = session();
            s.begin().unwrap();
            s.record_framework("Flask").unwrap();
            s.cancel().unwrap();
            assert_eq!(s.stage(), DialogueStage::Cancelled);
        }

        #[test]
        fn cancel_fails_once_terminal() {
            let mut s = session_at_confirmation();
            s.complete().unwrap();
            assert!(s.cancel().is_err());
        }

        #[test]
        fn updated_at_advances_with_stage() {
            let mut s = session();
            let before = s.updated_at();
            s.begin().unwrap();
            assert!(!s.updated_at().is_before(&before));
        }
    }

    mod framework_stage {
        use super::*;

        #[test]
        fn framework_is_recorded_verbatim_after_trim() {
            let mut s = session();
            s.begin().unwrap();
            s.record_framework("  Node.js  ").unwrap();
            assert_eq!(s.framework(), Some("Node.js"));
        }

        #[test]
        fn empty_framework_is_rejected_without_advancing() {
            let mut s = session();
            s.begin().unwrap();
            assert!(s.record_framework("   ").is_err());
            assert_eq!(s.stage(), DialogueStage::AwaitFramework);
            assert!(s.framework().is_none());
        }

        #[test]
        fn framework_cannot_be_recorded_out_of_stage() {
            let mut s = session();
            assert!(s.record_framework("Flask").is_err());
        }
    }

    mod ingress_stage {
        use super::*;

        fn at_ingress() -> DeploySession {
            let mut s = session();
            s.begin().unwrap();
            s.record_framework("Flask").unwrap();
            s
        }

        #[test]
        fn https_keyword_means_ingress() {
            let mut s = at_ingress();
            s.record_ingress("I want HTTPS").unwrap();
            assert_eq!(s.https_ingress(), Some(true));
        }

        #[test]
        fn ingress_keyword_means_ingress() {
            let mut s = at_ingress();
            s.record_ingress("an Ingress please").unwrap();
            assert_eq!(s.https_ingress(), Some(true));
        }

        #[test]
        fn anything_else_means_internal_only() {
            let mut s = at_ingress();
            s.record_ingress("just internal").unwrap();
            assert_eq!(s.https_ingress(), Some(false));
        }
    }

    mod confirmation {
        use super::*;

        #[test]
        fn yes_and_y_confirm_case_insensitively() {
            assert!(DeploySession::is_confirmation("yes"));
            assert!(DeploySession::is_confirmation("Y"));
            assert!(DeploySession::is_confirmation(" YES "));
        }

        #[test]
        fn other_answers_do_not_confirm() {
            assert!(!DeploySession::is_confirmation("no"));
            assert!(!DeploySession::is_confirmation("yeah"));
            assert!(!DeploySession::is_confirmation(""));
        }

        #[test]
        fn summary_lists_all_collected_parameters() {
            let s = session_at_confirmation();
            let summary = s.summary();
            assert!(summary.contains("Framework: FastAPI"));
            assert!(summary.contains("HTTPS Ingress: HTTPS Ingress"));
            assert!(summary.contains("CI/CD platform: GitHub Actions"));
        }

        #[test]
        fn complete_requires_confirmation_stage() {
            let mut s = session();
            assert!(s.complete().is_err());
        }
    }
}
