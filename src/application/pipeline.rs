//! Standalone pipeline generation.
//!
//! A one-shot request outside the deploy dialogue: the user describes the
//! pipeline they want in free text, the service infers the platform flavor
//! from that text and delivers a single platform-named file.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::UserId;
use crate::domain::generation::build_pipeline_prompt;
use crate::domain::session::CicdPlatform;
use crate::ports::{Attachment, Messenger, OutboundMessage, TextGenerator};

const PIPELINE_READY_TEXT: &str = "Here is your generated pipeline file:";
const PIPELINE_FAILED_TEXT: &str =
    "Sorry, an error occurred while generating your pipeline. Please try again later.";

/// Generates a single CI/CD pipeline file from a free-text request.
pub struct PipelineService {
    generator: Arc<dyn TextGenerator>,
    messenger: Arc<dyn Messenger>,
}

impl PipelineService {
    pub fn new(generator: Arc<dyn TextGenerator>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            generator,
            messenger,
        }
    }

    /// Infers the platform flavor from request wording.
    ///
    /// Mentions of "jenkins" or "gitlab" select those platforms; everything
    /// else gets a GitHub Actions workflow.
    pub fn classify(request: &str) -> CicdPlatform {
        let lowered = request.to_lowercase();
        if lowered.contains("jenkins") {
            CicdPlatform::Jenkins
        } else if lowered.contains("gitlab") {
            CicdPlatform::Gitlab
        } else {
            CicdPlatform::GithubActions
        }
    }

    /// Generates the pipeline and delivers it as a platform-named file.
    pub async fn handle_request(&self, user_id: &UserId, request: &str) {
        let platform = Self::classify(request);
        let prompt = build_pipeline_prompt(platform, request);

        let content = match self.generator.generate(&prompt).await {
            Ok(content) => content,
            Err(err) => {
                warn!(user = %user_id, error = %err, "pipeline generation failed");
                self.deliver(OutboundMessage::text(user_id.clone(), PIPELINE_FAILED_TEXT))
                    .await;
                return;
            }
        };

        let filename = platform.pipeline_filename();
        info!(user = %user_id, %filename, "pipeline generated");
        let message = OutboundMessage::text(user_id.clone(), PIPELINE_READY_TEXT)
            .with_attachment(Attachment::new(filename, content.into_bytes()));
        self.deliver(message).await;
    }

    async fn deliver(&self, message: OutboundMessage) {
        let user_id = message.user_id.clone();
        if let Err(err) = self.messenger.deliver(message).await {
            warn!(user = %user_id, error = %err, "delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;
    use crate::adapters::chat::MockMessenger;
    use crate::ports::GenerationError;

    fn user() -> UserId {
        UserId::new("tester").unwrap()
    }

    #[test]
    fn classify_picks_jenkins_and_gitlab_by_mention() {
        assert_eq!(
            PipelineService::classify("a Jenkins pipeline for my app"),
            CicdPlatform::Jenkins
        );
        assert_eq!(
            PipelineService::classify("GitLab CI for the monorepo"),
            CicdPlatform::Gitlab
        );
    }

    #[test]
    fn classify_defaults_to_github_actions() {
        assert_eq!(
            PipelineService::classify("build and deploy my flask app"),
            CicdPlatform::GithubActions
        );
    }

    #[tokio::test]
    async fn delivers_platform_named_file() {
        let generator = MockTextGenerator::new().with_response("pipeline { }");
        let messenger = MockMessenger::new();
        let service =
            PipelineService::new(Arc::new(generator), Arc::new(messenger.clone()));

        service
            .handle_request(&user(), "a jenkins pipeline please")
            .await;

        let last = messenger.last_delivery().unwrap();
        assert_eq!(last.text.as_deref(), Some(PIPELINE_READY_TEXT));
        assert_eq!(last.attachments.len(), 1);
        assert_eq!(last.attachments[0].filename, "Jenkinsfile");
        assert_eq!(last.attachments[0].bytes, b"pipeline { }".to_vec());
    }

    #[tokio::test]
    async fn default_request_gets_workflow_filename() {
        let generator = MockTextGenerator::new().with_response("on: push");
        let messenger = MockMessenger::new();
        let service =
            PipelineService::new(Arc::new(generator), Arc::new(messenger.clone()));

        service.handle_request(&user(), "deploy my app").await;

        let last = messenger.last_delivery().unwrap();
        assert_eq!(last.attachments[0].filename, "ci.yml");
    }

    #[tokio::test]
    async fn generation_failure_sends_apology_without_attachment() {
        let generator = MockTextGenerator::new().with_error(GenerationError::network("reset"));
        let messenger = MockMessenger::new();
        let service =
            PipelineService::new(Arc::new(generator), Arc::new(messenger.clone()));

        service.handle_request(&user(), "gitlab pipeline").await;

        let last = messenger.last_delivery().unwrap();
        assert_eq!(last.text.as_deref(), Some(PIPELINE_FAILED_TEXT));
        assert!(last.attachments.is_empty());
    }
}
