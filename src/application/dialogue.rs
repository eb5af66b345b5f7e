//! Deploy dialogue orchestrator.
//!
//! Drives the multi-turn parameter-collection state machine: looks up (or
//! creates) the session for an inbound event, validates input for the
//! current stage, and on a confirmed session runs the generation pipeline
//! (prompt build, generate, segment, dispatch, deliver).
//!
//! Every event is one unit of work under the sender's turn lock; the
//! generation call happens inside that critical section, so a session never
//! has two generations in flight while other users' turns stay unaffected.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::foundation::UserId;
use crate::domain::generation::{build_deploy_prompt, dispatch, segment};
use crate::domain::session::{CicdPlatform, DeploySession, DialogueStage};
use crate::ports::{Messenger, OutboundMessage, SessionStore, TextGenerator};

use super::locks::TurnLocks;

/// Start signals recognized anywhere a message begins.
const START_COMMANDS: [&str; 2] = ["!deploy", "/start"];

const CANCELLED_TEXT: &str = "Session cancelled.";
const GENERATING_TEXT: &str = "Generating files based on your inputs...";
const FILES_READY_TEXT: &str = "Here are your generated files:";
const NO_SPLIT_TEXT: &str =
    "I couldn't detect separate files, sending all content in one file.";
const GENERATION_FAILED_TEXT: &str =
    "Sorry, an error occurred while generating your files. Please try again later.";

/// One inbound chat event.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub user_id: UserId,
    pub text: String,
}

impl InboundEvent {
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
        }
    }

    /// True if the text begins with a start command.
    pub fn is_start_signal(&self) -> bool {
        let lowered = self.text.trim().to_lowercase();
        START_COMMANDS.iter().any(|cmd| lowered.starts_with(cmd))
    }
}

/// What the dialogue did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event belonged to this dialogue (start signal or active session).
    Handled,
    /// No active session and not a start signal; the caller may route the
    /// event elsewhere.
    Ignored,
}

/// The conversational state machine service.
pub struct DeployDialogue {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn TextGenerator>,
    messenger: Arc<dyn Messenger>,
    locks: TurnLocks,
}

impl DeployDialogue {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn TextGenerator>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            store,
            generator,
            messenger,
            locks: TurnLocks::new(),
        }
    }

    /// Processes one inbound event as a complete turn.
    ///
    /// The sender's turn lock is held for the whole call, including any
    /// generation triggered by a confirmation.
    pub async fn handle_event(&self, event: InboundEvent) -> EventOutcome {
        let _turn = self.locks.acquire(&event.user_id).await;

        if event.is_start_signal() {
            self.start(&event.user_id).await;
            return EventOutcome::Handled;
        }

        match self.store.get(&event.user_id).await {
            Some(session) => {
                self.handle_input(session, event.text.trim()).await;
                EventOutcome::Handled
            }
            None => EventOutcome::Ignored,
        }
    }

    /// Creates (or overwrites) a session and asks the first question.
    async fn start(&self, user_id: &UserId) {
        let mut session = DeploySession::new(user_id.clone());
        if let Err(err) = session.begin() {
            error!(user = %user_id, error = %err, "failed to begin session");
            return;
        }
        info!(user = %user_id, "deploy dialogue started");
        self.ask_stage_question(&session).await;
        self.store.put(session).await;
    }

    /// One stage-transition attempt for an existing session.
    async fn handle_input(&self, mut session: DeploySession, text: &str) {
        match session.stage() {
            DialogueStage::AwaitFramework => {
                if session.record_framework(text).is_err() {
                    // Empty input: stay on the same stage and ask again.
                    self.ask_stage_question(&session).await;
                    return;
                }
                self.ask_stage_question(&session).await;
                self.store.put(session).await;
            }
            DialogueStage::AwaitIngress => {
                if let Err(err) = session.record_ingress(text) {
                    error!(user = %session.user_id(), error = %err, "ingress stage failed");
                    return;
                }
                self.ask_stage_question(&session).await;
                self.store.put(session).await;
            }
            DialogueStage::AwaitCicd => match CicdPlatform::parse(text) {
                Ok(platform) => {
                    if let Err(err) = session.record_cicd(platform) {
                        error!(user = %session.user_id(), error = %err, "cicd stage failed");
                        return;
                    }
                    self.ask_stage_question(&session).await;
                    self.store.put(session).await;
                }
                Err(_) => {
                    // Unrecognized or ambiguous: reprompt, session unchanged.
                    self.send_text(
                        session.user_id(),
                        format!(
                            "'{}' is not a recognized CI/CD platform.\n\
                             Please choose one of: GitHub Actions, Jenkins, GitLab, or None.",
                            text
                        ),
                    )
                    .await;
                }
            },
            DialogueStage::AwaitConfirmation => {
                if DeploySession::is_confirmation(text) {
                    if let Err(err) = session.complete() {
                        error!(user = %session.user_id(), error = %err, "confirmation failed");
                        return;
                    }
                    self.send_text(session.user_id(), GENERATING_TEXT).await;
                    self.run_generation(&session).await;
                    self.store.remove(session.user_id()).await;
                } else {
                    if let Err(err) = session.cancel() {
                        error!(user = %session.user_id(), error = %err, "cancel failed");
                    }
                    let user_id = session.user_id().clone();
                    self.store.remove(&user_id).await;
                    self.send_text(&user_id, CANCELLED_TEXT).await;
                }
            }
            stage @ (DialogueStage::Idle
            | DialogueStage::Completed
            | DialogueStage::Cancelled) => {
                // A session should never be stored at these stages.
                warn!(user = %session.user_id(), ?stage, "input for inactive session");
                self.store.remove(session.user_id()).await;
            }
        }
    }

    /// Runs the generation pipeline for a confirmed session.
    async fn run_generation(&self, session: &DeploySession) {
        let prompt = build_deploy_prompt(session);
        let raw = match self.generator.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(user = %session.user_id(), error = %err, "generation failed");
                self.send_text(session.user_id(), GENERATION_FAILED_TEXT).await;
                return;
            }
        };

        let artifacts = segment(&raw);
        let split_succeeded = !artifacts.is_empty()
            && artifacts
                .iter()
                .any(|a| a.kind() != crate::domain::generation::ArtifactKind::Opaque);
        let deliverables = dispatch(artifacts, &raw);
        info!(
            user = %session.user_id(),
            files = deliverables.len(),
            "generation reply segmented"
        );

        let text = if split_succeeded {
            FILES_READY_TEXT
        } else {
            NO_SPLIT_TEXT
        };
        let message = OutboundMessage::text(session.user_id().clone(), text)
            .with_deliverables(deliverables);
        self.deliver(message).await;
    }

    /// Sends the question for the session's current stage, or the
    /// confirmation summary.
    async fn ask_stage_question(&self, session: &DeploySession) {
        let text = match session.stage() {
            DialogueStage::AwaitConfirmation => format!(
                "Please confirm your choices:\n{}\n\
                 Type 'yes' to generate the files or 'no' to cancel.",
                session.summary()
            ),
            stage => match stage.question() {
                Some(question) => question.to_string(),
                None => return,
            },
        };
        self.send_text(session.user_id(), text).await;
    }

    async fn send_text(&self, user_id: &UserId, text: impl Into<String>) {
        self.deliver(OutboundMessage::text(user_id.clone(), text)).await;
    }

    /// Delivery failures are logged, not retried; the turn continues.
    async fn deliver(&self, message: OutboundMessage) {
        let user_id = message.user_id.clone();
        if let Err(err) = self.messenger.deliver(message).await {
            warn!(user = %user_id, error = %err, "delivery failed");
        }
    }
}
