//! Free-form DevOps question answering.
//!
//! One question in, one answer out, under a fixed senior-engineer persona.
//! Replies longer than the transport's message limit are delivered as a
//! text file instead of inline text.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::UserId;
use crate::domain::generation::ADVISOR_PREAMBLE;
use crate::ports::{Attachment, Messenger, OutboundMessage, TextGenerator};

const LONG_REPLY_TEXT: &str = "The answer is long, sending it as a file:";
const LONG_REPLY_FILENAME: &str = "response.txt";
const ADVISOR_FAILED_TEXT: &str =
    "Sorry, an error occurred while answering your question. Please try again later.";

/// Answers ad-hoc questions outside any dialogue.
pub struct AdvisorService {
    generator: Arc<dyn TextGenerator>,
    messenger: Arc<dyn Messenger>,
    max_message_len: usize,
}

impl AdvisorService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        messenger: Arc<dyn Messenger>,
        max_message_len: usize,
    ) -> Self {
        Self {
            generator,
            messenger,
            max_message_len,
        }
    }

    /// Answers one question and delivers the reply.
    pub async fn handle_question(&self, user_id: &UserId, question: &str) {
        let prompt = format!("{}\nUser: {}", ADVISOR_PREAMBLE, question.trim());

        let answer = match self.generator.generate(&prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!(user = %user_id, error = %err, "advisor generation failed");
                self.deliver(OutboundMessage::text(user_id.clone(), ADVISOR_FAILED_TEXT))
                    .await;
                return;
            }
        };

        info!(user = %user_id, chars = answer.len(), "question answered");
        let message = if answer.len() > self.max_message_len {
            OutboundMessage::text(user_id.clone(), LONG_REPLY_TEXT).with_attachment(
                Attachment::new(LONG_REPLY_FILENAME, answer.into_bytes()),
            )
        } else {
            OutboundMessage::text(user_id.clone(), answer)
        };
        self.deliver(message).await;
    }

    async fn deliver(&self, message: OutboundMessage) {
        let user_id = message.user_id.clone();
        if let Err(err) = self.messenger.deliver(message).await {
            warn!(user = %user_id, error = %err, "delivery failed");
        }
    }
}
