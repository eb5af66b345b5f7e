//! Messenger Port - Interface to the chat transport.
//!
//! The transport (message delivery, attachment upload, channel identity) is
//! glue outside the core; the core only needs to address a user and hand
//! over text and named byte payloads.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::generation::Deliverable;

/// A named file payload attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

impl From<Deliverable> for Attachment {
    fn from(deliverable: Deliverable) -> Self {
        Self {
            filename: deliverable.filename,
            bytes: deliverable.bytes,
        }
    }
}

/// One outbound delivery: text, attachments, or both, addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub user_id: UserId,
    pub text: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl OutboundMessage {
    /// Creates a text-only message.
    pub fn text(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: Some(text.into()),
            attachments: Vec::new(),
        }
    }

    /// Adds an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Adds attachments converted from dispatched deliverables.
    pub fn with_deliverables(mut self, deliverables: Vec<Deliverable>) -> Self {
        self.attachments
            .extend(deliverables.into_iter().map(Attachment::from));
        self
    }
}

/// Port for delivering messages back to the user.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Delivers one message. No automatic retry is performed by callers.
    async fn deliver(&self, message: OutboundMessage) -> Result<(), DeliveryError>;
}

/// Transport delivery errors.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// Transport-level failure (connection, API error, ...).
    #[error("delivery failed: {0}")]
    Transport(String),

    /// Transport rejected the payload (too large, bad attachment, ...).
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

impl DeliveryError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}
