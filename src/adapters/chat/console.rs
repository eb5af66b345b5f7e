//! Console messenger.
//!
//! Minimal transport for running the assistant without a chat platform:
//! text goes to stdout, attachments are written as files into an output
//! directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::ports::{DeliveryError, Messenger, OutboundMessage};

/// Messenger that prints text and saves attachments to disk.
#[derive(Debug, Clone)]
pub struct ConsoleMessenger {
    output_dir: PathBuf,
}

impl ConsoleMessenger {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn deliver(&self, message: OutboundMessage) -> Result<(), DeliveryError> {
        if let Some(text) = &message.text {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(format!("@{}> {}\n", message.user_id, text).as_bytes())
                .await
                .map_err(|e| DeliveryError::transport(e.to_string()))?;
        }

        if !message.attachments.is_empty() {
            fs::create_dir_all(&self.output_dir)
                .await
                .map_err(|e| DeliveryError::transport(e.to_string()))?;
            for attachment in &message.attachments {
                // Attachment names are fixed, kind-derived filenames; no
                // user-controlled path components reach this join.
                let path = self.output_dir.join(&attachment.filename);
                fs::write(&path, &attachment.bytes)
                    .await
                    .map_err(|e| DeliveryError::transport(e.to_string()))?;
                info!(path = %path.display(), "attachment written");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::Attachment;

    #[tokio::test]
    async fn attachments_are_written_to_the_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let messenger = ConsoleMessenger::new(dir.path());

        let message = OutboundMessage::text(UserId::new("tester").unwrap(), "your files")
            .with_attachment(Attachment::new("Dockerfile", b"FROM alpine".to_vec()))
            .with_attachment(Attachment::new("kubernetes.yaml", b"kind: Pod".to_vec()));

        messenger.deliver(message).await.unwrap();

        let dockerfile = std::fs::read(dir.path().join("Dockerfile")).unwrap();
        assert_eq!(dockerfile, b"FROM alpine".to_vec());
        let manifest = std::fs::read(dir.path().join("kubernetes.yaml")).unwrap();
        assert_eq!(manifest, b"kind: Pod".to_vec());
    }

    #[tokio::test]
    async fn text_only_message_writes_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let messenger = ConsoleMessenger::new(dir.path().join("out"));

        let message = OutboundMessage::text(UserId::new("tester").unwrap(), "hello");
        messenger.deliver(message).await.unwrap();

        assert!(!dir.path().join("out").exists());
    }
}
