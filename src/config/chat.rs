//! Chat transport configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Chat transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Maximum inline message length before a reply is sent as a file
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,

    /// Directory where the console transport writes attachments
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_message_len == 0 {
            return Err(ValidationError::InvalidMessageLimit);
        }
        if self.output_dir.is_empty() {
            return Err(ValidationError::MissingRequired("CHAT_OUTPUT_DIR"));
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_len: default_max_message_len(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_max_message_len() -> usize {
    2000
}

fn default_output_dir() -> String {
    "generated".to_string()
}
