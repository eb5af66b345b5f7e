//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - one-shot text generation by an external engine
//! - `Messenger` - delivery of prompts, replies, and file attachments
//! - `SessionStore` - process-wide keyed dialogue state

mod messenger;
mod session_store;
mod text_generator;

pub use messenger::{Attachment, DeliveryError, Messenger, OutboundMessage};
pub use session_store::SessionStore;
pub use text_generator::{GenerationError, TextGenerator};
