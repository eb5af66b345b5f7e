//! Adapters - Implementations of the ports.
//!
//! - `ai` - generation engine adapters (Gemini HTTP client, test mock)
//! - `chat` - messenger adapters (console delivery, test mock)
//! - `session` - session store adapters (in-memory keyed map)

pub mod ai;
pub mod chat;
pub mod session;
