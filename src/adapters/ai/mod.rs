//! Generation engine adapters.

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiGenerator};
pub use mock::{MockResponse, MockTextGenerator};
