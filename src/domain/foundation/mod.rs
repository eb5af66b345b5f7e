//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types, and traits that form the
//! vocabulary of the assistant's domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::UserId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
