//! Application layer - orchestration of dialogue turns and generation.
//!
//! Services here wire the domain to the ports: they own no business rules
//! beyond sequencing, locking, and user-facing wording.

mod advisor;
mod dialogue;
mod locks;
mod pipeline;

pub use advisor::AdvisorService;
pub use dialogue::{DeployDialogue, EventOutcome, InboundEvent};
pub use locks::TurnLocks;
pub use pipeline::PipelineService;
