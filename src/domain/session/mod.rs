//! Dialogue session domain.
//!
//! A deploy session tracks one user's progress through the multi-turn
//! parameter-collection dialogue: which stage they are at and which
//! deployment parameters have been captured so far.

mod cicd;
mod session;
mod stage;

pub use cicd::{CicdMatchError, CicdPlatform};
pub use session::DeploySession;
pub use stage::DialogueStage;
