//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors, traits)
//! - `session` - Dialogue session aggregate and stage state machine
//! - `generation` - Prompt building, response segmentation, artifact dispatch

pub mod foundation;
pub mod generation;
pub mod session;
