//! DevOps Assistant - Conversational deployment artifact generation.
//!
//! This crate drives a multi-turn dialogue that collects deployment
//! parameters, assembles them into a single generation request, and splits
//! the engine's one-shot reply into labeled artifacts (Dockerfile,
//! Kubernetes manifest, CI/CD pipeline) for delivery.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
