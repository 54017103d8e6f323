//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! Callers pass the acting user into every operation; the core holds no
//! process-wide session state.

pub mod account_service;
pub mod agenda_service;
pub mod schedule_service;
