//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate db/repo calls into use-case level APIs.
//! - Keep the presentation layer decoupled from storage details.

pub mod feedback_service;
