//! Core use-case services.
//!
//! # Responsibility
//! - Run commands against an owned model and keep session-level state
//!   (undo history) out of the command and repository layers.

pub mod command_service;
