//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the vault session lifecycle over store and clock
//!   abstractions.
//! - Keep UI layers decoupled from persistence and timing details.

pub mod vault_service;
