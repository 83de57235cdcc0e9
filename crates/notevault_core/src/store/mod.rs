//! Session-scoped persistence layer.
//!
//! # Responsibility
//! - Define the abstract key-value contract for session-lifetime storage.
//! - Map the saved-note record onto its two well-known keys.
//!
//! # Invariants
//! - The store is a passive sink; all mutation decisions live in the service
//!   layer.
//! - Saved-note keys are written and removed together, never individually.

pub mod saved_note;
pub mod session;
