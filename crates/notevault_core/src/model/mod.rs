//! Domain model for the single-note vault.
//!
//! # Responsibility
//! - Define the canonical saved-note record and note text bounds.
//! - Provide pure text projections (char/word counts) used by the UI.
//!
//! # Invariants
//! - Note text never exceeds [`note::NOTE_MAX_CHARS`] Unicode scalars.
//! - A note occupies exactly one position at a time: draft or secured.

pub mod note;
