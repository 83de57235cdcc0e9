//! Core domain logic for NoteVault: a session-scoped, password-gated
//! single-note vault. This crate is the single source of truth for the
//! draft/secured note lifecycle and its persistence rules.

pub mod clock;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{char_count, word_count, SaveRecord, NOTE_MAX_CHARS};
pub use service::vault_service::{
    VaultError, VaultResult, VaultSession, SAVED_FLASH_MS, TYPING_QUIET_MS,
};
pub use store::saved_note::{
    clear_saved_note, load_saved_note, persist_saved_note, SAVED_AT_KEY, SAVED_TEXT_KEY,
};
pub use store::session::{MemorySessionStore, SessionStore};
pub use timer::DebounceTimer;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
