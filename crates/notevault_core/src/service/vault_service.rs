//! Vault session state machine.
//!
//! # Responsibility
//! - Own the draft/secured note lifecycle and its synchronization with the
//!   session store.
//! - Gate the note behind a session-scoped credential check.
//! - Signal typing activity and transient save confirmation via deadline
//!   timers.
//!
//! # Invariants
//! - The note is never non-empty in both positions: save and edit move text
//!   between draft and secured atomically.
//! - The credential is enrolled verbatim on first use and compared
//!   byte-for-byte afterwards; it is never written to the store.
//! - Every failure is a typed recoverable outcome; nothing here panics.
//! - Log lines carry metadata only, never note text or credential material.

use crate::clock::Clock;
use crate::model::note::{char_count, word_count, SaveRecord, NOTE_MAX_CHARS};
use crate::store::saved_note::{clear_saved_note, load_saved_note, persist_saved_note};
use crate::store::session::SessionStore;
use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::timer::DebounceTimer;

/// Quiescence interval after the last edit before the typing signal drops.
pub const TYPING_QUIET_MS: i64 = 1000;
/// Lifetime of the transient "saved" confirmation signal.
pub const SAVED_FLASH_MS: i64 = 2000;

pub type VaultResult<T> = Result<T, VaultError>;

/// Recoverable outcome for every vault operation.
///
/// All variants are user-facing validation results, surfaced to the UI for
/// display; none are fatal and nothing is retried or escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// Empty or whitespace-only input where text is required.
    EmptyInput,
    /// Draft text beyond the note length bound.
    OversizeText { len: usize, max: usize },
    /// Wrong password for a session with an established credential.
    CredentialMismatch,
    /// Edit or clear attempted with nothing saved.
    NoSecuredNote,
    /// Sub-state operation invoked before a successful `authenticate`.
    NotAuthenticated,
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input is empty or whitespace-only"),
            Self::OversizeText { len, max } => {
                write!(f, "note text is {len} chars, limit is {max}")
            }
            Self::CredentialMismatch => write!(f, "incorrect password"),
            Self::NoSecuredNote => write!(f, "no secured note exists"),
            Self::NotAuthenticated => write!(f, "vault session is not authenticated"),
        }
    }
}

impl Error for VaultError {}

/// One user's vault session: credential gate, note lifecycle, timers.
///
/// A plain value object over a [`SessionStore`] and a [`Clock`]; there is no
/// hidden global, so multiple sessions can coexist (each modeling one
/// browser tab/session). Single-threaded and event-driven: each operation
/// runs to completion, and the only asynchronous elements are the two
/// deadline timers, both cancellable and evaluated lazily.
pub struct VaultSession<S: SessionStore, C: Clock> {
    store: S,
    clock: C,
    credential: Option<String>,
    authenticated: bool,
    draft_text: String,
    secured: Option<SaveRecord>,
    typing: DebounceTimer,
    saved_flash: DebounceTimer,
}

impl<S: SessionStore, C: Clock> VaultSession<S, C> {
    /// Creates a fresh unauthenticated session over `store` and `clock`.
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            credential: None,
            authenticated: false,
            draft_text: String::new(),
            secured: None,
            typing: DebounceTimer::idle(),
            saved_flash: DebounceTimer::idle(),
        }
    }

    /// Checks `attempt` against the session credential.
    ///
    /// First-use-enrolls: when no credential exists yet, a non-empty attempt
    /// becomes the credential and the session authenticates. Afterwards the
    /// attempt must match byte-for-byte. Empty/whitespace-only attempts are
    /// rejected with [`VaultError::EmptyInput`] before any comparison.
    ///
    /// On success the authenticated sub-state is initialized from the store.
    pub fn authenticate(&mut self, attempt: &str) -> VaultResult<()> {
        if attempt.trim().is_empty() {
            return Err(VaultError::EmptyInput);
        }

        match &self.credential {
            None => {
                self.credential = Some(attempt.to_string());
                info!("event=credential_enrolled module=vault status=ok");
            }
            Some(existing) if existing == attempt => {}
            Some(_) => {
                warn!("event=authenticate module=vault status=mismatch");
                return Err(VaultError::CredentialMismatch);
            }
        }

        self.authenticated = true;
        self.initialize()
    }

    /// (Re)loads the authenticated sub-state from the session store.
    ///
    /// Runs automatically on successful `authenticate`; public so a host can
    /// simulate a page reload against the same store. The draft always
    /// starts empty and both timers are reset.
    pub fn initialize(&mut self) -> VaultResult<()> {
        self.require_authenticated()?;
        self.secured = load_saved_note(&self.store);
        self.draft_text.clear();
        self.typing.cancel();
        self.saved_flash.cancel();
        info!(
            "event=session_init module=vault status=ok secured_present={}",
            self.secured.is_some()
        );
        Ok(())
    }

    /// Replaces the draft text.
    ///
    /// Text beyond [`NOTE_MAX_CHARS`] scalars is rejected with
    /// [`VaultError::OversizeText`]. A non-empty draft that differs from the
    /// secured text (re)arms the typing signal; anything else cancels it.
    pub fn update_draft(&mut self, text: impl Into<String>) -> VaultResult<()> {
        self.require_authenticated()?;
        let text = text.into();
        let len = char_count(&text);
        if len > NOTE_MAX_CHARS {
            return Err(VaultError::OversizeText {
                len,
                max: NOTE_MAX_CHARS,
            });
        }

        self.draft_text = text;
        let differs_from_secured = !self.draft_text.is_empty()
            && self.secured.as_ref().map(|record| record.text.as_str())
                != Some(self.draft_text.as_str());
        if differs_from_secured {
            self.typing
                .arm(self.clock.now(), Duration::milliseconds(TYPING_QUIET_MS));
        } else {
            self.typing.cancel();
        }
        Ok(())
    }

    /// Secures the current draft.
    ///
    /// Moves the draft into a fresh [`SaveRecord`] stamped with the clock's
    /// current time, persists both store keys, clears the draft and arms the
    /// transient saved signal. A whitespace-only draft is reported as
    /// [`VaultError::EmptyInput`] (nothing to do).
    pub fn save(&mut self) -> VaultResult<()> {
        self.require_authenticated()?;
        if self.draft_text.trim().is_empty() {
            return Err(VaultError::EmptyInput);
        }

        let now = self.clock.now();
        let record = SaveRecord::new(std::mem::take(&mut self.draft_text), now);
        persist_saved_note(&mut self.store, &record);
        info!(
            "event=note_saved module=vault status=ok chars={}",
            char_count(&record.text)
        );
        self.secured = Some(record);
        self.typing.cancel();
        self.saved_flash
            .arm(now, Duration::milliseconds(SAVED_FLASH_MS));
        Ok(())
    }

    /// Deletes the secured note from memory and store. The draft is left
    /// untouched.
    pub fn clear(&mut self) -> VaultResult<()> {
        self.require_authenticated()?;
        if self.secured.is_none() {
            return Err(VaultError::NoSecuredNote);
        }
        self.secured = None;
        clear_saved_note(&mut self.store);
        info!("event=note_cleared module=vault status=ok");
        Ok(())
    }

    /// Moves the secured note back into the draft for re-editing.
    ///
    /// Equivalent to `clear()` followed by loading the secured text into the
    /// draft. Does not arm the typing signal; that tracks typing activity,
    /// not programmatic moves.
    pub fn edit(&mut self) -> VaultResult<()> {
        self.require_authenticated()?;
        let Some(record) = self.secured.take() else {
            return Err(VaultError::NoSecuredNote);
        };
        self.draft_text = record.text;
        clear_saved_note(&mut self.store);
        info!("event=note_reopened module=vault status=ok");
        Ok(())
    }

    /// Leaves the authenticated state.
    ///
    /// Volatile sub-state (draft, in-memory secured copy) is dropped and
    /// both timers are cancelled so no stale deadline outlives the state it
    /// belonged to. The store and the credential survive; re-authentication
    /// uses the same comparison as before.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.draft_text.clear();
        self.secured = None;
        self.typing.cancel();
        self.saved_flash.cancel();
        info!("event=logout module=vault status=ok");
    }

    /// Returns whether the session has passed the credential gate.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Current draft text.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Secured note text, when one is saved.
    pub fn secured_text(&self) -> Option<&str> {
        self.secured.as_ref().map(|record| record.text.as_str())
    }

    /// Timestamp of the last save, when a secured note exists.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.secured.as_ref().map(|record| record.saved_at)
    }

    /// Whether the typing signal is up: an edit changed the draft away from
    /// the secured text less than the quiescence interval ago.
    pub fn is_typing(&self) -> bool {
        self.typing.is_active(self.clock.now())
    }

    /// Whether the transient "saved" confirmation is still up.
    pub fn recently_saved(&self) -> bool {
        self.saved_flash.is_active(self.clock.now())
    }

    /// Unicode scalar count of the draft.
    pub fn char_count(&self) -> usize {
        char_count(&self.draft_text)
    }

    /// Whitespace-delimited token count of the draft.
    pub fn word_count(&self) -> usize {
        word_count(&self.draft_text)
    }

    /// Read access to the underlying store, mainly for inspection in tests
    /// and host integration.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn require_authenticated(&self) -> VaultResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(VaultError::NotAuthenticated)
        }
    }
}
