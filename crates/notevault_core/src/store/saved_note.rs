//! Saved-note persistence over the session store.
//!
//! # Responsibility
//! - Map [`SaveRecord`] onto its two well-known session keys.
//! - Reject corrupt persisted state instead of masking it.
//!
//! # Invariants
//! - `vault_savedMsg` and `vault_lastSaved` are present together or absent
//!   together; any partial or unparseable state loads as "no secured note".
//! - Log lines carry metadata only, never note content.

use crate::model::note::{exceeds_note_limit, SaveRecord};
use crate::store::session::SessionStore;
use chrono::{DateTime, Utc};
use log::warn;

/// Session key holding the secured note text.
pub const SAVED_TEXT_KEY: &str = "vault_savedMsg";
/// Session key holding the RFC 3339 save timestamp.
pub const SAVED_AT_KEY: &str = "vault_lastSaved";

/// Loads the saved note, applying the corruption policy.
///
/// Returns `None` when both keys are absent, and also when the persisted
/// state is corrupt: one key missing, a timestamp that does not parse, or
/// oversize text. Corrupt state is reported via `warn` and treated as
/// absent; the store itself is left untouched.
pub fn load_saved_note<S: SessionStore>(store: &S) -> Option<SaveRecord> {
    let text = store.get(SAVED_TEXT_KEY);
    let stamp = store.get(SAVED_AT_KEY);

    let (text, stamp) = match (text, stamp) {
        (Some(text), Some(stamp)) => (text, stamp),
        (None, None) => return None,
        (text, _) => {
            warn!(
                "event=saved_note_load module=store status=corrupt reason=partial_keys text_present={}",
                text.is_some()
            );
            return None;
        }
    };

    if exceeds_note_limit(&text) {
        warn!(
            "event=saved_note_load module=store status=corrupt reason=oversize_text chars={}",
            text.chars().count()
        );
        return None;
    }

    match DateTime::parse_from_rfc3339(&stamp) {
        Ok(parsed) => Some(SaveRecord::new(text, parsed.with_timezone(&Utc))),
        Err(err) => {
            warn!("event=saved_note_load module=store status=corrupt reason=bad_timestamp error={err}");
            None
        }
    }
}

/// Writes both saved-note keys for `record`.
pub fn persist_saved_note<S: SessionStore>(store: &mut S, record: &SaveRecord) {
    store.set(SAVED_TEXT_KEY, &record.text);
    store.set(SAVED_AT_KEY, &record.saved_at_rfc3339());
}

/// Removes both saved-note keys.
pub fn clear_saved_note<S: SessionStore>(store: &mut S) {
    store.remove(SAVED_TEXT_KEY);
    store.remove(SAVED_AT_KEY);
}
