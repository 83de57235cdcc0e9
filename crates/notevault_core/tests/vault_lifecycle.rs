use chrono::{Duration, TimeZone, Utc};
use notevault_core::{
    ManualClock, MemorySessionStore, SessionStore, VaultError, VaultSession, NOTE_MAX_CHARS,
    SAVED_AT_KEY, SAVED_TEXT_KEY,
};

fn authenticated_session() -> (VaultSession<MemorySessionStore, ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    let mut session = VaultSession::new(MemorySessionStore::new(), clock.clone());
    session.authenticate("hunter2").unwrap();
    (session, clock)
}

#[test]
fn save_moves_draft_into_secured_and_persists_both_keys() {
    let (mut session, _clock) = authenticated_session();

    session.update_draft("Hello world").unwrap();
    assert_eq!(session.char_count(), 11);
    assert_eq!(session.word_count(), 2);

    session.save().unwrap();
    assert_eq!(session.secured_text(), Some("Hello world"));
    assert_eq!(session.draft_text(), "");
    assert_eq!(session.word_count(), 0);
    assert!(session.recently_saved());

    assert_eq!(
        session.store().get(SAVED_TEXT_KEY).as_deref(),
        Some("Hello world")
    );
    assert!(session.store().get(SAVED_AT_KEY).is_some());
}

#[test]
fn save_with_empty_or_whitespace_draft_reports_nothing_to_do() {
    let (mut session, _clock) = authenticated_session();

    assert_eq!(session.save().unwrap_err(), VaultError::EmptyInput);

    session.update_draft("  \n ").unwrap();
    assert_eq!(session.save().unwrap_err(), VaultError::EmptyInput);
    assert_eq!(session.secured_text(), None);
}

#[test]
fn second_save_without_new_draft_is_a_no_op_on_content() {
    let (mut session, _clock) = authenticated_session();
    session.update_draft("stable text").unwrap();
    session.save().unwrap();
    let first_saved_at = session.saved_at().unwrap();

    // The draft was cleared by the first save, so there is nothing to do.
    assert_eq!(session.save().unwrap_err(), VaultError::EmptyInput);
    assert_eq!(session.secured_text(), Some("stable text"));
    assert_eq!(session.saved_at().unwrap(), first_saved_at);
}

#[test]
fn clear_removes_secured_note_from_memory_and_store() {
    let (mut session, _clock) = authenticated_session();
    session.update_draft("Hello world").unwrap();
    session.save().unwrap();
    session.update_draft("untouched draft").unwrap();

    session.clear().unwrap();
    assert_eq!(session.secured_text(), None);
    assert_eq!(session.saved_at(), None);
    assert!(session.store().get(SAVED_TEXT_KEY).is_none());
    assert!(session.store().get(SAVED_AT_KEY).is_none());

    // The draft is unaffected by clear.
    assert_eq!(session.draft_text(), "untouched draft");

    assert_eq!(session.clear().unwrap_err(), VaultError::NoSecuredNote);
}

#[test]
fn edit_moves_secured_text_back_into_the_draft() {
    let (mut session, _clock) = authenticated_session();
    session.update_draft("secured once").unwrap();
    session.save().unwrap();

    session.edit().unwrap();
    assert_eq!(session.draft_text(), "secured once");
    assert_eq!(session.secured_text(), None);
    assert_eq!(session.saved_at(), None);
    assert!(session.store().get(SAVED_TEXT_KEY).is_none());
    assert!(session.store().get(SAVED_AT_KEY).is_none());
}

#[test]
fn edit_with_nothing_saved_is_rejected() {
    let (mut session, _clock) = authenticated_session();
    assert_eq!(session.edit().unwrap_err(), VaultError::NoSecuredNote);
}

#[test]
fn edit_then_save_reproduces_text_with_a_fresh_timestamp() {
    let (mut session, clock) = authenticated_session();
    session.update_draft("unchanged body").unwrap();
    session.save().unwrap();
    let first_saved_at = session.saved_at().unwrap();

    session.edit().unwrap();
    clock.advance(Duration::seconds(30));
    session.save().unwrap();

    assert_eq!(session.secured_text(), Some("unchanged body"));
    let second_saved_at = session.saved_at().unwrap();
    assert_eq!(second_saved_at, first_saved_at + Duration::seconds(30));
}

#[test]
fn simulated_reload_restores_secured_state_byte_identically() {
    let (mut session, _clock) = authenticated_session();
    session.update_draft("survives reload ✓ with  odd spacing\n").unwrap();
    session.save().unwrap();
    let saved_text = session.secured_text().unwrap().to_string();
    let saved_at = session.saved_at().unwrap();

    // Reload: volatile state resets, secured state reloads from the store.
    session.initialize().unwrap();
    assert_eq!(session.draft_text(), "");
    assert_eq!(session.secured_text(), Some(saved_text.as_str()));
    assert_eq!(session.saved_at(), Some(saved_at));
}

#[test]
fn oversize_draft_is_rejected_with_a_typed_outcome() {
    let (mut session, _clock) = authenticated_session();

    let at_limit = "x".repeat(NOTE_MAX_CHARS);
    session.update_draft(at_limit.as_str()).unwrap();

    let over = "x".repeat(NOTE_MAX_CHARS + 1);
    assert_eq!(
        session.update_draft(over.as_str()).unwrap_err(),
        VaultError::OversizeText {
            len: NOTE_MAX_CHARS + 1,
            max: NOTE_MAX_CHARS,
        }
    );
    // The rejected update must not have replaced the draft.
    assert_eq!(session.draft_text(), at_limit);
}

#[test]
fn sessions_over_distinct_stores_do_not_interact() {
    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    let mut first = VaultSession::new(MemorySessionStore::new(), clock.clone());
    let mut second = VaultSession::new(MemorySessionStore::new(), clock);

    first.authenticate("alpha").unwrap();
    second.authenticate("beta").unwrap();

    first.update_draft("note a").unwrap();
    first.save().unwrap();

    assert_eq!(second.secured_text(), None);
    assert_eq!(
        second.authenticate("alpha").unwrap_err(),
        VaultError::CredentialMismatch
    );
}
