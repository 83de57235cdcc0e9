//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notevault_core` linkage.
//! - Walk one vault session end to end with deterministic output.

use notevault_core::{MemorySessionStore, SystemClock, VaultError, VaultSession};

fn main() {
    if let Err(err) = run() {
        eprintln!("notevault_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), VaultError> {
    println!("notevault_core version={}", notevault_core::core_version());

    let mut session = VaultSession::new(MemorySessionStore::new(), SystemClock);
    session.authenticate("demo-password")?;
    session.update_draft("Hello from the vault")?;
    println!(
        "draft chars={} words={} typing={}",
        session.char_count(),
        session.word_count(),
        session.is_typing()
    );

    session.save()?;
    println!(
        "secured=`{}` saved_at={}",
        session.secured_text().unwrap_or_default(),
        session
            .saved_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_default()
    );

    // Simulated reload: the secured note must survive initialize().
    session.initialize()?;
    println!(
        "after reload secured_present={}",
        session.secured_text().is_some()
    );

    Ok(())
}
