//! `giftdraw check` command.

use std::path::Path;

use crate::derangement::Participants;
use crate::export::DrawRecord;

/// Verify an exported draw, optionally against the expected participants.
///
/// Loading already rejects self-assignments and broken bijections; the
/// participant comparison runs on top of that.
///
/// # Errors
///
/// Returns an error string describing the first problem found.
pub fn run(file: &Path, names: &[String]) -> Result<(), String> {
    let summary = check(file, names)?;
    println!("{summary}");
    Ok(())
}

fn check(file: &Path, names: &[String]) -> Result<String, String> {
    let record = DrawRecord::load(file)?;

    if !names.is_empty() {
        let expected = Participants::parse(names).map_err(|e| e.to_string())?;
        record
            .pairs
            .verify_covers(&expected)
            .map_err(|e| format!("{} does not match the participants: {e}", file.display()))?;
    }

    Ok(format!(
        "OK: {} pairs, nobody draws themselves (drawn {}, {} strategy, {} attempt(s))",
        record.pairs.len(),
        record.drawn_at.format("%Y-%m-%d %H:%M UTC"),
        record.strategy,
        record.attempts,
    ))
}
