//! `giftdraw reveal` command.

use std::path::Path;

use crate::export::DrawRecord;

/// Print the receiver for `giver` from an exported draw.
///
/// # Errors
///
/// Returns an error string if the file cannot be loaded or `giver` is not
/// part of the draw.
pub fn run(file: &Path, giver: &str) -> Result<(), String> {
    println!("{}", receiver_line(file, giver)?);
    Ok(())
}

fn receiver_line(file: &Path, giver: &str) -> Result<String, String> {
    let record = DrawRecord::load(file)?;
    let giver = giver.trim();
    let receiver = record.pairs.receiver_for(giver).ok_or_else(|| {
        let givers: Vec<&str> = record.pairs.givers().collect();
        format!("{giver:?} is not in this draw (givers: {})", givers.join(", "))
    })?;
    Ok(format!("{giver} buys a gift for {receiver}"))
}
