//! Saving and loading journals, kept apart from `Journal` itself.

use std::io::{Read, Write};

use super::Journal;
use crate::Result;

pub fn save<W: Write>(journal: &Journal, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, journal)?;
    tracing::info!(entries = journal.len(), "journal saved");
    Ok(())
}

pub fn load<R: Read>(reader: R) -> Result<Journal> {
    let journal: Journal = serde_json::from_reader(reader)?;
    tracing::info!(entries = journal.len(), "journal loaded");
    Ok(journal)
}
