//! Export — write a filtered view out as JSON.
//!
//! The export always receives the *references* produced by the query layer,
//! so what lands on disk is exactly what the table showed, in the same order.

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Failure writing or encoding an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serialise `records` as a JSON array into `writer`.
///
/// `pretty` selects indented output; either way a trailing newline is
/// appended so the file ends cleanly.
pub fn write_json<W: Write, T: Serialize>(
    mut writer: W,
    records: &[&T],
    pretty: bool,
) -> Result<(), ExportError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &records)?;
    } else {
        serde_json::to_writer(&mut writer, &records)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// [`write_json`] into a freshly created file at `path`.
pub fn export_to_file<P: AsRef<Path>, T: Serialize>(
    path: P,
    records: &[&T],
    pretty: bool,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_json(std::io::BufWriter::new(file), records, pretty)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
