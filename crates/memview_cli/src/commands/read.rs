//! Read command implementation.

use memview_core::SegmentView;
use serde::Serialize;

/// Result of a read.
#[derive(Debug, Serialize)]
pub struct ReadResult {
    /// Logical offset that was read.
    pub offset: usize,
    /// Number of bytes read.
    pub len: usize,
    /// The bytes, decoded lossily as UTF-8.
    pub text: String,
    /// The raw bytes.
    pub bytes: Vec<u8>,
}

/// Reads `len` bytes at `offset` (the rest of the view if `len` is `None`).
pub fn execute(
    view: &SegmentView,
    offset: usize,
    len: Option<usize>,
) -> Result<ReadResult, Box<dyn std::error::Error>> {
    let len = match len {
        Some(len) => len,
        None => view
            .len()
            .checked_sub(offset)
            .ok_or_else(|| format!("offset {offset} is past the end of the view ({})", view.len()))?,
    };

    let bytes = view.read_at(offset, len)?;
    Ok(ReadResult {
        offset,
        len,
        text: String::from_utf8_lossy(&bytes).into_owned(),
        bytes,
    })
}

/// Runs the read command.
pub fn run(
    view: &SegmentView,
    offset: usize,
    len: Option<usize>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = execute(view, offset, len)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => println!("{}", result.text),
    }

    Ok(())
}
