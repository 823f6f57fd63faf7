//! Building views from command-line segment sources.

use bytes::Bytes;
use memview_core::{Segment, SegmentView, ViewConfig};
use std::path::PathBuf;
use tracing::debug;

/// Builds a view from text segments followed by file segments.
pub fn build(
    config: &ViewConfig,
    texts: &[String],
    files: &[PathBuf],
) -> Result<SegmentView, Box<dyn std::error::Error>> {
    let mut segments = Vec::with_capacity(texts.len() + files.len());
    segments.extend(texts.iter().cloned().map(Segment::from));

    for path in files {
        let data = std::fs::read(path)
            .map_err(|e| format!("failed to read segment file {}: {e}", path.display()))?;
        debug!(path = %path.display(), len = data.len(), "loaded segment file");
        segments.push(Segment::new(Bytes::from(data)));
    }

    Ok(SegmentView::with_config(config, segments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn texts_then_files() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"world").unwrap();

        let view = build(
            &ViewConfig::default(),
            &["hello".to_string()],
            &[file.path().to_path_buf()],
        )
        .unwrap();

        assert_eq!(view.segment_count(), 2);
        assert_eq!(view.read_at(0, 10).unwrap(), b"helloworld");
    }

    #[test]
    fn missing_file_is_reported() {
        let result = build(
            &ViewConfig::default(),
            &[],
            &[PathBuf::from("/nonexistent/memview/segment.bin")],
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("segment.bin"));
    }

    #[test]
    fn drop_empty_applies() {
        let config = ViewConfig::new().drop_empty_segments(true);
        let view = build(&config, &[String::new(), "ab".to_string()], &[]).unwrap();
        assert_eq!(view.segment_count(), 1);
    }
}
