//! Image part extraction from the document package.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{ConvertError, Result};

/// Extracts embedded images from the package's media directory as
/// (name, bytes) pairs, sorted by part name for deterministic output.
/// Media entries whose bytes do not sniff as an image are skipped.
pub(crate) fn extract_image_parts(data: &[u8]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ConvertError::InputFormat(format!("not a valid .docx package: {e}")))?;

    let mut images = Vec::new();
    for index in 0..archive.len() {
        let mut part = archive
            .by_index(index)
            .map_err(|e| ConvertError::InputFormat(format!("unreadable package entry: {e}")))?;
        let path = part.name().to_string();
        if !path.starts_with("word/media/") || path.ends_with('/') {
            continue;
        }

        let mut bytes = Vec::new();
        part.read_to_end(&mut bytes)?;
        if image::guess_format(&bytes).is_err() {
            continue;
        }

        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        images.push((name, bytes));
    }

    images.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(images)
}
