//! File validation.

use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ConvertError, Result};

/// Validates that the file is a legitimate .docx package before parsing.
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        return Err(ConvertError::InputFormat(format!(
            "expected a .docx file, got .{extension}"
        )));
    }

    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ConvertError::InputFormat(format!("not a valid .docx package: {e}")))?;

    if archive.by_name("word/document.xml").is_err() {
        // An .xlsx renamed to .docx is a common mixup worth naming.
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(ConvertError::InputFormat(
                "this appears to be an Excel workbook, not a Word document".to_string(),
            ));
        }

        return Err(ConvertError::InputFormat(
            "missing word/document.xml; the file may be corrupted or is not a Word document"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_wrong_extension() {
        let err = validate_docx_file(Path::new("report.pdf")).unwrap_err();
        assert!(err.to_string().contains(".pdf"));
    }

    #[test]
    fn rejects_extensionless_path() {
        let err = validate_docx_file(Path::new("report")).unwrap_err();
        assert!(matches!(err, ConvertError::InputFormat(_)));
    }

    #[test]
    fn rejects_non_zip_content() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"plain text, not a zip").unwrap();
        let err = validate_docx_file(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::InputFormat(_)));
    }

    #[test]
    fn rejects_zip_without_document_xml() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("other.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"nothing wordy").unwrap();
        writer.finish().unwrap();

        let err = validate_docx_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }
}
