//! End-to-end pipeline: content → document → pages → PDF bytes → file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::composer::compose;
use crate::config::Config;
use crate::cv::{CvContent, SectionKind};
use crate::errors::GenerateError;
use crate::layout::layout_document;
use crate::pdf::render_pdf;
use crate::style::StyleSheet;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub pages: usize,
    pub bytes: usize,
}

/// Runs the pipeline with the content and output path from `config`.
pub fn run(config: &Config) -> Result<GenerationReport, GenerateError> {
    let content = load_content(config.content_path.as_deref())?;
    generate(&content, &config.output_path)
}

/// Returns the compiled-in CV unless a JSON file is given.
pub fn load_content(path: Option<&Path>) -> Result<CvContent, GenerateError> {
    let Some(path) = path else {
        return Ok(CvContent::builtin());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| GenerateError::ContentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = serde_json::from_str(&raw).map_err(|source| GenerateError::ContentParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded CV content from {}", path.display());
    Ok(content)
}

/// Renders `content` and writes the PDF to `output`, replacing any existing file.
///
/// The file is written in one call after the whole document has been rendered, so a
/// layout failure never touches the output path.
pub fn generate(content: &CvContent, output: &Path) -> Result<GenerationReport, GenerateError> {
    if !content.has_fixed_section_order() {
        return Err(GenerateError::SectionOrder {
            expected: SectionKind::ORDER.to_vec(),
            found: content.section_kinds(),
        });
    }

    let styles = StyleSheet::cv()?;
    let doc = compose(content, &styles)?;
    let laid_out = layout_document(&doc, &styles)?;
    let bytes = render_pdf(&laid_out);

    std::fs::write(output, &bytes).map_err(|source| GenerateError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let report = GenerationReport {
        path: output.to_path_buf(),
        pages: laid_out.pages.len(),
        bytes: bytes.len(),
    };
    info!(
        pages = report.pages,
        bytes = report.bytes,
        "Wrote {}",
        report.path.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::SectionBody;
    use crate::document::RichText;

    #[test]
    fn test_generate_writes_pdf_at_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Joseph_Santur_CV.pdf");

        let report = generate(&CvContent::builtin(), &path).unwrap();

        assert!(path.exists());
        assert_eq!(report.path, path);
        assert_eq!(report.pages, 2);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), report.bytes);
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    #[test]
    fn test_second_run_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"stale").unwrap();

        generate(&CvContent::builtin(), &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        generate(&CvContent::builtin(), &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert!(first.starts_with(b"%PDF-"), "stale content was not replaced");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_path_fails_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("cv.pdf");

        let err = generate(&CvContent::builtin(), &path).unwrap_err();

        assert!(matches!(err, GenerateError::Io { .. }), "got {err:?}");
        assert!(err.to_string().contains("cv.pdf"));
        assert!(!path.exists());
    }

    #[test]
    fn test_layout_failure_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"previous").unwrap();

        let mut content = CvContent::builtin();
        content.sections[5].body = SectionBody::Paragraphs(vec![RichText::plain("Listo ✅")]);

        let err = generate(&content, &path).unwrap_err();
        assert!(matches!(err, GenerateError::Layout(_)), "got {err:?}");
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn test_out_of_order_sections_are_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");

        let mut reversed = CvContent::builtin();
        reversed.sections.reverse();
        let err = generate(&reversed, &path).unwrap_err();
        assert!(matches!(err, GenerateError::SectionOrder { .. }), "got {err:?}");

        let mut truncated = CvContent::builtin();
        truncated.sections.truncate(2);
        match generate(&truncated, &path).unwrap_err() {
            GenerateError::SectionOrder { expected, found } => {
                assert_eq!(expected.len(), 6);
                assert_eq!(found, vec![SectionKind::Summary, SectionKind::Experience]);
            }
            other => panic!("expected SectionOrder, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_run_rejects_reordered_json_content() {
        let dir = tempfile::tempdir().unwrap();
        let content_path = dir.path().join("cv.json");
        let output = dir.path().join("out.pdf");
        let mut content = CvContent::builtin();
        content.sections.swap(3, 4);
        std::fs::write(&content_path, serde_json::to_string(&content).unwrap()).unwrap();

        let config = Config {
            output_path: output.clone(),
            content_path: Some(content_path),
            rust_log: "info".to_string(),
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, GenerateError::SectionOrder { .. }), "got {err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn test_load_content_defaults_to_builtin() {
        assert_eq!(load_content(None).unwrap(), CvContent::builtin());
    }

    #[test]
    fn test_load_content_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        let mut content = CvContent::builtin();
        content.name = "Ana Pérez".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

        let loaded = load_content(Some(&path)).unwrap();
        assert_eq!(loaded.name, "Ana Pérez");
        assert_eq!(loaded.sections.len(), 6);
    }

    #[test]
    fn test_load_content_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_content(Some(&path)).unwrap_err();
        assert!(matches!(err, GenerateError::ContentParse { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_content_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, GenerateError::ContentRead { .. }), "got {err:?}");
    }

    #[test]
    fn test_run_uses_config_paths() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        let config = Config {
            output_path: output.clone(),
            content_path: None,
            rust_log: "info".to_string(),
        };
        let report = run(&config).unwrap();
        assert_eq!(report.path, output);
        assert!(output.exists());
    }
}
