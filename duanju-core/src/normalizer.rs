//! File-to-file normalization flow

use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding;
use crate::error::{Error, Result};
use crate::rules::BREAK;
use crate::segmenter::Segmenter;

/// Decoded file content together with the encoding that produced it
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The decoded content
    pub text: String,
    /// Name of the candidate encoding that succeeded
    pub encoding: &'static str,
}

/// Summary of one normalization run
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    /// Encoding the input was read with
    pub encoding: &'static str,
    /// Number of line breaks inserted
    pub breaks_inserted: usize,
}

/// Reads a file of unknown encoding, segments it, and writes UTF-8 output
pub struct TextNormalizer {
    segmenter: Segmenter,
}

impl TextNormalizer {
    /// Create a normalizer with the default rule table
    pub fn new() -> Self {
        Self::with_segmenter(Segmenter::new())
    }

    /// Create a normalizer around an explicit segmenter
    pub fn with_segmenter(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }

    /// The segmenter used for the transform step
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Read a file's bytes and decode them with the first accepting candidate
    ///
    /// The bytes are read once; only decode failures advance the candidate
    /// list, so an unreadable path surfaces as [`Error::Io`] rather than as
    /// exhaustion.
    pub fn detect_and_read(&self, path: &Path) -> Result<DecodedText> {
        let bytes = fs::read(path).map_err(|source| Error::io(path, source))?;
        match encoding::decode_with_candidates(&bytes) {
            Some((text, encoding)) => Ok(DecodedText { text, encoding }),
            None => Err(Error::DecodingExhausted {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Serialize `text` as UTF-8, overwriting any existing file at `path`
    pub fn write_output(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|source| Error::io(path, source))
    }

    /// One-shot flow: detect and read, segment, write
    pub fn normalize_file(&self, input: &Path, output: &Path) -> Result<NormalizeReport> {
        let decoded = self.detect_and_read(input)?;
        let formatted = self.segmenter.segment(&decoded.text);
        self.write_output(output, &formatted)?;

        let breaks_inserted =
            formatted.matches(BREAK).count() - decoded.text.matches(BREAK).count();
        Ok(NormalizeReport {
            encoding: decoded.encoding,
            breaks_inserted,
        })
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_and_read_ascii_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ascii.txt");
        fs::write(&path, "plain ascii text").unwrap();

        let decoded = TextNormalizer::new().detect_and_read(&path).unwrap();
        assert_eq!(decoded.text, "plain ascii text");
        assert_eq!(decoded.encoding, "utf-8");
    }

    #[test]
    fn test_detect_and_read_gbk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gbk.txt");
        // "你好。" in GBK
        fs::write(&path, [0xC4, 0xE3, 0xBA, 0xC3, 0xA1, 0xA3]).unwrap();

        let decoded = TextNormalizer::new().detect_and_read(&path).unwrap();
        assert_eq!(decoded.text, "你好。");
        assert_eq!(decoded.encoding, "gbk");
    }

    #[test]
    fn test_detect_and_read_missing_file_is_io_error() {
        let result = TextNormalizer::new().detect_and_read(Path::new("/nonexistent/input.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_detect_and_read_undecodable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.bin");
        fs::write(&path, [0xFF]).unwrap();

        let result = TextNormalizer::new().detect_and_read(&path);
        assert!(matches!(result, Err(Error::DecodingExhausted { .. })));
    }

    #[test]
    fn test_write_output_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "old content").unwrap();

        TextNormalizer::new().write_output(&path, "new content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_write_output_missing_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no/such/dir/out.txt");

        let result = TextNormalizer::new().write_output(&path, "text");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_normalize_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "你好。再见！").unwrap();

        let report = TextNormalizer::new().normalize_file(&input, &output).unwrap();
        assert_eq!(report.encoding, "utf-8");
        assert_eq!(report.breaks_inserted, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "你好。\n再见！\n");
    }

    #[test]
    fn test_normalize_file_gbk_input_written_as_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        // "好！吗？" in GBK
        fs::write(&input, [0xBA, 0xC3, 0xA3, 0xA1, 0xC2, 0xF0, 0xA3, 0xBF]).unwrap();

        let report = TextNormalizer::new().normalize_file(&input, &output).unwrap();
        assert_eq!(report.encoding, "gbk");
        assert_eq!(report.breaks_inserted, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "好！\n吗？\n");
    }

    #[test]
    fn test_normalize_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("empty.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "").unwrap();

        let report = TextNormalizer::new().normalize_file(&input, &output).unwrap();
        assert_eq!(report.encoding, "utf-8");
        assert_eq!(report.breaks_inserted, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_normalize_undecodable_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("garbage.bin");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, [0xFF]).unwrap();

        let result = TextNormalizer::new().normalize_file(&input, &output);
        assert!(matches!(result, Err(Error::DecodingExhausted { .. })));
        assert!(!output.exists());
    }
}
