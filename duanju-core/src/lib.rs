//! Punctuation-based line segmentation for Chinese text of unknown encoding
//!
//! The crate reads a file whose encoding is not known in advance, decodes it
//! by trying a fixed candidate list (utf-8, gbk, gb18030, utf-16), inserts a
//! line break after each sentence-ending punctuation mark, and writes the
//! result back out as UTF-8.
//!
//! # Example
//!
//! ```rust
//! use duanju_core::Segmenter;
//!
//! let segmenter = Segmenter::new();
//! assert_eq!(segmenter.segment("你好。再见！"), "你好。\n再见！\n");
//! ```
//!
//! File-to-file use goes through [`TextNormalizer`], which reports the
//! detected encoding and the number of breaks inserted.

pub mod encoding;
pub mod error;
pub mod normalizer;
pub mod rules;
pub mod segmenter;

pub use encoding::{candidates, EncodingCandidate};
pub use error::{Error, Result};
pub use normalizer::{DecodedText, NormalizeReport, TextNormalizer};
pub use rules::{PunctuationRule, DEFAULT_RULES};
pub use segmenter::Segmenter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.segmenter().rules().len(), DEFAULT_RULES.len());
        assert_eq!(candidates().len(), 4);
    }

    #[test]
    fn test_segment_then_resegment_is_stable() {
        let segmenter = Segmenter::new();
        let once = segmenter.segment("今天下雨。出不了门！怎么办？在家待着；好。");
        assert_eq!(segmenter.segment(&once), once);
    }
}
