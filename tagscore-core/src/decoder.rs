//! Two-character tag decoding
//!
//! A tag text is a whitespace-separated list of tokens. Every token has
//! exactly two characters: a punctuation label followed by a capitalization
//! label, e.g. `".O OU ,O"`.

use crate::alphabet::{Alphabet, Axis, Capitalization, Punctuation};
use crate::error::{Result, ScoreError, TagDefect};

/// Index-aligned punctuation and capitalization codes of one tag text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedLabels {
    /// Punctuation code per token
    pub punctuation: Vec<usize>,
    /// Capitalization code per token
    pub capitalization: Vec<usize>,
}

impl DecodedLabels {
    /// Number of decoded tokens
    pub fn len(&self) -> usize {
        self.punctuation.len()
    }

    /// Whether no token was decoded
    pub fn is_empty(&self) -> bool {
        self.punctuation.is_empty()
    }
}

/// Decoder between tag texts and integer label sequences
pub struct LabelDecoder;

impl LabelDecoder {
    /// Decode a tag text into punctuation and capitalization codes
    ///
    /// Decoding stops at the first malformed token; no partial result is
    /// returned.
    pub fn decode(text: &str) -> Result<DecodedLabels> {
        let mut labels = DecodedLabels::default();

        for (index, token) in text.split_whitespace().enumerate() {
            let (punct, capit) = Self::decode_tag(index, token)?;
            labels.punctuation.push(punct.code());
            labels.capitalization.push(capit.code());
        }

        log::debug!("Decoded {} tags", labels.len());
        Ok(labels)
    }

    /// Decode a single token at position `index`
    fn decode_tag(index: usize, token: &str) -> Result<(Punctuation, Capitalization)> {
        let malformed = |defect| ScoreError::MalformedTag {
            index,
            token: token.to_string(),
            defect,
        };

        let mut chars = token.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Err(malformed(TagDefect::WrongLength(token.chars().count()))),
        };

        let punct = Punctuation::from_char(first)
            .ok_or_else(|| malformed(TagDefect::UnknownPunctuation(first)))?;
        let capit = Capitalization::from_char(second)
            .ok_or_else(|| malformed(TagDefect::UnknownCapitalization(second)))?;

        Ok((punct, capit))
    }

    /// Encode label codes back into a single-space separated tag text
    pub fn encode(labels: &DecodedLabels) -> Result<String> {
        if labels.punctuation.len() != labels.capitalization.len() {
            return Err(ScoreError::Misaligned {
                punctuation: labels.punctuation.len(),
                capitalization: labels.capitalization.len(),
            });
        }

        let mut tags = Vec::with_capacity(labels.len());
        for (&punct, &capit) in labels.punctuation.iter().zip(&labels.capitalization) {
            let punct = Punctuation::from_code(punct).ok_or(ScoreError::UnknownCode {
                axis: Axis::Punctuation,
                code: punct,
            })?;
            let capit = Capitalization::from_code(capit).ok_or(ScoreError::UnknownCode {
                axis: Axis::Capitalization,
                code: capit,
            })?;
            tags.push(format!("{}{}", punct.as_char(), capit.as_char()));
        }

        Ok(tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let labels = LabelDecoder::decode(".O OU ,O").unwrap();
        assert_eq!(labels.punctuation, vec![2, 0, 1]);
        assert_eq!(labels.capitalization, vec![0, 1, 0]);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_decode_collapses_whitespace() {
        let labels = LabelDecoder::decode("  OU\t\t?O\n\n.U \r\n").unwrap();
        assert_eq!(labels.punctuation, vec![0, 3, 2]);
        assert_eq!(labels.capitalization, vec![1, 0, 1]);
    }

    #[test]
    fn test_decode_empty_text() {
        let labels = LabelDecoder::decode(" \n\t ").unwrap();
        assert!(labels.is_empty());
        assert!(labels.capitalization.is_empty());
    }

    #[test]
    fn test_decode_unknown_punctuation() {
        let err = LabelDecoder::decode("OO X,").unwrap_err();
        assert_eq!(
            err,
            ScoreError::MalformedTag {
                index: 1,
                token: "X,".to_string(),
                defect: TagDefect::UnknownPunctuation('X'),
            }
        );
    }

    #[test]
    fn test_decode_unknown_capitalization() {
        let err = LabelDecoder::decode(".u").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::MalformedTag {
                index: 0,
                defect: TagDefect::UnknownCapitalization('u'),
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_reversed_tag() {
        // The first character is always punctuation, so "O." reads '.' as capitalization
        let err = LabelDecoder::decode("O. OU ,O").unwrap_err();
        assert_eq!(
            err,
            ScoreError::MalformedTag {
                index: 0,
                token: "O.".to_string(),
                defect: TagDefect::UnknownCapitalization('.'),
            }
        );
    }

    #[test]
    fn test_decode_wrong_length() {
        let err = LabelDecoder::decode("OU O OU").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::MalformedTag {
                index: 1,
                defect: TagDefect::WrongLength(1),
                ..
            }
        ));

        // A stray separator glues two tags together
        let err = LabelDecoder::decode("OU;.O").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::MalformedTag {
                index: 0,
                defect: TagDefect::WrongLength(5),
                ..
            }
        ));
    }

    #[test]
    fn test_decode_counts_chars_not_bytes() {
        let err = LabelDecoder::decode("Oé").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::MalformedTag {
                defect: TagDefect::UnknownCapitalization('é'),
                ..
            }
        ));
    }

    #[test]
    fn test_encode_roundtrip() {
        let text = ".O OU ,O ?U";
        let labels = LabelDecoder::decode(text).unwrap();
        assert_eq!(LabelDecoder::encode(&labels).unwrap(), text);
    }

    #[test]
    fn test_encode_rejects_misaligned_codes() {
        let labels = DecodedLabels {
            punctuation: vec![0, 1],
            capitalization: vec![0],
        };
        assert_eq!(
            LabelDecoder::encode(&labels).unwrap_err(),
            ScoreError::Misaligned {
                punctuation: 2,
                capitalization: 1,
            }
        );
    }

    #[test]
    fn test_encode_rejects_unknown_code() {
        let labels = DecodedLabels {
            punctuation: vec![0, 4],
            capitalization: vec![0, 0],
        };
        assert_eq!(
            LabelDecoder::encode(&labels).unwrap_err(),
            ScoreError::UnknownCode {
                axis: Axis::Punctuation,
                code: 4,
            }
        );
    }
}
