use serde::Serialize;

/// Spellings that make a word hard regardless of its length.
const COMPLEX_PATTERNS: &[&str] = &["th", "sh", "ch", "ng", "ough", "augh", "eigh"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordDifficulty {
    Easy,
    Medium,
    Hard,
    Complex,
}

impl WordDifficulty {
    /// `Complex` when the word contains a complex spelling; otherwise
    /// all-letter words of 8+ letters are `Hard` and of 1-4 letters `Easy`.
    /// Everything else, including words with digits, is `Medium`.
    pub fn classify(word: &str) -> Self {
        let lower = word.to_ascii_lowercase();
        if COMPLEX_PATTERNS.iter().any(|p| lower.contains(p)) {
            return Self::Complex;
        }

        let letters_only = !lower.is_empty() && lower.chars().all(|c| c.is_ascii_alphabetic());
        let len = lower.chars().count();
        if letters_only && len >= 8 {
            Self::Hard
        } else if letters_only && len <= 4 {
            Self::Easy
        } else {
            Self::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::short("cat", WordDifficulty::Easy)]
    #[case::four_letters("word", WordDifficulty::Easy)]
    #[case::five_letters("apple", WordDifficulty::Medium)]
    #[case::seven_letters("example", WordDifficulty::Medium)]
    #[case::eight_letters("absolute", WordDifficulty::Hard)]
    #[case::short_complex("the", WordDifficulty::Complex)]
    #[case::long_complex("everything", WordDifficulty::Complex)]
    #[case::ough("rough", WordDifficulty::Complex)]
    #[case::digits("r2d2", WordDifficulty::Medium)]
    #[case::uppercase("HELLO", WordDifficulty::Medium)]
    fn test_classify(#[case] word: &str, #[case] expected: WordDifficulty) {
        assert_eq!(WordDifficulty::classify(word), expected);
    }
}
