use super::sentence_analyzer::SentenceAnalyzer;
use crate::shared::constants::NO_SENTENCE_GRAMMAR_SCORE;

const INCOMPLETE_SENTENCE_PENALTY: f64 = 30.0;
const FORM_WEIGHT: f64 = 10.0;

/// Scores grammar 0-100 from sentence completeness, capitalization and
/// terminal punctuation.
///
/// Sentences missing a verb or a noun remove up to 30 points. The
/// capitalization and punctuation ratios are then each blended in as
/// `score * 0.9 + ratio * 10`.
pub fn grammar_score(analyzer: &dyn SentenceAnalyzer, text: &str) -> u32 {
    let sentences = analyzer.sentences(text);
    if sentences.is_empty() {
        return NO_SENTENCE_GRAMMAR_SCORE;
    }
    let total = sentences.len() as f64;

    let incomplete = sentences
        .iter()
        .filter(|s| !analyzer.has_verb(s) || !analyzer.has_noun(s))
        .count() as f64;
    let mut score = 100.0 - incomplete / total * INCOMPLETE_SENTENCE_PENALTY;

    let capitalized = sentences
        .iter()
        .filter(|s| s.trim().starts_with(|c: char| c.is_ascii_uppercase()))
        .count() as f64;
    score = score * 0.9 + capitalized / total * FORM_WEIGHT;

    let punctuated = sentences
        .iter()
        .filter(|s| s.trim().ends_with(['.', '!', '?']))
        .count() as f64;
    score = score * 0.9 + punctuated / total * FORM_WEIGHT;

    score.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on `|` and treats sentences containing "verb"/"noun" literally.
    struct StubAnalyzer;

    impl SentenceAnalyzer for StubAnalyzer {
        fn sentences(&self, text: &str) -> Vec<String> {
            text.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }

        fn has_verb(&self, sentence: &str) -> bool {
            sentence.contains("verb")
        }

        fn has_noun(&self, sentence: &str) -> bool {
            sentence.contains("noun")
        }
    }

    #[test]
    fn test_no_sentences_scores_fifty() {
        assert_eq!(grammar_score(&StubAnalyzer, ""), 50);
        assert_eq!(grammar_score(&StubAnalyzer, " | "), 50);
    }

    #[test]
    fn test_complete_well_formed_sentence_scores_full() {
        assert_eq!(grammar_score(&StubAnalyzer, "A noun and a verb."), 100);
    }

    #[test]
    fn test_missing_capital_and_punctuation() {
        // 100 -> 90 -> 81
        assert_eq!(grammar_score(&StubAnalyzer, "a noun and a verb"), 81);
    }

    #[test]
    fn test_incomplete_sentence_penalized() {
        // 70 -> 73 -> 75.7
        assert_eq!(grammar_score(&StubAnalyzer, "Only a noun."), 76);
    }

    #[test]
    fn test_penalty_is_proportional() {
        // one of two incomplete: 85 -> 86.5 -> 87.85
        assert_eq!(
            grammar_score(&StubAnalyzer, "A noun with a verb. | Just a noun."),
            88
        );
    }
}
