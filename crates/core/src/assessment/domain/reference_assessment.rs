use serde::Serialize;

use crate::phonetics::domain::difficulty::WordDifficulty;
use crate::phonetics::domain::phoneme_analyzer::PhonemeScore;

/// Full analysis of one aligned word. Only its `WordScore` projection
/// survives into the assessment result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    /// What was heard; empty when the word was never said.
    pub word: String,
    pub original_word: String,
    /// Always `similarity > WORD_MATCH_THRESHOLD`.
    pub matched: bool,
    pub similarity: f64,
    pub phoneme_errors: Vec<String>,
    pub difficulty: WordDifficulty,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScore {
    pub word: String,
    pub original_word: String,
    /// Similarity as a 0-100 percentage.
    pub score: u32,
    pub phonemes: Vec<PhonemeScore>,
    pub feedback: Vec<String>,
}

/// Result of comparing a transcription against the text that was read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationAssessment {
    pub overall_score: u32,
    pub accuracy_score: u32,
    pub fluency_score: u32,
    pub word_level_scores: Vec<WordScore>,
    pub suggestions: Vec<String>,
}
