use super::reference_assessment::{PronunciationAssessment, WordAnalysis, WordScore};
use crate::phonetics::domain::difficulty::WordDifficulty;
use crate::phonetics::domain::phoneme_analyzer::PhonemeAnalyzer;
use crate::shared::constants::{
    ACCURACY_WEIGHT, EXPECTED_READING_WPM, FLUENCY_WEIGHT, MAX_SUGGESTIONS,
    WORD_MATCH_THRESHOLD, WORD_MISMATCH_THRESHOLD,
};
use crate::shared::error::{validate_duration, AssessmentError};
use crate::text::domain::normalizer::normalize;
use crate::text::domain::similarity::similarity;
use crate::text::domain::word_aligner::{AlignmentPair, WordAligner};

struct Scores {
    accuracy: u32,
    fluency: u32,
    overall: u32,
}

/// Scores a reading of a known text.
pub struct ReferenceScorer;

impl ReferenceScorer {
    /// Normalizes and aligns both texts, then scores accuracy from word
    /// similarity and fluency from reading speed and completion.
    ///
    /// A zero `duration` means "unknown" and assumes the expected reading
    /// pace. Empty texts produce zero scores rather than an error.
    pub fn assess(
        original_text: &str,
        transcribed_text: &str,
        duration: f64,
    ) -> Result<PronunciationAssessment, AssessmentError> {
        validate_duration(duration)?;

        let original_words = normalize(original_text);
        let transcribed_words = normalize(transcribed_text);
        if transcribed_words.is_empty() && !original_words.is_empty() {
            log::warn!("Empty transcription for {} reference words", original_words.len());
        }

        let alignment = WordAligner::align(&original_words, &transcribed_words);
        let analyses = Self::analyze_words(&alignment);
        let scores = calculate_scores(&analyses, duration, original_words.len());

        log::debug!(
            "Reference assessment over {} words: accuracy {}, fluency {}, overall {}",
            analyses.len(),
            scores.accuracy,
            scores.fluency,
            scores.overall
        );

        let word_level_scores = analyses
            .iter()
            .map(|analysis| WordScore {
                word: analysis.word.clone(),
                original_word: analysis.original_word.clone(),
                score: (analysis.similarity * 100.0).round() as u32,
                phonemes: PhonemeAnalyzer::phoneme_breakdown(&analysis.original_word, &analysis.word),
                feedback: word_feedback(analysis),
            })
            .collect();

        Ok(PronunciationAssessment {
            overall_score: scores.overall,
            accuracy_score: scores.accuracy,
            fluency_score: scores.fluency,
            word_level_scores,
            suggestions: suggestions(&analyses, &scores),
        })
    }

    pub fn analyze_words(alignment: &[AlignmentPair]) -> Vec<WordAnalysis> {
        alignment.iter().map(analyze_word).collect()
    }
}

fn analyze_word(pair: &AlignmentPair) -> WordAnalysis {
    let similarity = similarity(&pair.original, &pair.transcribed);
    WordAnalysis {
        word: pair.transcribed.clone(),
        original_word: pair.original.clone(),
        matched: similarity > WORD_MATCH_THRESHOLD,
        similarity,
        phoneme_errors: PhonemeAnalyzer::find_phoneme_errors(&pair.original, &pair.transcribed),
        difficulty: WordDifficulty::classify(&pair.original),
    }
}

fn calculate_scores(analyses: &[WordAnalysis], duration: f64, original_word_count: usize) -> Scores {
    if analyses.is_empty() {
        return Scores {
            accuracy: 0,
            fluency: 0,
            overall: 0,
        };
    }
    let total = analyses.len() as f64;

    let mean_similarity = analyses.iter().map(|a| a.similarity).sum::<f64>() / total;
    let accuracy = (mean_similarity * 100.0).round();

    let words_per_minute = if duration > 0.0 {
        original_word_count as f64 / duration * 60.0
    } else {
        EXPECTED_READING_WPM
    };
    let speed_score = (words_per_minute / EXPECTED_READING_WPM * 100.0).min(100.0);
    let completion_rate = analyses.iter().filter(|a| !a.word.is_empty()).count() as f64 / total;
    let fluency = (speed_score * completion_rate).round();

    let overall = (accuracy * ACCURACY_WEIGHT + fluency * FLUENCY_WEIGHT).round();

    Scores {
        accuracy: clamp_score(accuracy),
        fluency: clamp_score(fluency),
        overall: clamp_score(overall),
    }
}

fn clamp_score(score: f64) -> u32 {
    score.clamp(0.0, 100.0) as u32
}

fn word_feedback(analysis: &WordAnalysis) -> Vec<String> {
    let mut feedback = Vec::new();

    if !analysis.matched {
        if analysis.word.is_empty() {
            feedback.push("Word was not recognized - try speaking more clearly".to_string());
        } else if analysis.similarity < WORD_MISMATCH_THRESHOLD {
            feedback.push(format!(
                "Pronunciation differs significantly from \"{}\"",
                analysis.original_word
            ));
        } else {
            feedback.push(format!(
                "Close pronunciation - review the \"{}\" sound",
                analysis.original_word
            ));
        }
    }

    match analysis.difficulty {
        WordDifficulty::Complex => {
            feedback.push("This is a challenging word - practice slowly first".to_string())
        }
        WordDifficulty::Hard => feedback.push("Focus on each syllable clearly".to_string()),
        WordDifficulty::Easy | WordDifficulty::Medium => {}
    }

    feedback.extend(
        analysis
            .phoneme_errors
            .iter()
            .map(|error| format!("Check {error} sound")),
    );

    feedback
}

fn suggestions(analyses: &[WordAnalysis], scores: &Scores) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    if scores.accuracy < 70 {
        suggestions.push("Focus on articulation - speak each word clearly and slowly".into());
        suggestions.push("Practice difficult words separately before reading full text".into());
    } else if scores.accuracy < 85 {
        suggestions
            .push("Good pronunciation! Focus on the challenging words highlighted above".into());
    }

    if scores.fluency < 60 {
        suggestions.push("Take your time - focus on clarity over speed".into());
        suggestions.push("Practice reading the text silently first to familiarize yourself".into());
    } else if scores.fluency < 80 {
        suggestions.push("Good pace! Try to maintain consistent rhythm throughout".into());
    }

    // Counted in first-seen order so suggestions stay stable.
    let mut error_counts: Vec<(&str, usize)> = Vec::new();
    for error in analyses.iter().flat_map(|a| &a.phoneme_errors) {
        match error_counts.iter_mut().find(|(seen, _)| *seen == error.as_str()) {
            Some((_, count)) => *count += 1,
            None => error_counts.push((error.as_str(), 1)),
        }
    }
    suggestions.extend(
        error_counts
            .iter()
            .filter(|(_, count)| *count > 1)
            .map(|(error, _)| format!("Focus on {error} - this appeared multiple times")),
    );

    if analyses
        .iter()
        .any(|a| a.difficulty == WordDifficulty::Complex && !a.matched)
    {
        suggestions.push("Practice complex words with online pronunciation guides".into());
    }

    if scores.overall >= 85 {
        suggestions.push("Excellent pronunciation! Keep practicing to maintain this level".into());
    } else if scores.overall >= 70 {
        suggestions.push(
            "Good job! A few more practice sessions will significantly improve your score".into(),
        );
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
