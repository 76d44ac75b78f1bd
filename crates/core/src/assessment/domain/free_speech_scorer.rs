use std::collections::HashSet;

use super::filler_detector::FillerDetector;
use super::free_speech_assessment::{FreeSpeechAssessment, FreeSpeechMetrics};
use crate::audio::domain::audio_features::{AudioFeatures, AudioFeaturesAnalyzer};
use crate::audio::domain::audio_segment::AudioSegment;
use crate::grammar::domain::grammar_scorer::grammar_score;
use crate::grammar::domain::sentence_analyzer::SentenceAnalyzer;
use crate::grammar::infrastructure::lexicon_sentence_analyzer::LexiconSentenceAnalyzer;
use crate::shared::constants::{
    DEFAULT_CONFIDENCE, FREE_SPEECH_CLARITY_WEIGHT, FREE_SPEECH_FLUENCY_WEIGHT,
    FREE_SPEECH_GRAMMAR_WEIGHT, FREE_SPEECH_PRONUNCIATION_WEIGHT, MAX_NATURAL_WPM,
    MIN_NATURAL_WPM, OPTIMAL_WPM,
};
use crate::shared::error::{validate_duration, AssessmentError};
use crate::transcription::domain::transcription::TranscriptionChunk;

const MAX_SPEED_PENALTY: f64 = 30.0;
const MAX_PAUSE_PENALTY: f64 = 20.0;
const MAX_FILLER_PENALTY: f64 = 25.0;
/// Pauses per minute of speech tolerated before fluency drops.
const TOLERATED_PAUSES_PER_MINUTE: f64 = 3.0;
const MAX_WORD_LENGTH_BONUS: f64 = 10.0;

struct ComponentScores {
    fluency: u32,
    clarity: u32,
    grammar: u32,
    pronunciation: u32,
}

/// Scores spontaneous speech from its transcription and recording alone.
pub struct FreeSpeechScorer {
    analyzer: Box<dyn SentenceAnalyzer>,
}

impl FreeSpeechScorer {
    pub fn new(analyzer: Box<dyn SentenceAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Analyzes the recording, then scores the transcription.
    ///
    /// `chunks` supply recognizer confidence; without any, a default
    /// confidence is assumed.
    pub fn assess(
        &self,
        transcribed_text: &str,
        chunks: Option<&[TranscriptionChunk]>,
        audio: &AudioSegment,
        duration: f64,
    ) -> Result<FreeSpeechAssessment, AssessmentError> {
        let features = AudioFeaturesAnalyzer::analyze(audio)?;
        self.assess_with_features(transcribed_text, chunks, &features, duration)
    }

    /// Same as [`assess`](Self::assess) for audio already analyzed.
    pub fn assess_with_features(
        &self,
        transcribed_text: &str,
        chunks: Option<&[TranscriptionChunk]>,
        features: &AudioFeatures,
        duration: f64,
    ) -> Result<FreeSpeechAssessment, AssessmentError> {
        validate_duration(duration)?;
        let average_confidence = average_confidence(chunks)?;
        if transcribed_text.trim().is_empty() {
            log::warn!("Empty transcription, scoring from defaults only");
        }

        let metrics = calculate_metrics(transcribed_text, average_confidence, features, duration);
        let scores = ComponentScores {
            fluency: fluency_score(&metrics, features),
            clarity: clarity_score(&metrics),
            grammar: grammar_score(self.analyzer.as_ref(), transcribed_text),
            pronunciation: pronunciation_score(&metrics),
        };
        let overall = (scores.fluency as f64 * FREE_SPEECH_FLUENCY_WEIGHT
            + scores.clarity as f64 * FREE_SPEECH_CLARITY_WEIGHT
            + scores.grammar as f64 * FREE_SPEECH_GRAMMAR_WEIGHT
            + scores.pronunciation as f64 * FREE_SPEECH_PRONUNCIATION_WEIGHT)
            .round() as u32;

        log::debug!(
            "Free speech assessment over {} words: fluency {}, clarity {}, grammar {}, pronunciation {}, overall {overall}",
            metrics.total_words,
            scores.fluency,
            scores.clarity,
            scores.grammar,
            scores.pronunciation
        );

        Ok(FreeSpeechAssessment {
            fluency_score: scores.fluency,
            clarity_score: scores.clarity,
            grammar_score: scores.grammar,
            pronunciation_score: scores.pronunciation,
            overall_score: overall,
            feedback: feedback(&metrics),
            suggestions: suggestions(&metrics, &scores),
            strengths: strengths(&metrics, &scores),
            areas_to_improve: areas_to_improve(&metrics, &scores),
            metrics,
        })
    }
}

impl Default for FreeSpeechScorer {
    fn default() -> Self {
        Self::new(Box::new(LexiconSentenceAnalyzer::new()))
    }
}

/// Mean of the reported confidences. Chunks without one are skipped.
fn average_confidence(chunks: Option<&[TranscriptionChunk]>) -> Result<f64, AssessmentError> {
    let values: Vec<f64> = chunks
        .unwrap_or_default()
        .iter()
        .filter_map(|chunk| chunk.confidence)
        .collect();

    if let Some(bad) = values.iter().find(|c| !c.is_finite() || !(0.0..=1.0).contains(*c)) {
        return Err(AssessmentError::invalid_argument(format!(
            "chunk confidence must be within [0, 1], got {bad}"
        )));
    }

    if values.is_empty() {
        return Ok(DEFAULT_CONFIDENCE);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

fn calculate_metrics(
    text: &str,
    average_confidence: f64,
    features: &AudioFeatures,
    duration: f64,
) -> FreeSpeechMetrics {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let total_words = words.len();
    let unique_words = words.iter().collect::<HashSet<_>>().len();

    let speech_rate = if duration > 0.0 {
        total_words as f64 / duration * 60.0
    } else {
        0.0
    };
    let fillers = FillerDetector::detect(text);
    let vocabulary_richness = if total_words > 0 {
        unique_words as f64 / total_words as f64
    } else {
        0.0
    };
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();
    let average_word_length = letters as f64 / total_words.max(1) as f64;

    FreeSpeechMetrics {
        speech_rate,
        pause_count: features.pauses.len(),
        pause_duration: features.silence_duration,
        filler_word_count: fillers.count,
        filler_words: fillers.words,
        average_confidence,
        vocabulary_richness,
        total_words,
        unique_words,
        average_word_length,
        volume_consistency: AudioFeaturesAnalyzer::volume_consistency(features.volume_variance),
    }
}

/// Starts at 100 and subtracts capped penalties for pace away from the
/// optimum, frequent pauses and filler words.
fn fluency_score(metrics: &FreeSpeechMetrics, features: &AudioFeatures) -> u32 {
    let deviation = (metrics.speech_rate - OPTIMAL_WPM).abs();
    let speed_penalty = (deviation / OPTIMAL_WPM * 50.0).min(MAX_SPEED_PENALTY);

    let pause_penalty = if features.speech_duration > 0.0 {
        let pauses_per_minute = metrics.pause_count as f64 / (features.speech_duration / 60.0);
        ((pauses_per_minute - TOLERATED_PAUSES_PER_MINUTE) * 5.0).clamp(0.0, MAX_PAUSE_PENALTY)
    } else if metrics.pause_count > 0 {
        // all pause, no speech
        MAX_PAUSE_PENALTY
    } else {
        0.0
    };

    let filler_penalty = if metrics.total_words > 0 {
        (metrics.filler_word_count as f64 / metrics.total_words as f64 * 100.0)
            .min(MAX_FILLER_PENALTY)
    } else {
        0.0
    };

    (100.0 - speed_penalty - pause_penalty - filler_penalty)
        .round()
        .max(0.0) as u32
}

fn clarity_score(metrics: &FreeSpeechMetrics) -> u32 {
    let score = metrics.average_confidence * 100.0 * 0.7 + metrics.volume_consistency * 100.0 * 0.3;
    score.round().max(0.0) as u32
}

/// Confidence, plus a small bonus for longer words.
fn pronunciation_score(metrics: &FreeSpeechMetrics) -> u32 {
    let mut score = metrics.average_confidence * 100.0;
    if metrics.average_word_length > 5.0 {
        score += ((metrics.average_word_length - 5.0) * 2.0).min(MAX_WORD_LENGTH_BONUS);
    }
    score.round().clamp(0.0, 100.0) as u32
}

fn feedback(metrics: &FreeSpeechMetrics) -> Vec<String> {
    let mut feedback = Vec::new();
    let rate = metrics.speech_rate.round();

    if metrics.speech_rate < MIN_NATURAL_WPM {
        feedback.push(format!(
            "Your speech rate is {rate} words per minute, which is slower than average. Try to speak a bit faster."
        ));
    } else if metrics.speech_rate > MAX_NATURAL_WPM {
        feedback.push(format!(
            "Your speech rate is {rate} words per minute, which is quite fast. Try to slow down for better clarity."
        ));
    } else {
        feedback.push(format!(
            "Your speech rate of {rate} words per minute is natural and easy to follow."
        ));
    }

    if metrics.filler_word_count > 0 {
        let filler_rate =
            metrics.filler_word_count as f64 / metrics.total_words.max(1) as f64 * 100.0;
        let mut distinct: Vec<&str> = Vec::new();
        for word in &metrics.filler_words {
            if !distinct.contains(&word.as_str()) {
                distinct.push(word);
            }
        }
        feedback.push(format!(
            "You used {} filler word(s) ({filler_rate:.1}% of speech). Common fillers: {}.",
            metrics.filler_word_count,
            distinct.join(", ")
        ));
    } else {
        feedback.push("Great job avoiding filler words!".to_string());
    }

    let confidence = metrics.average_confidence * 100.0;
    if metrics.average_confidence >= 0.85 {
        feedback.push(format!("Excellent clarity with {confidence:.0}% average confidence."));
    } else if metrics.average_confidence >= 0.7 {
        feedback.push(format!("Good clarity with {confidence:.0}% average confidence."));
    } else {
        feedback.push(format!(
            "Clarity could be improved ({confidence:.0}% confidence). Focus on enunciating clearly."
        ));
    }

    if metrics.vocabulary_richness > 0.7 {
        feedback.push("Excellent vocabulary diversity!".to_string());
    } else if metrics.vocabulary_richness < 0.5 {
        feedback
            .push("Try to use more varied vocabulary to make your speech more engaging.".to_string());
    }

    feedback
}

fn suggestions(metrics: &FreeSpeechMetrics, scores: &ComponentScores) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    if scores.fluency < 75 {
        suggestions
            .push("Practice speaking at a steady pace without rushing or hesitating too much.".into());
        if metrics.filler_word_count > 3 {
            suggestions.push(
                "When you feel the urge to say \"um\" or \"uh\", try pausing silently instead."
                    .into(),
            );
        }
    }
    if scores.clarity < 75 {
        suggestions.push("Focus on pronouncing each word clearly and completely.".into());
        suggestions.push("Maintain consistent volume throughout your speech.".into());
    }
    if scores.grammar < 75 {
        suggestions.push("Try to speak in complete sentences with proper structure.".into());
        suggestions.push("Practice organizing your thoughts before speaking.".into());
    }
    if metrics.pause_count > 10 {
        suggestions.push("Work on reducing unnecessary pauses to maintain better flow.".into());
    }
    if metrics.vocabulary_richness < 0.6 {
        suggestions.push("Expand your vocabulary by reading more and learning new words.".into());
    }

    suggestions.push("Record yourself regularly to track improvement over time.".into());
    suggestions.push("Listen to native speakers and try to mimic their pace and rhythm.".into());
    suggestions
}

fn strengths(metrics: &FreeSpeechMetrics, scores: &ComponentScores) -> Vec<String> {
    let checks = [
        (scores.fluency >= 80, "Strong fluency and natural speech flow"),
        (scores.clarity >= 80, "Clear and understandable pronunciation"),
        (scores.grammar >= 80, "Good grammar and sentence structure"),
        (scores.pronunciation >= 80, "Confident word pronunciation"),
        (metrics.filler_word_count == 0, "No filler words used"),
        (metrics.vocabulary_richness > 0.7, "Rich and diverse vocabulary"),
        (
            (MIN_NATURAL_WPM..=MAX_NATURAL_WPM).contains(&metrics.speech_rate),
            "Natural speaking pace",
        ),
    ];
    selected(&checks)
}

fn areas_to_improve(metrics: &FreeSpeechMetrics, scores: &ComponentScores) -> Vec<String> {
    let checks = [
        (scores.fluency < 70, "Speech fluency and flow"),
        (scores.clarity < 70, "Pronunciation clarity"),
        (scores.grammar < 70, "Grammar and sentence structure"),
        (scores.pronunciation < 70, "Word pronunciation accuracy"),
        (metrics.filler_word_count > 5, "Reducing filler words"),
        (metrics.speech_rate < MIN_NATURAL_WPM, "Speaking speed (too slow)"),
        (metrics.speech_rate > MAX_NATURAL_WPM, "Speaking speed (too fast)"),
        (metrics.vocabulary_richness < 0.5, "Vocabulary diversity"),
    ];
    selected(&checks)
}

fn selected(checks: &[(bool, &str)]) -> Vec<String> {
    checks
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, label)| label.to_string())
        .collect()
}
