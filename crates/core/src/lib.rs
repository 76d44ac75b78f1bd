//! Pronunciation and speech assessment.
//!
//! Scores a transcription either against the text the speaker was reading
//! (accuracy, fluency and per-word feedback) or, without a reference, as
//! free speech from pace, filler words, grammar, confidence and the audio
//! envelope. All scoring is deterministic and free of I/O; decoding audio
//! and producing transcriptions happen behind the `AudioReader` and
//! `Transcriber` ports.

pub mod assessment;
pub mod audio;
pub mod grammar;
pub mod phonetics;
pub mod pipeline;
pub mod shared;
pub mod text;
pub mod transcription;

pub use assessment::domain::free_speech_assessment::{FreeSpeechAssessment, FreeSpeechMetrics};
pub use assessment::domain::free_speech_scorer::FreeSpeechScorer;
pub use assessment::domain::reference_assessment::{PronunciationAssessment, WordScore};
pub use assessment::domain::reference_scorer::ReferenceScorer;
pub use audio::domain::audio_features::{AudioFeatures, AudioFeaturesAnalyzer, Pause};
pub use audio::domain::audio_segment::AudioSegment;
pub use shared::error::AssessmentError;
pub use text::domain::word_aligner::AlignmentPair;
pub use transcription::domain::transcription::{Transcription, TranscriptionChunk};

use text::domain::word_aligner::WordAligner;

/// Lowercased words with punctuation removed.
pub fn normalize(text: &str) -> Vec<String> {
    crate::text::domain::normalizer::normalize(text)
}

/// Normalized edit-distance similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    crate::text::domain::similarity::similarity(a, b)
}

/// Pairs each reference word with what was heard in its place.
pub fn align<S: AsRef<str>>(reference: &[S], hypothesis: &[S]) -> Vec<AlignmentPair> {
    WordAligner::align(reference, hypothesis)
}

/// Scores a reading of `original_text`. A zero duration means unknown.
pub fn assess_reference_based(
    original_text: &str,
    transcribed_text: &str,
    duration_seconds: f64,
) -> Result<PronunciationAssessment, AssessmentError> {
    ReferenceScorer::assess(original_text, transcribed_text, duration_seconds)
}

/// Pause and volume analysis of mono samples.
pub fn analyze_audio(samples: &[f32], sample_rate: u32) -> Result<AudioFeatures, AssessmentError> {
    AudioFeaturesAnalyzer::analyze(&AudioSegment::mono(samples.to_vec(), sample_rate))
}

/// Scores speech without a reference text, using the built-in sentence
/// analyzer for grammar.
pub fn assess_free_speech(
    transcribed_text: &str,
    chunks: Option<&[TranscriptionChunk]>,
    samples: &[f32],
    sample_rate: u32,
    duration_seconds: f64,
) -> Result<FreeSpeechAssessment, AssessmentError> {
    let audio = AudioSegment::mono(samples.to_vec(), sample_rate);
    FreeSpeechScorer::default().assess(transcribed_text, chunks, &audio, duration_seconds)
}
