use serde::Serialize;

/// Measurements taken from a transcription and its recording.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSpeechMetrics {
    /// Words per minute over the whole recording.
    pub speech_rate: f64,
    pub pause_count: usize,
    /// Total pause time in seconds.
    pub pause_duration: f64,
    pub filler_word_count: usize,
    pub filler_words: Vec<String>,
    pub average_confidence: f64,
    /// Type-token ratio, 0 when nothing was said.
    pub vocabulary_richness: f64,
    pub total_words: usize,
    pub unique_words: usize,
    pub average_word_length: f64,
    pub volume_consistency: f64,
}

/// Result of assessing speech without a reference text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSpeechAssessment {
    pub fluency_score: u32,
    pub clarity_score: u32,
    pub grammar_score: u32,
    pub pronunciation_score: u32,
    pub overall_score: u32,
    pub metrics: FreeSpeechMetrics,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
}
