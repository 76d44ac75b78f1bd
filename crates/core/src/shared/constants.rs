// ── Word alignment and similarity ───────────────────────────────────

/// Minimum similarity for two words to be aligned as the same word.
pub const ALIGNMENT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Similarity above which an aligned word counts as correctly pronounced.
pub const WORD_MATCH_THRESHOLD: f64 = 0.8;

/// Similarity below which feedback calls a word significantly different.
pub const WORD_MISMATCH_THRESHOLD: f64 = 0.3;

// ── Reference-based scoring ─────────────────────────────────────────

/// Average reading speed, also the assumed pace when duration is unknown.
pub const EXPECTED_READING_WPM: f64 = 180.0;

pub const ACCURACY_WEIGHT: f64 = 0.7;
pub const FLUENCY_WEIGHT: f64 = 0.3;

pub const MAX_SUGGESTIONS: usize = 5;

// ── Audio analysis ──────────────────────────────────────────────────

/// Samples per RMS analysis frame. Trailing partial frames are ignored.
pub const FRAME_SIZE: usize = 2048;

/// Frame RMS below this amplitude counts as silence.
pub const SILENCE_THRESHOLD: f64 = 0.01;

/// Shorter silences are co-articulation gaps, not pauses (seconds).
pub const MIN_PAUSE_DURATION: f64 = 0.3;

/// Sample rate transcription providers expect (mono).
pub const TRANSCRIPTION_SAMPLE_RATE: u32 = 16000;

// ── Free-speech scoring ─────────────────────────────────────────────

pub const OPTIMAL_WPM: f64 = 140.0;
pub const MIN_NATURAL_WPM: f64 = 100.0;
pub const MAX_NATURAL_WPM: f64 = 180.0;

/// Used when the transcription carries no per-chunk confidence.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Grammar score when no sentence can be found.
pub const NO_SENTENCE_GRAMMAR_SCORE: u32 = 50;

pub const FREE_SPEECH_FLUENCY_WEIGHT: f64 = 0.30;
pub const FREE_SPEECH_CLARITY_WEIGHT: f64 = 0.25;
pub const FREE_SPEECH_GRAMMAR_WEIGHT: f64 = 0.20;
pub const FREE_SPEECH_PRONUNCIATION_WEIGHT: f64 = 0.25;

pub const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "uhm",
    "hmm",
    "err",
    "ah",
    "like",
    "you know",
    "sort of",
    "kind of",
    "basically",
    "actually",
    "literally",
    "i mean",
];

// ── Practice text limits ────────────────────────────────────────────

pub const MAX_CHARACTERS_PRACTICE: usize = 10_000;
pub const MAX_CHARACTERS_SAMPLE: usize = 5_000;
pub const MAX_CHARACTERS_MANUAL: usize = 15_000;

pub const MAX_WORDS_PRACTICE: usize = 2_000;
pub const MAX_WORDS_SAMPLE: usize = 1_000;
pub const MAX_WORDS_MANUAL: usize = 3_000;

pub const MIN_CHARACTERS: usize = 50;
pub const MIN_WORDS: usize = 10;

pub const SNIPPET_CHARACTERS: usize = 150;

pub const WAV_EXTENSIONS: &[&str] = &["wav", "wave"];
