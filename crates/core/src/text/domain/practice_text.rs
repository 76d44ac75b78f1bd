//! Input governance for practice texts.
//!
//! Scoring cost grows with text length, so reference texts are cleaned and
//! checked against word/character limits before a practice session starts.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::normalizer::is_word_char;
use crate::shared::constants::{
    EXPECTED_READING_WPM, MAX_CHARACTERS_PRACTICE, MAX_WORDS_PRACTICE, MIN_CHARACTERS, MIN_WORDS,
    SNIPPET_CHARACTERS,
};

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static SPACES_OR_TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("valid regex"));
static ZERO_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{200B}-\u{200D}\u{FEFF}]").expect("valid regex"));
static CURLY_DOUBLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{201C}\u{201D}]").expect("valid regex"));
static CURLY_SINGLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{2018}\u{2019}]").expect("valid regex"));
static LONG_ELLIPSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{4,}").expect("valid regex"));
static REPEATED_BANG: Lazy<Regex> = Lazy::new(|| Regex::new(r"!{2,}").expect("valid regex"));
static REPEATED_QUESTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?{2,}").expect("valid regex"));
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([,.!?;:])").expect("valid regex"));
static SPACE_AFTER_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([,.!?;:])\s*").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_STANDARD_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s\-.,!?;:()'"/]"#).expect("valid regex"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

#[derive(Clone, Debug, PartialEq)]
pub struct TextProcessingOptions {
    pub max_characters: usize,
    pub max_words: usize,
    pub min_characters: usize,
    pub min_words: usize,
    /// Keep paragraph breaks (at most one blank line) instead of joining lines.
    pub allow_empty_lines: bool,
    /// Skip whitespace and line-break normalization.
    pub preserve_formatting: bool,
}

impl Default for TextProcessingOptions {
    fn default() -> Self {
        Self {
            max_characters: MAX_CHARACTERS_PRACTICE,
            max_words: MAX_WORDS_PRACTICE,
            min_characters: MIN_CHARACTERS,
            min_words: MIN_WORDS,
            allow_empty_lines: false,
            preserve_formatting: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    /// Minutes, rounded up.
    pub estimated_reading_time: usize,
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words • {} characters",
            group_thousands(self.words),
            group_thousands(self.characters)
        )?;
        if self.sentences > 0 {
            write!(f, " • {} sentences", self.sentences)?;
        }
        if self.estimated_reading_time > 0 {
            write!(f, " • ~{} min read", self.estimated_reading_time)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: TextStats,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suitability {
    pub suitable: bool,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruncatedText {
    pub text: String,
    pub is_truncated: bool,
}

/// Whitespace-separated tokens that contain at least one word character.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(is_word_char))
        .count()
}

/// Non-blank pieces between runs of `.`, `!` or `?`.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Reading-aloud time in whole minutes at the average reading pace.
pub fn estimate_reading_time(text: &str) -> usize {
    (count_words(text) as f64 / EXPECTED_READING_WPM).ceil() as usize
}

pub fn clean_text_for_practice(text: &str, options: &TextProcessingOptions) -> String {
    let mut cleaned = text.to_string();

    if !options.preserve_formatting {
        cleaned = SPACES_OR_TABS.replace_all(&cleaned, " ").into_owned();
        cleaned = if options.allow_empty_lines {
            EXCESS_BLANK_LINES.replace_all(&cleaned, "\n\n").into_owned()
        } else {
            LINE_BREAKS.replace_all(&cleaned, " ").into_owned()
        };
    }

    cleaned = ZERO_WIDTH.replace_all(&cleaned, "").into_owned();
    cleaned = CURLY_DOUBLE_QUOTES.replace_all(&cleaned, "\"").into_owned();
    cleaned = CURLY_SINGLE_QUOTES.replace_all(&cleaned, "'").into_owned();
    cleaned = LONG_ELLIPSIS.replace_all(&cleaned, "...").into_owned();
    cleaned = REPEATED_BANG.replace_all(&cleaned, "!").into_owned();
    cleaned = REPEATED_QUESTION.replace_all(&cleaned, "?").into_owned();
    cleaned = SPACE_BEFORE_PUNCT.replace_all(&cleaned, "$1").into_owned();
    cleaned = SPACE_AFTER_PUNCT.replace_all(&cleaned, "$1 ").into_owned();
    cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ").into_owned();

    cleaned.trim().to_string()
}

pub fn validate_text(text: &str, options: &TextProcessingOptions) -> TextValidation {
    if text.is_empty() {
        return TextValidation {
            is_valid: false,
            errors: vec!["Text is required".to_string()],
            warnings: Vec::new(),
            stats: TextStats::default(),
        };
    }

    let cleaned = clean_text_for_practice(text, &TextProcessingOptions::default());
    let stats = TextStats {
        characters: cleaned.chars().count(),
        words: count_words(&cleaned),
        sentences: count_sentences(&cleaned),
        estimated_reading_time: estimate_reading_time(&cleaned),
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if stats.characters < options.min_characters {
        errors.push(format!(
            "Text is too short. Minimum {} characters required.",
            options.min_characters
        ));
    }
    if stats.characters > options.max_characters {
        errors.push(format!(
            "Text is too long. Maximum {} characters allowed.",
            options.max_characters
        ));
    }
    if stats.words < options.min_words {
        errors.push(format!(
            "Text is too short. Minimum {} words required.",
            options.min_words
        ));
    }
    if stats.words > options.max_words {
        errors.push(format!(
            "Text is too long. Maximum {} words allowed.",
            options.max_words
        ));
    }

    if stats.sentences == 0 {
        warnings.push("Text appears to have no complete sentences.".to_string());
    }
    if stats.words > 0 && stats.characters as f64 / stats.words as f64 > 15.0 {
        warnings.push(
            "Text may contain very long words that could be difficult to pronounce.".to_string(),
        );
    }
    if stats.estimated_reading_time > 15 {
        warnings
            .push("Text is quite long and may take over 15 minutes to read aloud.".to_string());
    }
    if NON_STANDARD_CHAR.find_iter(&cleaned).count() > 10 {
        warnings.push(
            "Text contains many special characters that may affect pronunciation.".to_string(),
        );
    }

    TextValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        stats,
    }
}

/// Cuts `text` to at most `max_len` characters, preferring sentence
/// boundaries and falling back to word boundaries.
pub fn truncate_text_at_sentence(text: &str, max_len: usize) -> TruncatedText {
    let text_len = text.chars().count();
    if text.is_empty() || text_len <= max_len {
        return TruncatedText {
            text: text.to_string(),
            is_truncated: false,
        };
    }

    let mut segments: Vec<(&str, &str)> = Vec::new();
    let mut last = 0;
    for m in SENTENCE_END.find_iter(text) {
        segments.push((&text[last..m.start()], m.as_str()));
        last = m.end();
    }
    segments.push((&text[last..], ""));

    let mut truncated = String::new();
    let mut is_truncated = false;
    for (sentence, punctuation) in segments {
        let potential = format!("{truncated}{sentence}{punctuation}");
        if potential.chars().count() > max_len {
            is_truncated = true;
            break;
        }
        truncated = potential;
    }

    if truncated.is_empty() {
        for word in text.split_whitespace() {
            let potential = if truncated.is_empty() {
                word.to_string()
            } else {
                format!("{truncated} {word}")
            };
            if potential.chars().count() > max_len {
                break;
            }
            truncated = potential;
        }
        is_truncated = true;
    }

    if truncated.is_empty() {
        truncated = text.chars().take(max_len).collect();
    }
    let is_truncated = is_truncated || truncated.chars().count() < text_len;

    TruncatedText {
        text: truncated,
        is_truncated,
    }
}

/// Preview of at most `max_len` characters plus an ellipsis, cut at a word
/// boundary when one falls in the last fifth.
pub fn text_snippet(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_len).collect();
    let last_space = truncated.chars().rev().position(|c| c == ' ').map(|from_end| {
        truncated.chars().count() - 1 - from_end
    });

    match last_space {
        Some(idx) if idx as f64 > max_len as f64 * 0.8 => {
            let head: String = truncated.chars().take(idx).collect();
            format!("{head}...")
        }
        _ => format!("{truncated}..."),
    }
}

pub fn default_snippet(text: &str) -> String {
    text_snippet(text, SNIPPET_CHARACTERS)
}

pub fn assess_suitability(text: &str) -> Suitability {
    let validation = validate_text(text, &TextProcessingOptions::default());
    let mut reasons = Vec::new();
    let mut suggestions = Vec::new();

    if !validation.is_valid {
        reasons.extend(validation.errors.iter().cloned());
    }

    let TextStats {
        words,
        characters,
        sentences,
        ..
    } = validation.stats;

    if words < 50 {
        reasons.push("Text is quite short for meaningful practice".to_string());
        suggestions
            .push("Consider adding more content or combining with other texts".to_string());
    }

    if sentences < 3 {
        reasons.push("Text has very few complete sentences".to_string());
        suggestions.push("Add more complete sentences for better practice flow".to_string());
    }

    let long_words = if words == 0 {
        characters > 0
    } else {
        characters as f64 / words as f64 > 12.0
    };
    if long_words {
        reasons.push("Text contains many long or complex words".to_string());
        suggestions.push(
            "Consider simplifying vocabulary for clearer pronunciation practice".to_string(),
        );
    }

    let numbers = DIGIT_RUN.find_iter(text).count();
    if numbers > 0 && numbers as f64 > words as f64 * 0.1 {
        reasons.push(
            "Text contains many numbers which may be hard to pronounce naturally".to_string(),
        );
        suggestions.push("Consider replacing numbers with written-out versions".to_string());
    }

    Suitability {
        suitable: reasons.is_empty(),
        reasons,
        suggestions,
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
