//! Orthography-based sound approximation.
//!
//! Maps letters and digraphs to coarse IPA-like symbols and flags commonly
//! confused sounds. There is no acoustic model behind this: results are
//! best-effort feedback with expected false positives and negatives.

use serde::Serialize;

/// Sounds spelled with two letters. Checked before single letters.
const DIGRAPH_SOUNDS: &[(&str, &str)] = &[
    ("ee", "i"),
    ("oo", "u"),
    ("ou", "aʊ"),
    ("ow", "aʊ"),
    ("ay", "eɪ"),
    ("ai", "eɪ"),
    ("ey", "eɪ"),
    ("ie", "aɪ"),
    ("th", "θ"),
    ("sh", "ʃ"),
    ("ch", "tʃ"),
    ("ng", "ŋ"),
    ("ph", "f"),
    ("gh", "f"),
    ("ck", "k"),
    ("kn", "n"),
    ("wr", "r"),
    ("mb", "m"),
];

const LETTER_SOUNDS: &[(char, &str)] = &[
    ('a', "æ"),
    ('e', "ɛ"),
    ('i', "ɪ"),
    ('o', "ɔ"),
    ('u', "ʌ"),
    ('y', "aɪ"),
];

/// `(correct, mistaken)` spellings of commonly confused sounds.
const COMMON_MISTAKES: &[(&str, &[&str])] = &[
    ("th", &["f", "d", "t", "s"]),
    ("v", &["w", "b"]),
    ("w", &["v"]),
    ("r", &["l"]),
    ("l", &["r"]),
    ("p", &["b"]),
    ("b", &["p"]),
    ("t", &["d"]),
    ("d", &["t"]),
    ("k", &["g"]),
    ("g", &["k"]),
];

/// Expected vs heard sound at one position of a word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhonemeScore {
    pub expected: String,
    pub actual: String,
    /// 100 when the sounds agree, otherwise 0.
    pub score: u32,
}

pub struct PhonemeAnalyzer;

impl PhonemeAnalyzer {
    /// Scans left to right, consuming a digraph when one matches and a
    /// single letter otherwise. Unmapped letters pass through unchanged.
    pub fn extract_sounds(word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut sounds = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some(sound) = digraph_sound(&pair) {
                    sounds.push(sound.to_string());
                    i += 2;
                    continue;
                }
            }

            let c = chars[i];
            match letter_sound(c) {
                Some(sound) => sounds.push(sound.to_string()),
                None => sounds.push(c.to_string()),
            }
            i += 1;
        }

        sounds
    }

    /// Confusable-sound substitutions (`"f instead of th"`) followed by
    /// every original sound absent from the transcription (`"missing θ"`).
    pub fn find_phoneme_errors(original: &str, transcribed: &str) -> Vec<String> {
        let mut errors = Vec::new();

        for (correct, mistakes) in COMMON_MISTAKES {
            if !original.contains(correct) {
                continue;
            }
            for mistake in *mistakes {
                if transcribed.contains(mistake) && !transcribed.contains(correct) {
                    errors.push(format!("{mistake} instead of {correct}"));
                }
            }
        }

        let transcribed_sounds = Self::extract_sounds(transcribed);
        for sound in Self::extract_sounds(original) {
            if !transcribed_sounds.contains(&sound) {
                errors.push(format!("missing {sound}"));
            }
        }

        errors
    }

    /// Position-by-position comparison of the two sound sequences; the
    /// shorter side is padded with empty sounds.
    pub fn phoneme_breakdown(original: &str, transcribed: &str) -> Vec<PhonemeScore> {
        let expected = Self::extract_sounds(original);
        let actual = Self::extract_sounds(transcribed);
        let len = expected.len().max(actual.len());

        (0..len)
            .map(|i| {
                let expected = expected.get(i).cloned().unwrap_or_default();
                let actual = actual.get(i).cloned().unwrap_or_default();
                let score = if expected == actual { 100 } else { 0 };
                PhonemeScore {
                    expected,
                    actual,
                    score,
                }
            })
            .collect()
    }
}

fn digraph_sound(pair: &str) -> Option<&'static str> {
    DIGRAPH_SOUNDS
        .iter()
        .find(|(spelling, _)| *spelling == pair)
        .map(|(_, sound)| *sound)
}

fn letter_sound(c: char) -> Option<&'static str> {
    LETTER_SOUNDS
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, sound)| *sound)
}
