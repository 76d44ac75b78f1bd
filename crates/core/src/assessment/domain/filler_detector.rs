use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::constants::FILLER_WORDS;

/// One case-insensitive whole-word pattern per filler, in list order.
static FILLER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    FILLER_WORDS
        .iter()
        .map(|filler| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(filler))).expect("valid regex")
        })
        .collect()
});

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillerMatches {
    pub count: usize,
    /// Matched text, lowercased, grouped by filler in list order.
    pub words: Vec<String>,
}

pub struct FillerDetector;

impl FillerDetector {
    /// Counts filler words and phrases. Multi-word fillers ("you know")
    /// count once and overlap with any single-word filler they contain.
    pub fn detect(text: &str) -> FillerMatches {
        let words: Vec<String> = FILLER_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(text))
            .map(|m| m.as_str().to_lowercase())
            .collect();

        FillerMatches {
            count: words.len(),
            words,
        }
    }
}
