use serde::Serialize;

use super::similarity::similarity;
use crate::shared::constants::ALIGNMENT_SIMILARITY_THRESHOLD;

/// One reference word paired with what was heard in its place.
///
/// An empty `transcribed` marks a deletion: the word was never said.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentPair {
    pub original: String,
    pub transcribed: String,
}

impl AlignmentPair {
    fn new(original: &str, transcribed: &str) -> Self {
        Self {
            original: original.to_string(),
            transcribed: transcribed.to_string(),
        }
    }

    pub fn is_deletion(&self) -> bool {
        self.transcribed.is_empty()
    }
}

/// Greedy two-pointer alignment of reference tokens against transcribed tokens.
///
/// Per step, in priority order:
/// 1. exact match, or similarity above the threshold: pair, advance both
/// 2. next transcribed token matches: drop the current one as an insertion
/// 3. next reference token matches: emit a deletion, advance reference only
/// 4. otherwise: forced substitution, advance both
///
/// Leftover reference tokens become deletions. Leftover transcribed tokens
/// are dropped, so every reference token appears exactly once but extra
/// speech at the end is not reported.
///
/// This is a local heuristic, not a minimum-edit-distance alignment; runs of
/// consecutive errors in long texts can drift.
pub struct WordAligner;

impl WordAligner {
    pub fn align<S: AsRef<str>>(reference: &[S], hypothesis: &[S]) -> Vec<AlignmentPair> {
        let mut alignment = Vec::with_capacity(reference.len());
        let mut i = 0;
        let mut j = 0;

        while i < reference.len() && j < hypothesis.len() {
            let original = reference[i].as_ref();
            let transcribed = hypothesis[j].as_ref();

            if original == transcribed || is_close(original, transcribed) {
                alignment.push(AlignmentPair::new(original, transcribed));
                i += 1;
                j += 1;
            } else if j + 1 < hypothesis.len() && is_close(original, hypothesis[j + 1].as_ref()) {
                j += 1;
            } else if i + 1 < reference.len() && is_close(reference[i + 1].as_ref(), transcribed) {
                alignment.push(AlignmentPair::new(original, ""));
                i += 1;
            } else {
                alignment.push(AlignmentPair::new(original, transcribed));
                i += 1;
                j += 1;
            }
        }

        alignment.extend(reference[i..].iter().map(|w| AlignmentPair::new(w.as_ref(), "")));

        if j < hypothesis.len() {
            log::debug!(
                "Dropped {} trailing transcribed token(s) during alignment",
                hypothesis.len() - j
            );
        }

        alignment
    }
}

fn is_close(a: &str, b: &str) -> bool {
    similarity(a, b) > ALIGNMENT_SIMILARITY_THRESHOLD
}
