//! Rule- and lexicon-based sentence analysis.
//!
//! Recognizes verbs and nouns from closed word lists, inflection suffixes
//! and local context (a word after a determiner is taken as a noun, a word
//! after a modal or "to" as a verb). It errs towards finding a part of
//! speech, so it mostly catches fragments like "very big and red".

use crate::grammar::domain::sentence_analyzer::SentenceAnalyzer;

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
    "hers", "ours", "theirs", "this", "that", "these", "those", "someone", "somebody",
    "something", "everyone", "everybody", "everything", "anyone", "anybody", "anything",
    "nobody", "nothing", "who", "what",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "your", "his", "her", "its", "our", "their", "this", "that", "these",
    "those", "some", "any", "every", "each", "no", "another", "many", "few", "several",
];

/// Base, irregular and auxiliary verb forms.
const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "done", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    "go", "went", "gone", "get", "got", "make", "made", "say", "said", "know", "knew", "known",
    "think", "thought", "see", "saw", "seen", "come", "came", "take", "took", "taken", "want",
    "give", "gave", "given", "use", "find", "found", "tell", "told", "ask", "work", "seem",
    "feel", "felt", "try", "leave", "left", "call", "need", "keep", "kept", "let", "begin",
    "began", "begun", "help", "show", "hear", "heard", "play", "run", "ran", "move", "live",
    "believe", "bring", "brought", "happen", "write", "wrote", "written", "sit", "sat", "stand",
    "stood", "lose", "lost", "pay", "paid", "meet", "met", "learn", "change", "lead", "led",
    "understand", "understood", "watch", "follow", "stop", "speak", "spoke", "spoken", "read",
    "spend", "spent", "grow", "grew", "open", "walk", "win", "won", "teach", "taught", "buy",
    "bought", "wait", "send", "sent", "build", "built", "stay", "fall", "fell", "reach", "like",
    "love", "hate", "eat", "ate", "eaten", "drink", "drank", "sleep", "slept", "jump", "look",
    "put", "mean", "meant", "hope", "enjoy", "practice", "study", "sing", "sang", "fly", "flew",
];

const MODAL_CONTEXT: &[&str] = &[
    "to", "will", "would", "can", "could", "should", "shall", "may", "might", "must", "do",
    "does", "did", "don't", "doesn't", "didn't", "won't", "can't", "let's",
];

/// Contractions whose `'s` is "is" or "us" rather than a possessive.
const VERB_CONTRACTIONS: &[&str] = &[
    "it's", "that's", "he's", "she's", "what's", "there's", "here's", "who's", "where's", "let's",
];

const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'re", "'ve", "'ll", "'m", "'d"];

const COMMON_NOUNS: &[&str] = &[
    "time", "people", "person", "year", "day", "week", "thing", "man", "woman", "child",
    "children", "world", "life", "hand", "part", "place", "case", "point", "home", "school",
    "work", "job", "family", "friend", "friends", "house", "country", "city", "water", "food",
    "book", "money", "name", "way", "car", "dog", "cat", "fox", "morning", "night", "today",
    "tomorrow", "yesterday", "weather", "english", "language", "word", "words", "story",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ance", "ence", "ship", "hood", "ism", "ist",
];

/// Tokens never read as a noun by position alone.
const FUNCTION_WORDS: &[&str] = &[
    "and", "or", "but", "so", "of", "in", "on", "at", "to", "for", "with", "by", "from", "very",
    "not", "too", "also", "just", "really", "quite",
];

pub struct LexiconSentenceAnalyzer;

impl LexiconSentenceAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconSentenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceAnalyzer for LexiconSentenceAnalyzer {
    /// Breaks after a run of `.`, `!` or `?` that is followed by whitespace
    /// or the end of text, so decimals like `3.5` stay intact.
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if !is_terminal(c) {
                continue;
            }
            while let Some(&next) = chars.peek() {
                if !is_terminal(next) {
                    break;
                }
                current.push(next);
                chars.next();
            }
            if chars.peek().map_or(true, |n| n.is_whitespace()) {
                flush_sentence(&mut sentences, &mut current);
            }
        }
        flush_sentence(&mut sentences, &mut current);

        sentences
    }

    fn has_verb(&self, sentence: &str) -> bool {
        let tokens = tokens(sentence);
        tokens.iter().enumerate().any(|(i, token)| {
            let word = token.to_lowercase();
            let after_modal = i > 0 && MODAL_CONTEXT.contains(&tokens[i - 1].to_lowercase().as_str());
            is_verb_form(&word)
                || (after_modal && !is_closed_class(&word) && word.chars().all(char::is_alphabetic))
        })
    }

    fn has_noun(&self, sentence: &str) -> bool {
        let tokens = tokens(sentence);
        tokens.iter().enumerate().any(|(i, token)| {
            let word = token.to_lowercase();
            let after_determiner =
                i > 0 && DETERMINERS.contains(&tokens[i - 1].to_lowercase().as_str());
            let proper = i > 0 && token.starts_with(|c: char| c.is_uppercase());

            PRONOUNS.contains(&word.as_str())
                || COMMON_NOUNS.contains(&word.as_str())
                || has_noun_suffix(&word)
                || proper
                || (after_determiner && !is_closed_class(&word))
        })
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn flush_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Words with surrounding punctuation removed; inner apostrophes kept.
fn tokens(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .trim_matches('\'')
                .replace('\u{2019}', "'")
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn is_verb_form(word: &str) -> bool {
    if VERBS.contains(&word) || VERB_CONTRACTIONS.contains(&word) {
        return true;
    }
    if CONTRACTION_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return true;
    }
    let inflected = [word.strip_suffix("es"), word.strip_suffix('s')];
    if inflected.iter().flatten().any(|stem| VERBS.contains(stem)) {
        return true;
    }
    if word.ends_with("ing") && word.len() > 4 {
        return true;
    }
    word.ends_with("ed") && word.len() > 4
}

fn has_noun_suffix(word: &str) -> bool {
    NOUN_SUFFIXES
        .iter()
        .any(|s| word.len() > s.len() + 2 && word.ends_with(s))
}

fn is_closed_class(word: &str) -> bool {
    DETERMINERS.contains(&word) || FUNCTION_WORDS.contains(&word) || PRONOUNS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn analyzer() -> LexiconSentenceAnalyzer {
        LexiconSentenceAnalyzer::new()
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let sentences = analyzer().sentences("Hello there. How are you? I'm fine!");
        assert_eq!(sentences, vec!["Hello there.", "How are you?", "I'm fine!"]);
    }

    #[test]
    fn test_unpunctuated_text_is_one_sentence() {
        let sentences = analyzer().sentences("um so like I think um this is good");
        assert_eq!(sentences, vec!["um so like I think um this is good"]);
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        let sentences = analyzer().sentences("It costs 3.5 dollars. Cheap...");
        assert_eq!(sentences, vec!["It costs 3.5 dollars.", "Cheap..."]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   \n ")]
    #[case::punctuation_only("... !?")]
    fn test_no_sentences(#[case] text: &str) {
        assert!(analyzer().sentences(text).is_empty());
    }

    #[rstest]
    #[case::past_irregular("The cat sat on the mat.", true)]
    #[case::copula("I think this is good", true)]
    #[case::third_person("She likes tea", true)]
    #[case::progressive("Running quickly", true)]
    #[case::after_modal("We should celebrate", true)]
    #[case::contraction("They're here", true)]
    #[case::fragment("Very big and very red.", false)]
    #[case::noun_phrase("The old wooden table", false)]
    fn test_has_verb(#[case] sentence: &str, #[case] expected: bool) {
        assert_eq!(analyzer().has_verb(sentence), expected);
    }

    #[rstest]
    #[case::after_determiner("The cat sat on the mat.", true)]
    #[case::pronoun("I think so", true)]
    #[case::proper_noun("We visited Paris", true)]
    #[case::suffix("Education matters", true)]
    #[case::fragment("Very big and very red.", false)]
    #[case::verb_only("Running quickly", false)]
    fn test_has_noun(#[case] sentence: &str, #[case] expected: bool) {
        assert_eq!(analyzer().has_noun(sentence), expected);
    }
}
