/// Domain interface for the small amount of syntax grammar scoring needs.
///
/// Implementations only have to answer qualitatively; exact tagging
/// agreement with any particular NLP toolkit is not required.
pub trait SentenceAnalyzer: Send + Sync {
    /// Split text into sentences. Blank input yields none.
    fn sentences(&self, text: &str) -> Vec<String>;

    fn has_verb(&self, sentence: &str) -> bool;

    /// Pronouns count as nouns.
    fn has_noun(&self, sentence: &str) -> bool;
}
