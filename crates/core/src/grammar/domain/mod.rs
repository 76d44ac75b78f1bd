pub mod grammar_scorer;
pub mod sentence_analyzer;
