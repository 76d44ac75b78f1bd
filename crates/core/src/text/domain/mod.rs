pub mod normalizer;
pub mod practice_text;
pub mod similarity;
pub mod word_aligner;
