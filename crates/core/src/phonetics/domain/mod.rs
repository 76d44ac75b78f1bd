pub mod difficulty;
pub mod phoneme_analyzer;
