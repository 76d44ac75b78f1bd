pub mod lexicon_sentence_analyzer;
