pub mod audio_features;
pub mod audio_reader;
pub mod audio_segment;
