pub mod transcriber;
pub mod transcription;
