use super::transcription::Transcription;
use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for speech-to-text transcription.
///
/// Providers receive mono audio at the transcription sample rate and
/// return the full text, optionally split into time-stamped chunks.
pub trait Transcriber: Send {
    fn transcribe(&self, audio: &AudioSegment)
        -> Result<Transcription, Box<dyn std::error::Error>>;
}
