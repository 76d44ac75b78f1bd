use crate::audio::domain::audio_segment::AudioSegment;
use crate::transcription::domain::transcriber::Transcriber;
use crate::transcription::domain::transcription::Transcription;

/// Returns a transcription produced elsewhere, ignoring the audio.
///
/// Used when the caller already holds the provider's output.
pub struct ProvidedTranscriber {
    transcription: Transcription,
}

impl ProvidedTranscriber {
    pub fn new(transcription: Transcription) -> Self {
        Self { transcription }
    }
}

impl Transcriber for ProvidedTranscriber {
    fn transcribe(&self, _: &AudioSegment) -> Result<Transcription, Box<dyn std::error::Error>> {
        Ok(self.transcription.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_supplied_transcription() {
        let transcriber = ProvidedTranscriber::new(Transcription::from_text("hello there"));
        let audio = AudioSegment::mono(vec![0.0; 160], 16000);
        let result = transcriber.transcribe(&audio).unwrap();
        assert_eq!(result.text, "hello there");
    }
}
