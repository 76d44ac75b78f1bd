use serde::{Deserialize, Serialize};

/// One time-stamped piece of a transcription, as produced by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionChunk {
    pub text: String,
    /// `(start, end)` in seconds.
    pub timestamp: (f64, f64),
    /// Recognizer confidence in `[0, 1]`, when the provider reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl TranscriptionChunk {
    pub fn duration(&self) -> f64 {
        self.timestamp.1 - self.timestamp.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    #[serde(default)]
    pub chunks: Option<Vec<TranscriptionChunk>>,
}

impl Transcription {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chunks: None,
        }
    }

    pub fn chunks(&self) -> Option<&[TranscriptionChunk]> {
        self.chunks.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chunk_duration() {
        let chunk = TranscriptionChunk {
            text: " test".to_string(),
            timestamp: (2.0, 2.8),
            confidence: Some(0.9),
        };
        assert_relative_eq!(chunk.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_chunk_deserializes_without_confidence() {
        let chunk: TranscriptionChunk =
            serde_json::from_str(r#"{"text": "hello", "timestamp": [0.0, 0.4]}"#).unwrap();
        assert_eq!(chunk.text, "hello");
        assert_eq!(chunk.timestamp, (0.0, 0.4));
        assert_eq!(chunk.confidence, None);
    }

    #[test]
    fn test_transcription_deserializes_chunk_list() {
        let json = r#"{
            "text": "hello world",
            "chunks": [
                {"text": "hello", "timestamp": [0.0, 0.4], "confidence": 0.9},
                {"text": " world", "timestamp": [0.4, 0.9], "confidence": 0.7}
            ]
        }"#;
        let transcription: Transcription = serde_json::from_str(json).unwrap();
        let chunks = transcription.chunks().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].confidence, Some(0.7));
    }

    #[test]
    fn test_from_text_has_no_chunks() {
        let transcription = Transcription::from_text("just text");
        assert_eq!(transcription.text, "just text");
        assert!(transcription.chunks().is_none());
    }
}
