use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding a recording into PCM samples.
pub trait AudioReader: Send {
    /// Decode the whole recording. Multi-channel sources keep their
    /// interleaved layout; callers downmix with [`AudioSegment::to_mono`].
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
