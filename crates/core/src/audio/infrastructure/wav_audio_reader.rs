use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::error::AssessmentError;

/// Decodes PCM WAV files (8-32 bit integer or 32-bit float) with hound.
///
/// Samples keep the file's interleaved channel layout and native rate.
pub struct WavAudioReader;

impl WavAudioReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WavAudioReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioReader for WavAudioReader {
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, Box<dyn std::error::Error>> {
        let mut reader = WavReader::open(path).map_err(|e| match e {
            hound::Error::IoError(source) => AssessmentError::io("opening wav file", source),
            other => AssessmentError::audio("reading wav header", other),
        })?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| AssessmentError::audio("decoding float samples", e))?,
            SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<_, _>>()
                    .map_err(|e| AssessmentError::audio("decoding integer samples", e))?
            }
        };

        log::debug!(
            "Decoded {} samples ({} Hz, {} channel(s)) from {}",
            samples.len(),
            spec.sample_rate,
            spec.channels,
            path.display()
        );

        Ok(AudioSegment::new(samples, spec.sample_rate, spec.channels))
    }
}
