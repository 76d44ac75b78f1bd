/// A segment of decoded audio: interleaved PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(samples, sample_rate, 1)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Length in seconds. Zero when the rate or channel count is zero.
    pub fn duration(&self) -> f64 {
        let per_second = self.sample_rate as f64 * self.channels as f64;
        if per_second == 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / per_second
    }

    /// Averages interleaved channels into a single channel.
    /// A trailing incomplete frame is dropped.
    pub fn to_mono(&self) -> AudioSegment {
        if self.channels <= 1 {
            return self.clone();
        }

        let channels = self.channels as usize;
        let samples = self
            .samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect();
        AudioSegment::mono(samples, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_creates_segment_with_correct_fields() {
        let samples = vec![0.0f32; 16000];
        let seg = AudioSegment::new(samples.clone(), 16000, 1);
        assert_eq!(seg.samples(), &samples[..]);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::mono(vec![0.0; 48000], 16000);
        assert_eq!(seg.duration(), 3.0);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_eq!(seg.duration(), 1.0);
    }

    #[test]
    fn test_duration_zero_rate() {
        let seg = AudioSegment::mono(vec![0.0; 100], 0);
        assert_eq!(seg.duration(), 0.0);
    }

    #[test]
    fn test_to_mono_averages_channels() {
        let seg = AudioSegment::new(vec![1.0, 0.0, 0.5, 0.5, -1.0, 1.0], 8000, 2);
        let mono = seg.to_mono();
        assert_eq!(mono.channels(), 1);
        assert_eq!(mono.sample_rate(), 8000);
        assert_eq!(mono.samples().len(), 3);
        assert_relative_eq!(mono.samples()[0], 0.5);
        assert_relative_eq!(mono.samples()[1], 0.5);
        assert_relative_eq!(mono.samples()[2], 0.0);
    }

    #[test]
    fn test_to_mono_keeps_mono_unchanged() {
        let seg = AudioSegment::mono(vec![0.1, 0.2, 0.3], 16000);
        assert_eq!(seg.to_mono().samples(), seg.samples());
    }
}
