use serde::Serialize;

use super::audio_segment::AudioSegment;
use crate::shared::constants::{FRAME_SIZE, MIN_PAUSE_DURATION, SILENCE_THRESHOLD};
use crate::shared::error::AssessmentError;

/// A silent stretch long enough to count as a pause. Times in seconds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pause {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    pub pauses: Vec<Pause>,
    /// Mean frame RMS.
    pub average_volume: f64,
    /// Coefficient of variation of frame RMS; 1 when the audio is silent.
    pub volume_variance: f64,
    /// Total duration minus pause time.
    pub speech_duration: f64,
    /// Sum of pause durations. Silences below the pause minimum are not counted.
    pub silence_duration: f64,
}

/// Frame-based RMS energy analysis of a recording.
pub struct AudioFeaturesAnalyzer;

impl AudioFeaturesAnalyzer {
    pub fn analyze(audio: &AudioSegment) -> Result<AudioFeatures, AssessmentError> {
        if audio.sample_rate() == 0 {
            return Err(AssessmentError::invalid_argument(
                "sample rate must be greater than zero",
            ));
        }
        if audio.channels() == 0 {
            return Err(AssessmentError::invalid_argument(
                "audio must have at least one channel",
            ));
        }
        if let Some(bad) = audio.samples().iter().find(|s| !s.is_finite()) {
            return Err(AssessmentError::invalid_argument(format!(
                "audio samples must be finite, got {bad}"
            )));
        }

        let mono = audio.to_mono();
        let sample_rate = mono.sample_rate() as f64;
        let levels = frame_levels(mono.samples());
        if levels.is_empty() {
            log::warn!(
                "Audio shorter than one analysis frame ({} samples)",
                mono.samples().len()
            );
        }

        let pauses = detect_pauses(&levels, mono.samples().len(), sample_rate);
        let (average_volume, volume_variance) = volume_metrics(&levels);
        let silence_duration: f64 = pauses.iter().map(|p| p.duration).sum();
        let speech_duration = mono.duration() - silence_duration;

        log::debug!(
            "Analyzed {} frames: {} pauses, average volume {average_volume:.4}",
            levels.len(),
            pauses.len()
        );

        Ok(AudioFeatures {
            pauses,
            average_volume,
            volume_variance,
            speech_duration,
            silence_duration,
        })
    }

    /// Maps volume variance to a 0-1 consistency score; lower variance
    /// scores closer to 1.
    pub fn volume_consistency(volume_variance: f64) -> f64 {
        (-volume_variance * 2.0).exp().clamp(0.0, 1.0)
    }
}

/// RMS of each complete frame. A trailing partial frame is ignored.
fn frame_levels(samples: &[f32]) -> Vec<f64> {
    samples
        .chunks_exact(FRAME_SIZE)
        .map(|frame| {
            let sum: f64 = frame.iter().map(|s| (*s as f64) * (*s as f64)).sum();
            (sum / frame.len() as f64).sqrt()
        })
        .collect()
}

fn detect_pauses(levels: &[f64], total_samples: usize, sample_rate: f64) -> Vec<Pause> {
    let mut pauses = Vec::new();
    let mut silence_start: Option<f64> = None;

    for (i, rms) in levels.iter().enumerate() {
        let current_time = (i * FRAME_SIZE) as f64 / sample_rate;

        if *rms < SILENCE_THRESHOLD {
            if silence_start.is_none() {
                silence_start = Some(current_time);
            }
        } else if let Some(start) = silence_start.take() {
            push_if_pause(&mut pauses, start, current_time);
        }
    }

    if let Some(start) = silence_start {
        let end_time = total_samples as f64 / sample_rate;
        push_if_pause(&mut pauses, start, end_time);
    }

    pauses
}

fn push_if_pause(pauses: &mut Vec<Pause>, start: f64, end: f64) {
    let duration = end - start;
    if duration >= MIN_PAUSE_DURATION {
        pauses.push(Pause {
            start,
            end,
            duration,
        });
    }
}

/// Returns `(average, coefficient of variation)` of the frame levels.
fn volume_metrics(levels: &[f64]) -> (f64, f64) {
    if levels.is_empty() {
        return (0.0, 1.0);
    }

    let n = levels.len() as f64;
    let average = levels.iter().sum::<f64>() / n;
    let variance = levels.iter().map(|v| (v - average).powi(2)).sum::<f64>() / n;

    let coefficient = if average > 0.0 {
        variance.sqrt() / average
    } else {
        1.0
    };
    (average, coefficient)
}
