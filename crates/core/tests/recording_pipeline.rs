use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use speechcoach_core::audio::infrastructure::wav_audio_reader::WavAudioReader;
use speechcoach_core::pipeline::assess_recording_use_case::{
    AssessRecordingUseCase, AssessmentReport,
};
use speechcoach_core::pipeline::pipeline_logger::NullPipelineLogger;
use speechcoach_core::transcription::infrastructure::provided_transcriber::ProvidedTranscriber;
use speechcoach_core::{FreeSpeechScorer, Transcription};

/// One second of tone, one second of silence, one second of tone.
fn write_recording(path: &Path, channels: u16) {
    let spec = WavSpec {
        channels,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for second in 0..3 {
        let amplitude = if second == 1 { 0 } else { i16::MAX / 2 };
        for i in 0..16000 {
            let sample = if i % 2 == 0 { amplitude } else { -amplitude };
            for _ in 0..channels {
                writer.write_sample(sample).unwrap();
            }
        }
    }
    writer.finalize().unwrap();
}

fn use_case(text: &str) -> AssessRecordingUseCase {
    AssessRecordingUseCase::new(
        Box::new(WavAudioReader::new()),
        Box::new(ProvidedTranscriber::new(Transcription::from_text(text))),
        FreeSpeechScorer::default(),
        Box::new(NullPipelineLogger),
    )
}

#[test]
fn test_free_speech_from_wav_detects_pause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.wav");
    write_recording(&path, 2);

    let report = use_case("I went to the market. It was busy today.")
        .execute(&path, None, None)
        .unwrap();

    let AssessmentReport::FreeSpeech(assessment) = report else {
        panic!("expected free speech report");
    };
    assert_eq!(assessment.metrics.pause_count, 1);
    assert!(assessment.metrics.pause_duration > 0.8);
    assert_eq!(assessment.metrics.total_words, 9);
    // 9 words over the 3 s recording
    assert!((assessment.metrics.speech_rate - 180.0).abs() < 1e-6);
}

#[test]
fn test_reference_reading_from_wav() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("read.wav");
    write_recording(&path, 1);

    let report = use_case("the cat sat on the bat")
        .execute(&path, Some("The cat sat on the mat."), Some(2.0))
        .unwrap();

    let AssessmentReport::ReferenceBased(assessment) = report else {
        panic!("expected reference-based report");
    };
    assert_eq!(assessment.word_level_scores.len(), 6);
    assert_eq!(assessment.word_level_scores[5].word, "bat");
    assert!(assessment.accuracy_score < 100);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = use_case("hello").execute(&dir.path().join("missing.wav"), None, None);
    assert!(result.is_err());
}
