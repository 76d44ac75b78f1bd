use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::assessment::domain::free_speech_assessment::FreeSpeechAssessment;
use crate::assessment::domain::free_speech_scorer::FreeSpeechScorer;
use crate::assessment::domain::reference_assessment::PronunciationAssessment;
use crate::assessment::domain::reference_scorer::ReferenceScorer;
use crate::audio::domain::audio_reader::AudioReader;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::TRANSCRIPTION_SAMPLE_RATE;
use crate::transcription::domain::transcriber::Transcriber;

/// Outcome of one assessed recording, tagged by scoring path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum AssessmentReport {
    ReferenceBased(PronunciationAssessment),
    FreeSpeech(FreeSpeechAssessment),
}

impl AssessmentReport {
    pub fn overall_score(&self) -> u32 {
        match self {
            Self::ReferenceBased(a) => a.overall_score,
            Self::FreeSpeech(a) => a.overall_score,
        }
    }
}

/// Recording pipeline: read → downmix → transcribe → score.
///
/// A non-blank reference text selects the reference-based scorer;
/// otherwise the recording is scored as free speech.
pub struct AssessRecordingUseCase {
    reader: Box<dyn AudioReader>,
    transcriber: Box<dyn Transcriber>,
    free_speech: FreeSpeechScorer,
    logger: Box<dyn PipelineLogger>,
}

impl AssessRecordingUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        transcriber: Box<dyn Transcriber>,
        free_speech: FreeSpeechScorer,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            transcriber,
            free_speech,
            logger,
        }
    }

    /// `duration` overrides the recording length used for speech rate.
    pub fn execute(
        &mut self,
        audio_path: &Path,
        reference_text: Option<&str>,
        duration: Option<f64>,
    ) -> Result<AssessmentReport, Box<dyn std::error::Error>> {
        let started = Instant::now();
        let audio = self.reader.read_audio(audio_path)?.to_mono();
        self.logger.timing("read_audio", elapsed_ms(started));
        if audio.sample_rate() != TRANSCRIPTION_SAMPLE_RATE {
            log::warn!(
                "Audio is {} Hz; transcription providers expect {TRANSCRIPTION_SAMPLE_RATE} Hz",
                audio.sample_rate()
            );
        }

        let started = Instant::now();
        let transcription = self.transcriber.transcribe(&audio)?;
        self.logger.timing("transcribe", elapsed_ms(started));
        if let Some(chunks) = transcription.chunks() {
            let covered: f64 = chunks.iter().map(|chunk| chunk.duration()).sum();
            self.logger.metric("chunk_coverage_s", covered);
        }

        let duration = duration.unwrap_or_else(|| audio.duration());
        let reference = reference_text.filter(|text| !text.trim().is_empty());

        let started = Instant::now();
        let report = match reference {
            Some(reference) => {
                self.logger.info("Scoring against reference text");
                AssessmentReport::ReferenceBased(ReferenceScorer::assess(
                    reference,
                    &transcription.text,
                    duration,
                )?)
            }
            None => {
                self.logger.info("Scoring as free speech");
                AssessmentReport::FreeSpeech(self.free_speech.assess(
                    &transcription.text,
                    transcription.chunks(),
                    &audio,
                    duration,
                )?)
            }
        };
        self.logger.timing("score", elapsed_ms(started));

        self.logger.metric("duration_s", duration);
        self.logger
            .metric("overall_score", report.overall_score() as f64);
        self.logger.summary();

        Ok(report)
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::shared::error::AssessmentError;
    use crate::transcription::domain::transcription::{Transcription, TranscriptionChunk};
    use crate::transcription::infrastructure::provided_transcriber::ProvidedTranscriber;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct StubAudioReader {
        segment: AudioSegment,
    }

    impl AudioReader for StubAudioReader {
        fn read_audio(&self, _: &Path) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            Ok(self.segment.clone())
        }
    }

    struct FailingAudioReader;

    impl AudioReader for FailingAudioReader {
        fn read_audio(&self, _: &Path) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            Err("not a wav file".into())
        }
    }

    /// Records the channel count of the audio it was handed.
    struct RecordingTranscriber {
        text: String,
        seen_channels: Arc<Mutex<Option<u16>>>,
    }

    impl Transcriber for RecordingTranscriber {
        fn transcribe(
            &self,
            audio: &AudioSegment,
        ) -> Result<Transcription, Box<dyn std::error::Error>> {
            *self.seen_channels.lock().unwrap() = Some(audio.channels());
            Ok(Transcription::from_text(self.text.clone()))
        }
    }

    #[derive(Default)]
    struct SharedLog {
        stages: Vec<String>,
        metrics: Vec<(String, f64)>,
    }

    struct CollectingLogger {
        log: Arc<Mutex<SharedLog>>,
    }

    impl PipelineLogger for CollectingLogger {
        fn timing(&mut self, stage: &str, _: f64) {
            self.log.lock().unwrap().stages.push(stage.to_string());
        }

        fn metric(&mut self, name: &str, value: f64) {
            self.log
                .lock()
                .unwrap()
                .metrics
                .push((name.to_string(), value));
        }

        fn info(&mut self, _: &str) {}
    }

    fn voiced_audio(seconds: f64) -> AudioSegment {
        AudioSegment::mono(vec![0.5; (seconds * 16000.0) as usize], 16000)
    }

    fn use_case(audio: AudioSegment, transcription: Transcription) -> AssessRecordingUseCase {
        AssessRecordingUseCase::new(
            Box::new(StubAudioReader { segment: audio }),
            Box::new(ProvidedTranscriber::new(transcription)),
            FreeSpeechScorer::default(),
            Box::new(NullPipelineLogger),
        )
    }

    #[test]
    fn test_reference_text_selects_reference_scoring() {
        let mut uc = use_case(
            voiced_audio(2.0),
            Transcription::from_text("the quick brown fox"),
        );
        let report = uc
            .execute(Path::new("read.wav"), Some("The quick brown fox."), Some(1.33))
            .unwrap();

        match report {
            AssessmentReport::ReferenceBased(assessment) => {
                assert_eq!(assessment.overall_score, 100);
                assert_eq!(assessment.word_level_scores.len(), 4);
            }
            other => panic!("expected reference-based report, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_reference_selects_free_speech() {
        let mut uc = use_case(
            voiced_audio(3.0),
            Transcription::from_text("I think this is good"),
        );
        let report = uc.execute(Path::new("talk.wav"), None, None).unwrap();

        assert!(matches!(report, AssessmentReport::FreeSpeech(_)));
    }

    #[test]
    fn test_blank_reference_falls_back_to_free_speech() {
        let mut uc = use_case(voiced_audio(1.0), Transcription::from_text("hello"));
        let report = uc
            .execute(Path::new("talk.wav"), Some("   "), None)
            .unwrap();

        assert!(matches!(report, AssessmentReport::FreeSpeech(_)));
    }

    #[test]
    fn test_duration_defaults_to_audio_length() {
        let mut uc = use_case(
            voiced_audio(3.0),
            Transcription::from_text("one two three four five six seven eight nine"),
        );
        let report = uc.execute(Path::new("talk.wav"), None, None).unwrap();

        let AssessmentReport::FreeSpeech(assessment) = report else {
            panic!("expected free speech report");
        };
        assert!((assessment.metrics.speech_rate - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_chunk_confidence_flows_into_free_speech() {
        let transcription = Transcription {
            text: "hello there".to_string(),
            chunks: Some(vec![TranscriptionChunk {
                text: "hello there".to_string(),
                timestamp: (0.0, 1.0),
                confidence: Some(0.5),
            }]),
        };
        let mut uc = use_case(voiced_audio(1.0), transcription);
        let report = uc.execute(Path::new("talk.wav"), None, None).unwrap();

        let AssessmentReport::FreeSpeech(assessment) = report else {
            panic!("expected free speech report");
        };
        assert!((assessment.metrics.average_confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_stereo_is_downmixed_before_transcription() {
        let seen = Arc::new(Mutex::new(None));
        let mut uc = AssessRecordingUseCase::new(
            Box::new(StubAudioReader {
                segment: AudioSegment::new(vec![0.5; 32000], 16000, 2),
            }),
            Box::new(RecordingTranscriber {
                text: "hello".to_string(),
                seen_channels: seen.clone(),
            }),
            FreeSpeechScorer::default(),
            Box::new(NullPipelineLogger),
        );
        uc.execute(Path::new("stereo.wav"), None, None).unwrap();

        assert_eq!(*seen.lock().unwrap(), Some(1));
    }

    #[test]
    fn test_stages_are_logged_in_order() {
        let log = Arc::new(Mutex::new(SharedLog::default()));
        let mut uc = AssessRecordingUseCase::new(
            Box::new(StubAudioReader {
                segment: voiced_audio(1.0),
            }),
            Box::new(ProvidedTranscriber::new(Transcription::from_text("hello"))),
            FreeSpeechScorer::default(),
            Box::new(CollectingLogger { log: log.clone() }),
        );
        let report = uc.execute(Path::new("talk.wav"), Some("hello"), None).unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.stages, vec!["read_audio", "transcribe", "score"]);
        assert!(log
            .metrics
            .contains(&("overall_score".to_string(), report.overall_score() as f64)));
    }

    #[test]
    fn test_chunk_coverage_is_logged() {
        let chunk = |start: f64, end: f64| TranscriptionChunk {
            text: "hello".to_string(),
            timestamp: (start, end),
            confidence: None,
        };
        let log = Arc::new(Mutex::new(SharedLog::default()));
        let mut uc = AssessRecordingUseCase::new(
            Box::new(StubAudioReader {
                segment: voiced_audio(3.0),
            }),
            Box::new(ProvidedTranscriber::new(Transcription {
                text: "hello hello".to_string(),
                chunks: Some(vec![chunk(0.0, 0.5), chunk(1.0, 2.25)]),
            })),
            FreeSpeechScorer::default(),
            Box::new(CollectingLogger { log: log.clone() }),
        );
        uc.execute(Path::new("talk.wav"), None, None).unwrap();

        let log = log.lock().unwrap();
        assert!(log
            .metrics
            .contains(&("chunk_coverage_s".to_string(), 1.75)));
    }

    #[test]
    fn test_reader_failure_propagates() {
        let mut uc = AssessRecordingUseCase::new(
            Box::new(FailingAudioReader),
            Box::new(ProvidedTranscriber::new(Transcription::from_text("hello"))),
            FreeSpeechScorer::default(),
            Box::new(NullPipelineLogger),
        );
        let err = uc.execute(Path::new("bad.mp3"), None, None).unwrap_err();
        assert_eq!(err.to_string(), "not a wav file");
    }

    #[test]
    fn test_invalid_duration_is_reported() {
        let mut uc = use_case(voiced_audio(1.0), Transcription::from_text("hello"));
        let err = uc
            .execute(Path::new("talk.wav"), Some("hello"), Some(-2.0))
            .unwrap_err();
        assert!(err.downcast_ref::<AssessmentError>().is_some());
    }

    #[test]
    fn test_report_serializes_with_mode_tag() {
        let mut uc = use_case(voiced_audio(1.0), Transcription::from_text("hello"));
        let report = uc
            .execute(Path::new("talk.wav"), Some("hello"), Some(0.0))
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "referenceBased");
        assert_eq!(json["overallScore"], 100);
    }
}
