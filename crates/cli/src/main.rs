use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use speechcoach_core::audio::infrastructure::wav_audio_reader::WavAudioReader;
use speechcoach_core::pipeline::assess_recording_use_case::AssessRecordingUseCase;
use speechcoach_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use speechcoach_core::shared::constants::{
    MAX_CHARACTERS_MANUAL, MAX_CHARACTERS_PRACTICE, MAX_CHARACTERS_SAMPLE, MAX_WORDS_MANUAL,
    MAX_WORDS_PRACTICE, MAX_WORDS_SAMPLE, WAV_EXTENSIONS,
};
use speechcoach_core::text::domain::practice_text::{
    assess_suitability, clean_text_for_practice, default_snippet, truncate_text_at_sentence,
    validate_text, Suitability, TextProcessingOptions, TextValidation,
};
use speechcoach_core::transcription::infrastructure::provided_transcriber::ProvidedTranscriber;
use speechcoach_core::{assess_reference_based, FreeSpeechScorer, Transcription, TranscriptionChunk};

/// Pronunciation and free-speech assessment.
///
/// Text arguments accept either literal text or `@path` to read a file.
#[derive(Parser)]
#[command(name = "speechcoach")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a transcription against the text that was read aloud.
    Reference {
        /// Text the speaker was asked to read.
        #[arg(long)]
        reference: String,

        /// Transcription of the reading.
        #[arg(long)]
        transcript: String,

        /// Reading time in seconds (0 = unknown).
        #[arg(long, default_value = "0")]
        duration: f64,
    },

    /// Score a WAV recording, against a reference text if one is given.
    Assess {
        /// Recording to analyze (WAV).
        #[arg(long)]
        audio: PathBuf,

        /// Transcription of the recording.
        #[arg(long)]
        transcript: String,

        /// Text that was read aloud; omit for free speech.
        #[arg(long)]
        reference: Option<String>,

        /// JSON array of transcription chunks with optional confidence.
        #[arg(long)]
        chunks: Option<PathBuf>,

        /// Speaking time in seconds (defaults to the recording length).
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Clean and check a practice text before use.
    Validate {
        /// Practice text.
        #[arg(long)]
        text: String,

        /// Length limits to apply: practice, sample or manual.
        #[arg(long, default_value = "practice")]
        limits: String,

        /// Keep paragraph breaks.
        #[arg(long)]
        allow_empty_lines: bool,

        /// Cut over-long text at a sentence boundary instead of rejecting it.
        #[arg(long)]
        truncate: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    text: String,
    is_truncated: bool,
    summary: String,
    preview: String,
    validation: TextValidation,
    suitability: Suitability,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli.command)?;

    match cli.command {
        Command::Reference {
            reference,
            transcript,
            duration,
        } => {
            let result =
                assess_reference_based(&load_text(&reference)?, &load_text(&transcript)?, duration)?;
            print_json(&result)
        }
        Command::Assess {
            audio,
            transcript,
            reference,
            chunks,
            duration,
        } => run_assess(&audio, &transcript, reference.as_deref(), chunks.as_deref(), duration),
        Command::Validate {
            text,
            limits,
            allow_empty_lines,
            truncate,
        } => run_validate(&text, &limits, allow_empty_lines, truncate),
    }
}

fn run_assess(
    audio: &Path,
    transcript: &str,
    reference: Option<&str>,
    chunks: Option<&Path>,
    duration: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let chunks = chunks.map(load_chunks).transpose()?;
    let transcription = Transcription {
        text: load_text(transcript)?,
        chunks,
    };
    let reference = reference.map(load_text).transpose()?;

    let mut use_case = AssessRecordingUseCase::new(
        Box::new(WavAudioReader::new()),
        Box::new(ProvidedTranscriber::new(transcription)),
        FreeSpeechScorer::default(),
        Box::new(StdoutPipelineLogger::new()),
    );
    let report = use_case.execute(audio, reference.as_deref(), duration)?;
    print_json(&report)
}

fn run_validate(
    text: &str,
    limits: &str,
    allow_empty_lines: bool,
    truncate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (max_characters, max_words) = match limits {
        "sample" => (MAX_CHARACTERS_SAMPLE, MAX_WORDS_SAMPLE),
        "manual" => (MAX_CHARACTERS_MANUAL, MAX_WORDS_MANUAL),
        _ => (MAX_CHARACTERS_PRACTICE, MAX_WORDS_PRACTICE),
    };
    let options = TextProcessingOptions {
        max_characters,
        max_words,
        allow_empty_lines,
        ..TextProcessingOptions::default()
    };

    let mut cleaned = clean_text_for_practice(&load_text(text)?, &options);
    let mut is_truncated = false;
    if truncate {
        let truncated = truncate_text_at_sentence(&cleaned, options.max_characters);
        cleaned = truncated.text;
        is_truncated = truncated.is_truncated;
    }

    let validation = validate_text(&cleaned, &options);
    log::info!("{}", validation.stats);

    print_json(&ValidationReport {
        summary: validation.stats.to_string(),
        preview: default_snippet(&cleaned),
        suitability: assess_suitability(&cleaned),
        validation,
        is_truncated,
        text: cleaned,
    })
}

fn validate(command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Reference { duration, .. } => validate_duration(Some(*duration)),
        Command::Assess {
            audio,
            chunks,
            duration,
            ..
        } => {
            if !audio.exists() {
                return Err(format!("Audio file not found: {}", audio.display()).into());
            }
            if !is_wav(audio) {
                return Err(format!(
                    "Audio must be a WAV file ({}), got {}",
                    WAV_EXTENSIONS.join(", "),
                    audio.display()
                )
                .into());
            }
            if let Some(path) = chunks {
                if !path.exists() {
                    return Err(format!("Chunks file not found: {}", path.display()).into());
                }
            }
            validate_duration(*duration)
        }
        Command::Validate { limits, .. } => {
            let valid_limits = ["practice", "sample", "manual"];
            if !valid_limits.contains(&limits.as_str()) {
                return Err(format!(
                    "Limits must be one of: practice, sample, manual, got '{limits}'"
                )
                .into());
            }
            Ok(())
        }
    }
}

fn validate_duration(duration: Option<f64>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(d) = duration {
        if !d.is_finite() || d < 0.0 {
            return Err(format!("Duration must be a non-negative number of seconds, got {d}").into());
        }
    }
    Ok(())
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| WAV_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Literal text, or the contents of a file when prefixed with `@`.
fn load_text(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Cannot read text file {path}: {e}").into()),
        None => Ok(arg.to_string()),
    }
}

fn load_chunks(path: &Path) -> Result<Vec<TranscriptionChunk>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| format!("Invalid chunks file {}: {e}", path.display()).into())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
