use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("{context}: {message}")]
    Audio {
        context: &'static str,
        message: String,
    },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl AssessmentError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn audio(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Audio {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }
}

/// Rejects durations that would produce a misleading score.
pub(crate) fn validate_duration(duration: f64) -> Result<(), AssessmentError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(AssessmentError::invalid_argument(format!(
            "duration must be a finite, non-negative number of seconds, got {duration}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0)]
    #[case::fractional(1.33)]
    #[case::long(3600.0)]
    fn test_valid_durations_accepted(#[case] duration: f64) {
        assert!(validate_duration(duration).is_ok());
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_invalid_durations_rejected(#[case] duration: f64) {
        let err = validate_duration(duration).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidArgument { .. }));
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = AssessmentError::audio("decode wav", "unsupported bit depth");
        assert_eq!(err.to_string(), "decode wav: unsupported bit depth");
    }
}
