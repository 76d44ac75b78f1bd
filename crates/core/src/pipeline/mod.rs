pub mod assess_recording_use_case;
pub mod pipeline_logger;
