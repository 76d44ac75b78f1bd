pub mod filler_detector;
pub mod free_speech_assessment;
pub mod free_speech_scorer;
pub mod reference_assessment;
pub mod reference_scorer;
