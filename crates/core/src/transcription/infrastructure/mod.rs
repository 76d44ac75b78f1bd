pub mod provided_transcriber;
