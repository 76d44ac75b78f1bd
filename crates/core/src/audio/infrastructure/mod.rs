pub mod wav_audio_reader;
