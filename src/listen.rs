//! The Utterance Source.
//!
//! Wraps microphone capture and the transcription collaborator behind a
//! single `capture` call that never fails: every failure mode is downgraded
//! to [`Utterance::NoInput`] plus a spoken apology naming what went wrong,
//! and the dialogue engine just re-polls.

use async_trait::async_trait;
use log::{info, warn};

use crate::audio::{self, ListenSettings};
use crate::recognition::{RecognitionError, Transcriber};
use crate::speech::{Responder, Speak};

/// Apology spoken when the audio produced no usable transcript.
const APOLOGY_UNINTELLIGIBLE: &str = "I didn't catch that. Could you please repeat?";

/// Apology spoken when the recognition service is unreachable.
const APOLOGY_SERVICE: &str = "I'm having trouble with my speech recognition service.";

/// Apology spoken for any other microphone or device failure.
const APOLOGY_DEVICE: &str = "Something went wrong with the microphone. Please try again.";

/// Why a capture produced no input.
///
/// Dispatch never branches on this; it exists so tests and logs can tell the
/// three collapsed failure modes apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoInputReason {
    Unintelligible,
    ServiceUnavailable,
    Device,
}

/// One normalized unit of spoken input for a single turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Utterance {
    /// A lowercased, trimmed transcript.
    Heard(String),
    /// Nothing usable was captured this turn.
    NoInput(NoInputReason),
}

impl Utterance {
    /// Returns the transcript, or `None` when nothing was captured.
    pub fn text(&self) -> Option<&str> {
        match self {
            Utterance::Heard(text) => Some(text),
            Utterance::NoInput(_) => None,
        }
    }
}

/// Source of one utterance per dialogue turn.
#[async_trait]
pub trait UtteranceSource {
    /// Blocks until one utterance is acquired or a failure is downgraded.
    async fn capture(&mut self) -> Utterance;
}

/// Production source: microphone capture plus the transcription service.
pub struct MicSource<T> {
    transcriber: T,
    responder: Responder,
    settings: ListenSettings,
}

impl<T> MicSource<T> {
    /// Creates a source from its collaborators.
    ///
    /// # Arguments
    /// * `transcriber` - The speech-recognition collaborator.
    /// * `responder` - Used to voice the per-failure apologies.
    /// * `settings` - Calibration window and pause threshold per listen.
    pub fn new(transcriber: T, responder: Responder, settings: ListenSettings) -> Self {
        Self {
            transcriber,
            responder,
            settings,
        }
    }
}

impl<T: Transcriber + Send + Sync> MicSource<T> {
    /// Records one utterance and hands it to the transcription service.
    async fn acquire(&self) -> Result<String, RecognitionError> {
        let samples = audio::listen(&self.settings)
            .map_err(|err| RecognitionError::Device(err.to_string()))?;
        let wav = audio::encode_wav(&samples)
            .map_err(|err| RecognitionError::Device(err.to_string()))?;
        info!("Recognizing...");
        self.transcriber.transcribe(wav).await
    }
}

#[async_trait]
impl<T: Transcriber + Send + Sync> UtteranceSource for MicSource<T> {
    async fn capture(&mut self) -> Utterance {
        info!("Listening...");
        let result = self.acquire().await;
        interpret_transcription(result, &self.responder)
    }
}

/// Normalizes a transcription outcome into an [`Utterance`].
///
/// # Details
/// Success lowercases and trims the transcript and echoes it to stdout; every
/// failure speaks the apology matching its kind and collapses to `NoInput`.
/// An empty transcript counts as unintelligible.
fn interpret_transcription(
    result: Result<String, RecognitionError>,
    voice: &impl Speak,
) -> Utterance {
    match result {
        Ok(raw) => {
            let text = raw.trim().to_lowercase();
            if text.is_empty() {
                voice.say(APOLOGY_UNINTELLIGIBLE);
                return Utterance::NoInput(NoInputReason::Unintelligible);
            }
            println!("You just said: {}", text);
            Utterance::Heard(text)
        }
        Err(RecognitionError::Unintelligible) => {
            voice.say(APOLOGY_UNINTELLIGIBLE);
            Utterance::NoInput(NoInputReason::Unintelligible)
        }
        Err(RecognitionError::ServiceUnavailable(err)) => {
            warn!("Recognition service failure: {}", err);
            voice.say(APOLOGY_SERVICE);
            Utterance::NoInput(NoInputReason::ServiceUnavailable)
        }
        Err(RecognitionError::Device(err)) => {
            warn!("Audio capture failure: {}", err);
            voice.say(APOLOGY_DEVICE);
            Utterance::NoInput(NoInputReason::Device)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingVoice {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingVoice {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Speak for RecordingVoice {
        fn say(&self, text: &str) {
            self.lines.lock().unwrap().push(text.to_string());
        }
    }

    #[test]
    fn transcript_is_normalized_without_apology() {
        let voice = RecordingVoice::default();
        let utterance = interpret_transcription(Ok("  Open VITALS  ".to_string()), &voice);
        assert_eq!(utterance, Utterance::Heard("open vitals".to_string()));
        assert!(voice.lines().is_empty());
    }

    #[test]
    fn empty_transcript_counts_as_unintelligible() {
        let voice = RecordingVoice::default();
        let utterance = interpret_transcription(Ok("   ".to_string()), &voice);
        assert_eq!(utterance, Utterance::NoInput(NoInputReason::Unintelligible));
        assert_eq!(voice.lines(), vec![APOLOGY_UNINTELLIGIBLE.to_string()]);
    }

    #[test]
    fn each_failure_kind_gets_its_own_apology() {
        let cases = [
            (
                RecognitionError::Unintelligible,
                NoInputReason::Unintelligible,
                APOLOGY_UNINTELLIGIBLE,
            ),
            (
                RecognitionError::ServiceUnavailable("down".into()),
                NoInputReason::ServiceUnavailable,
                APOLOGY_SERVICE,
            ),
            (
                RecognitionError::Device("no mic".into()),
                NoInputReason::Device,
                APOLOGY_DEVICE,
            ),
        ];
        for (error, reason, apology) in cases {
            let voice = RecordingVoice::default();
            let utterance = interpret_transcription(Err(error), &voice);
            assert_eq!(utterance, Utterance::NoInput(reason));
            assert_eq!(voice.lines(), vec![apology.to_string()]);
        }
    }

    #[test]
    fn apologies_are_distinct_per_failure_kind() {
        assert_ne!(APOLOGY_UNINTELLIGIBLE, APOLOGY_SERVICE);
        assert_ne!(APOLOGY_SERVICE, APOLOGY_DEVICE);
        assert_ne!(APOLOGY_UNINTELLIGIBLE, APOLOGY_DEVICE);
    }

    #[test]
    fn no_input_has_no_text() {
        assert_eq!(Utterance::NoInput(NoInputReason::Device).text(), None);
        assert_eq!(
            Utterance::Heard("hello".to_string()).text(),
            Some("hello")
        );
    }
}
