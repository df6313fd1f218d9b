//! Speech-recognition collaborator boundary.
//!
//! Transcription is an external capability reached over HTTP; this module
//! owns the client and the three-way failure taxonomy the rest of the
//! assistant downgrades to `NoInput`.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::RecognizerConfig;

/// Failure signals the recognition boundary can produce.
///
/// # Details
/// Callers collapse all three into the same recoverable "no input" outcome;
/// the split exists so the spoken apology can name what actually failed.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The audio reached the service but produced no usable transcript.
    #[error("speech was not intelligible")]
    Unintelligible,
    /// The transcription service could not be reached or answered abnormally.
    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The microphone or audio pipeline failed before transcription.
    #[error("audio device failure: {0}")]
    Device(String),
}

/// Converts one captured utterance of WAV audio into text.
#[async_trait]
pub trait Transcriber {
    /// Transcribes the given WAV payload.
    ///
    /// # Errors
    /// Returns a [`RecognitionError`] describing which collaborator failed.
    async fn transcribe(&self, wav: Vec<u8>) -> Result<String, RecognitionError>;
}

/// Response payload returned by the transcription service.
#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Production transcriber posting WAV audio to the recognition service.
pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl HttpTranscriber {
    /// Creates a transcriber for the configured endpoint and language.
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    /// Posts the audio and extracts the transcript from the JSON response.
    ///
    /// # Details
    /// Transport failures and 5xx answers map to `ServiceUnavailable`; a 4xx
    /// answer or an empty transcript means the service saw the audio but got
    /// nothing out of it, which maps to `Unintelligible`.
    async fn transcribe(&self, wav: Vec<u8>) -> Result<String, RecognitionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("language", self.language.as_str())])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(wav)
            .send()
            .await
            .map_err(|err| RecognitionError::ServiceUnavailable(err.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(RecognitionError::ServiceUnavailable(format!(
                "service answered {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(RecognitionError::Unintelligible);
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|err| RecognitionError::ServiceUnavailable(err.to_string()))?;
        if body.text.trim().is_empty() {
            return Err(RecognitionError::Unintelligible);
        }
        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_with_and_without_text() {
        let full: TranscriptionResponse =
            serde_json::from_str(r#"{ "text": "open vitals" }"#).unwrap();
        assert_eq!(full.text, "open vitals");

        let empty: TranscriptionResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_empty());
    }

    #[test]
    fn error_messages_name_the_failing_collaborator() {
        let service = RecognitionError::ServiceUnavailable("timed out".into());
        assert!(service.to_string().contains("service"));
        let device = RecognitionError::Device("no input device".into());
        assert!(device.to_string().contains("device"));
    }
}
