//! Runtime configuration.
//!
//! Every field has a baked default, so a missing or unparsable `config.json`
//! degrades to the stock setup instead of failing startup. Environment
//! variables override the file for the values that differ between machines.

use std::{env, fs, time::Duration};

use log::warn;
use serde::Deserialize;

/// Path to the JSON configuration file that holds runtime defaults.
const CONFIG_PATH: &str = "config.json";

/// Dashboard served by the web frontend when nothing is configured.
const FALLBACK_DASHBOARD_URL: &str = "http://localhost:5173";

/// Local speech-recognition service endpoint used when nothing is configured.
const FALLBACK_RECOGNIZER_URL: &str = "http://localhost:8085/transcribe";

/// Recognition language passed to the transcription service.
const FALLBACK_LANGUAGE: &str = "en-in";

/// Seconds of trailing silence that end an utterance.
const FALLBACK_PAUSE_THRESHOLD_SECS: f32 = 2.0;

/// Seconds of ambient noise sampled before each listen.
const FALLBACK_CALIBRATION_SECS: f32 = 1.0;

/// Strongly typed representation of `config.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL of the healthcare dashboard.
    #[serde(default = "fallback_dashboard_url")]
    pub dashboard_url: String,
    /// Speech-recognition collaborator settings.
    #[serde(default)]
    pub recognizer: RecognizerConfig,
}

/// Settings for the external speech-recognition collaborator.
#[derive(Clone, Debug, Deserialize)]
pub struct RecognizerConfig {
    /// Transcription endpoint the captured audio is posted to.
    #[serde(default = "fallback_recognizer_url")]
    pub endpoint: String,
    /// Recognition language tag.
    #[serde(default = "fallback_language")]
    pub language: String,
    /// Trailing silence, in seconds, that ends an utterance.
    #[serde(default = "fallback_pause_threshold")]
    pub pause_threshold_secs: f32,
    /// Ambient-noise calibration window, in seconds.
    #[serde(default = "fallback_calibration")]
    pub calibration_secs: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dashboard_url: fallback_dashboard_url(),
            recognizer: RecognizerConfig::default(),
        }
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: fallback_recognizer_url(),
            language: fallback_language(),
            pause_threshold_secs: fallback_pause_threshold(),
            calibration_secs: fallback_calibration(),
        }
    }
}

impl RecognizerConfig {
    /// Pause threshold as a [`Duration`]; negative values clamp to zero.
    pub fn pause_threshold(&self) -> Duration {
        Duration::from_secs_f32(self.pause_threshold_secs.max(0.0))
    }

    /// Calibration window as a [`Duration`]; negative values clamp to zero.
    pub fn calibration(&self) -> Duration {
        Duration::from_secs_f32(self.calibration_secs.max(0.0))
    }
}

/// Loads configuration from `config.json`, then applies env overrides.
///
/// # Details
/// A missing or invalid file is logged and replaced by the baked defaults so
/// the assistant always starts. `VOCALCARE_DASHBOARD_URL`,
/// `VOCALCARE_RECOGNIZER_URL` and `VOCALCARE_LANGUAGE` take precedence over
/// the file when set.
///
/// # Returns
/// * `AppConfig` - The effective configuration.
pub fn load_app_config() -> AppConfig {
    let mut config = read_config_file();
    apply_env_overrides(&mut config);
    config
}

fn read_config_file() -> AppConfig {
    match fs::read_to_string(CONFIG_PATH) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Config parse error ({}): {}", CONFIG_PATH, err);
                AppConfig::default()
            }
        },
        Err(err) => {
            warn!("Config load error ({}): {}", CONFIG_PATH, err);
            AppConfig::default()
        }
    }
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = env::var("VOCALCARE_DASHBOARD_URL") {
        config.dashboard_url = url;
    }
    if let Ok(url) = env::var("VOCALCARE_RECOGNIZER_URL") {
        config.recognizer.endpoint = url;
    }
    if let Ok(language) = env::var("VOCALCARE_LANGUAGE") {
        config.recognizer.language = language;
    }
}

fn fallback_dashboard_url() -> String {
    FALLBACK_DASHBOARD_URL.to_string()
}

fn fallback_recognizer_url() -> String {
    FALLBACK_RECOGNIZER_URL.to_string()
}

fn fallback_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}

fn fallback_pause_threshold() -> f32 {
    FALLBACK_PAUSE_THRESHOLD_SECS
}

fn fallback_calibration() -> f32 {
    FALLBACK_CALIBRATION_SECS
}
