//! Text-to-speech Responder.
//!
//! The printed text is the guaranteed channel: every utterance is echoed to
//! stdout as `AI: …` so a headless run stays observable, and the audio
//! rendering on top of it is strictly best-effort.

use std::process::Command;
use std::sync::Mutex;

use anyhow::Result;
use log::warn;

/// Speaking seam used by the dialogue engine and the collaborator wrappers.
pub trait Speak {
    /// Renders the text, side-effect only. Must never fail.
    fn say(&self, text: &str);
}

/// Production responder backed by the platform speech command.
#[derive(Clone, Copy, Debug, Default)]
pub struct Responder;

impl Responder {
    /// Creates a responder. Construct once at startup and pass it around.
    pub fn new() -> Self {
        Self
    }
}

impl Speak for Responder {
    /// Prints the text unconditionally, then attempts audio rendering.
    ///
    /// # Parameters
    /// * `text` - The utterance to render.
    fn say(&self, text: &str) {
        println!("AI: {}", text);
        if let Err(err) = synthesize(text) {
            warn!("Speech synthesis failed: {}", err);
        }
    }
}

/// Synthesizes the given text through the platform speech command.
///
/// # Errors
/// Returns an error if the text is empty or the command fails to spawn.
fn synthesize(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Cannot synthesize empty text");
    }
    run_speech_command(text)?;
    Ok(())
}

fn run_speech_command(text: &str) -> Result<()> {
    if cfg!(test) {
        if *FORCE_ERROR.lock().unwrap() {
            anyhow::bail!("Forced failure for testing");
        }
        return Ok(());
    }

    speech_command(text).output()?;
    Ok(())
}

/// Builds the per-platform speech command.
fn speech_command(text: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("say");
        cmd.arg(text);
        cmd
    } else if cfg!(target_os = "windows") {
        let script = format!(
            "Add-Type -AssemblyName System.Speech; \
             (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
            text.replace('\'', "''")
        );
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-Command", &script]);
        cmd
    } else {
        let mut cmd = Command::new("espeak");
        cmd.arg(text);
        cmd
    }
}

#[cfg_attr(not(test), allow(dead_code))]
static FORCE_ERROR: Mutex<bool> = Mutex::new(false);

#[cfg(test)]
mod tests {
    use super::*;

    static FORCE_ERROR_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn synthesize_succeeds_with_text() {
        let _guard = FORCE_ERROR_LOCK.lock().unwrap();
        assert!(synthesize("Hello test").is_ok());
    }

    #[test]
    fn synthesize_fails_when_forced() {
        let _guard = FORCE_ERROR_LOCK.lock().unwrap();
        *FORCE_ERROR.lock().unwrap() = true;
        let result = synthesize("failure case");
        *FORCE_ERROR.lock().unwrap() = false;
        assert!(result.is_err());
    }

    #[test]
    fn synthesize_rejects_empty_text() {
        assert!(synthesize("   ").is_err());
    }

    #[test]
    fn say_swallows_rendering_failure() {
        let _guard = FORCE_ERROR_LOCK.lock().unwrap();
        *FORCE_ERROR.lock().unwrap() = true;
        Responder::new().say("still observable");
        *FORCE_ERROR.lock().unwrap() = false;
    }
}
