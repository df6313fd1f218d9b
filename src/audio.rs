/*
 * @file audio.rs
 * @brief Microphone capture and WAV helpers for VocalCare
 * @author VocalCare Developers
 * @date 2026
 *
 * MIT License
 *
 * Copyright (c) 2026 VocalCare Developers
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Microphone capture and WAV encoding.
//!
//! One `listen` call samples ambient noise to calibrate a speech threshold,
//! waits for speech onset, and records until the configured pause threshold
//! of trailing silence. End-of-speech timing lives entirely in this module;
//! the dialogue engine just blocks on the call.

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig, StreamError};
use hound::{WavSpec, WavWriter};
use log::{debug, warn};

/// Sample rate for audio recording (16kHz).
///
/// Matches what speech-recognition services prefer as input.
const SAMPLE_RATE: u32 = 16000;

/// Number of audio channels (mono).
const CHANNELS: u16 = 1;

/// Bits per sample for WAV encoding.
const BITS_PER_SAMPLE: u16 = 16;

/// Interval between reads of the capture buffer while listening.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Hard ceiling on a single utterance; the pause threshold normally ends the
/// recording long before this fires.
const MAX_UTTERANCE: Duration = Duration::from_secs(15);

/// Minimum RMS amplitude considered speech.
///
/// Values much above ~300 miss normal speaking levels on some microphones,
/// so the floor stays low and the recognition service filters the rest.
const MIN_SPEECH_RMS: f32 = 150.0;

/// Margin applied to the calibrated ambient noise floor.
const NOISE_MARGIN: f32 = 2.5;

/// Per-listen tuning handed down from the recognizer configuration.
#[derive(Clone, Copy, Debug)]
pub struct ListenSettings {
    /// How long to sample ambient noise before listening.
    pub calibration: Duration,
    /// Trailing silence that ends the utterance.
    pub pause_threshold: Duration,
}

/// Captures one utterance from the default input device.
///
/// # Details
/// Opens the input stream, calibrates the speech threshold against the
/// ambient noise floor, waits for speech onset (indefinitely; there is no
/// caller-imposed timeout), then records until `pause_threshold` of trailing
/// silence or the utterance ceiling.
///
/// # Arguments
/// * `settings` - Calibration window and pause threshold for this listen.
///
/// # Returns
/// * `Vec<i16>` - The captured 16-bit PCM samples.
///
/// # Errors
/// Returns an error if no input device is available or the stream cannot be
/// created or started.
pub fn listen(settings: &ListenSettings) -> Result<Vec<i16>> {
    let device = default_input_device()?;
    let config = input_config();
    let samples = shared_samples();
    let stream = build_input_stream(&device, &config, samples.clone())?;
    stream.play()?;

    let threshold = calibrate(&samples, settings.calibration);
    debug!("Calibrated speech threshold at RMS {:.0}", threshold);
    let captured = record_utterance(&samples, threshold, settings.pause_threshold);
    drop(stream);
    Ok(captured)
}

/// Encodes PCM samples as an in-memory mono 16 kHz WAV payload.
///
/// # Arguments
/// * `samples` - Slice of signed 16-bit PCM audio frames.
///
/// # Returns
/// * `Vec<u8>` - The complete WAV file bytes.
///
/// # Errors
/// Returns an error if WAV serialization fails.
pub fn encode_wav(samples: &[i16]) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Root-mean-square amplitude of a sample window.
pub fn rms(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let energy = samples
        .iter()
        .map(|sample| (*sample as f32).powi(2))
        .sum::<f32>()
        / samples.len() as f32;
    energy.sqrt()
}

/// Derives the speech threshold from a measured ambient noise floor.
fn threshold_from_floor(floor: f32) -> f32 {
    (floor * NOISE_MARGIN).max(MIN_SPEECH_RMS)
}

/// Samples ambient noise for the calibration window and derives the speech
/// threshold. The calibration audio is discarded afterwards.
fn calibrate(samples: &Arc<Mutex<Vec<i16>>>, window: Duration) -> f32 {
    std::thread::sleep(window);
    let mut guard = samples.lock().unwrap();
    let floor = rms(&guard);
    guard.clear();
    threshold_from_floor(floor)
}

/// Waits for speech onset, then records until the pause threshold fires.
fn record_utterance(
    samples: &Arc<Mutex<Vec<i16>>>,
    threshold: f32,
    pause_threshold: Duration,
) -> Vec<i16> {
    let mut scanned = 0usize;

    // Speech onset: block until a polling window crosses the threshold.
    loop {
        std::thread::sleep(POLL_INTERVAL);
        if poll_level(samples, &mut scanned) >= threshold {
            break;
        }
    }

    let started = Instant::now();
    let mut last_voice = Instant::now();
    loop {
        std::thread::sleep(POLL_INTERVAL);
        if poll_level(samples, &mut scanned) >= threshold {
            last_voice = Instant::now();
        }
        if last_voice.elapsed() >= pause_threshold || started.elapsed() >= MAX_UTTERANCE {
            break;
        }
    }

    samples.lock().unwrap().clone()
}

/// Measures the RMS level of the samples that arrived since the last poll.
fn poll_level(samples: &Arc<Mutex<Vec<i16>>>, scanned: &mut usize) -> f32 {
    let guard = samples.lock().unwrap();
    let level = rms(&guard[*scanned..]);
    *scanned = guard.len();
    level
}

/// Locates the system default input device.
///
/// # Errors
/// Returns an error when the user has no available microphone.
fn default_input_device() -> Result<Device> {
    cpal::default_host()
        .default_input_device()
        .ok_or_else(|| anyhow::anyhow!("No input device"))
}

/// Builds the stream configuration used by the recorder: mono audio, a
/// 16 kHz sample rate, and a default buffer.
fn input_config() -> StreamConfig {
    StreamConfig {
        channels: CHANNELS,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    }
}

/// Creates the shared buffer that accumulates captured samples.
fn shared_samples() -> Arc<Mutex<Vec<i16>>> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Builds and configures the input stream.
///
/// # Parameters
/// * `device` - The input device to capture from.
/// * `config` - The stream configuration (channels/rate/buffer).
/// * `samples` - Shared buffer that receives converted samples.
///
/// # Errors
/// Returns any stream-construction issues wrapped in [`anyhow::Error`].
fn build_input_stream(
    device: &Device,
    config: &StreamConfig,
    samples: Arc<Mutex<Vec<i16>>>,
) -> Result<Stream> {
    let shared = samples.clone();
    device
        .build_input_stream(
            config,
            move |data: &[f32], _: &_| push_samples(&shared, data),
            log_stream_error,
            None,
        )
        .map_err(|err| anyhow::anyhow!(err))
}

/// Converts floating-point frames into 16-bit PCM and appends them to the
/// shared buffer.
fn push_samples(buffer: &Arc<Mutex<Vec<i16>>>, data: &[f32]) {
    let mut guard = buffer.lock().unwrap();
    for &sample in data {
        guard.push((sample * i16::MAX as f32) as i16);
    }
}

/// Logs recoverable stream errors emitted by the audio backend.
fn log_stream_error(error: StreamError) {
    warn!("Audio stream error: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_config_matches_constants() {
        let config = input_config();
        assert_eq!(config.channels, CHANNELS);
        assert_eq!(config.sample_rate.0, SAMPLE_RATE);
    }

    #[test]
    fn rms_of_silence_is_zero() {
        assert_eq!(rms(&[]), 0.0);
        assert_eq!(rms(&[0_i16; 1600]), 0.0);
    }

    #[test]
    fn rms_grows_with_amplitude() {
        let quiet = vec![50_i16; 1600];
        let loud = vec![i16::MAX / 2; 1600];
        assert!(rms(&loud) > rms(&quiet));
    }

    #[test]
    fn threshold_never_drops_below_the_floor() {
        assert_eq!(threshold_from_floor(0.0), MIN_SPEECH_RMS);
        assert!(threshold_from_floor(500.0) > MIN_SPEECH_RMS);
    }

    #[test]
    fn push_samples_converts_floats() {
        let samples = shared_samples();
        push_samples(&samples, &[0.0, 0.5, -1.0]);
        let guard = samples.lock().unwrap();
        assert_eq!(guard.len(), 3);
        assert_eq!(guard[0], 0);
        assert!(guard[1] > 0);
        assert!(guard[2] < 0);
    }

    #[test]
    fn encode_wav_produces_a_riff_payload() {
        let samples = vec![0_i16, i16::MAX / 4, -i16::MAX / 4];
        let wav = encode_wav(&samples).expect("encode wav");
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 44-byte canonical header plus two bytes per sample.
        assert_eq!(wav.len(), 44 + samples.len() * 2);
    }
}
