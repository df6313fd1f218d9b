/*
 * @file lib.rs
 * @brief VocalCare library root
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

//! VocalCare - a voice-driven assistant for a healthcare dashboard.
//!
//! The assistant runs a turn-based dialogue loop:
//! - the microphone and an external transcription service produce utterances,
//! - a fixed, ordered keyword table classifies each utterance into an intent,
//! - dispatch speaks a canned response, opens a dashboard section in the
//!   browser, or enters the cancer-information sub-dialogue,
//! - the loop ends only when the user says goodbye.
//!
//! # Example
//! ```no_run
//! use anyhow::Result;
//! use vocalcare::assistant;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     dotenv::dotenv().ok();
//!     env_logger::init();
//!     assistant::run_assistant().await
//! }
//! ```

pub mod assistant;
pub mod audio;
pub mod config;
pub mod dashboard;
pub mod intent;
pub mod listen;
pub mod phrases;
pub mod recognition;
pub mod speech;
