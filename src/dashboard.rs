/*
 * @file dashboard.rs
 * @brief Browser navigation to the healthcare dashboard
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

//! Dashboard navigation.
//!
//! The dashboard itself is an external web UI; this module only builds the
//! URL and asks the platform opener to launch it. Every call issues a fresh
//! launch request, there is no dedup and no verification that the dashboard
//! actually responds.

use std::process::Command;
use std::time::Duration;

use anyhow::Result;
use log::warn;

use crate::intent::Section;
use crate::speech::{Responder, Speak};

/// Fixed wait after a launch so the external browser has time to load.
const BROWSER_LOAD_DELAY: Duration = Duration::from_secs(1);

/// Apology spoken when the launch collaborator fails.
const LAUNCH_FAILURE_APOLOGY: &str =
    "I couldn't open the healthcare dashboard. Please make sure it's running.";

/// Navigation seam used by the dialogue engine.
pub trait Navigate {
    /// Opens the dashboard, optionally at a section. Returns whether the
    /// launch request was issued successfully.
    fn open(&self, section: Option<Section>) -> bool;
}

/// Production navigator launching the platform URL opener.
pub struct DashboardNavigator {
    base_url: String,
    responder: Responder,
}

impl DashboardNavigator {
    /// Creates a navigator for the configured dashboard base URL.
    pub fn new(base_url: impl Into<String>, responder: Responder) -> Self {
        Self {
            base_url: base_url.into(),
            responder,
        }
    }
}

impl Navigate for DashboardNavigator {
    /// Launches the dashboard URL and speaks a confirmation or apology.
    ///
    /// # Details
    /// On launch failure the apology is spoken and `false` returned; the
    /// caller takes no corrective action beyond that. On success the
    /// confirmation names the section (or stays generic), then a fixed short
    /// delay lets the browser load before the next turn starts.
    fn open(&self, section: Option<Section>) -> bool {
        let url = section_url(&self.base_url, section);
        if let Err(err) = launch_browser(&url) {
            warn!("Browser launch failed for {}: {}", url, err);
            self.responder.say(LAUNCH_FAILURE_APOLOGY);
            return false;
        }
        match section {
            Some(section) => self.responder.say(&format!(
                "Opening the {} section in your healthcare dashboard.",
                section.label()
            )),
            None => self.responder.say("Opening your healthcare dashboard."),
        }
        std::thread::sleep(BROWSER_LOAD_DELAY);
        true
    }
}

/// Builds the dashboard URL for an optional section.
///
/// # Details
/// The section token is appended verbatim as a query value; it is not
/// percent-encoded beyond what the opener does implicitly and not checked
/// against the dashboard's real routes.
pub fn section_url(base_url: &str, section: Option<Section>) -> String {
    match section {
        Some(section) => format!("{}?section={}", base_url, section.token()),
        None => base_url.to_string(),
    }
}

/// Asks the platform opener to launch the URL.
///
/// # Errors
/// Returns an error if the opener cannot be spawned or exits unsuccessfully.
fn launch_browser(url: &str) -> Result<()> {
    let status = opener_command(url).status()?;
    if !status.success() {
        anyhow::bail!("opener exited with {}", status);
    }
    Ok(())
}

/// Builds the per-platform URL opener command.
fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5173";

    #[test]
    fn bare_url_without_section() {
        assert_eq!(section_url(BASE, None), "http://localhost:5173");
    }

    #[test]
    fn section_is_appended_as_query_value() {
        assert_eq!(
            section_url(BASE, Some(Section::Vitals)),
            "http://localhost:5173?section=vitals"
        );
        assert_eq!(
            section_url(BASE, Some(Section::CancerModule)),
            "http://localhost:5173?section=cancer_module"
        );
    }

    #[test]
    fn url_building_is_idempotent() {
        // Two navigations to the same section issue two identical URLs;
        // nothing is cached or deduplicated at this layer.
        let first = section_url(BASE, Some(Section::Vitals));
        let second = section_url(BASE, Some(Section::Vitals));
        assert_eq!(first, second);
    }
}
