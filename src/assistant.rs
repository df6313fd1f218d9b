/*
 * @file assistant.rs
 * @brief Implementation of VocalCare's dialogue engine
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

//! The dialogue engine.
//!
//! One turn loop serves both dialogue states: each turn captures an
//! utterance, classifies it under the vocabulary the current state selects,
//! dispatches the resulting intent, and paces itself with a short sleep.
//! The cancer module is a nested conversational mode, entered and left by
//! flipping [`DialogueState`]; its exit returns control to the outer
//! dialogue rather than terminating the process.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use log::warn;

use crate::audio::ListenSettings;
use crate::config;
use crate::dashboard::{DashboardNavigator, Navigate};
use crate::intent::{classify_module, classify_outer, Intent, ModuleIntent, Section};
use crate::listen::{MicSource, UtteranceSource};
use crate::phrases;
use crate::recognition::HttpTranscriber;
use crate::speech::{Responder, Speak};

/// Delay inserted between turns, purely to bound polling frequency.
const TURN_DELAY: Duration = Duration::from_millis(100);

const GREETING: &str =
    "Hello! I am VocalCare, your healthcare assistant. How can I help you today?";

const FAREWELL: &str = "Goodbye! Remember to take care of your health and wellbeing.";

const CLARIFY_QUESTION: &str =
    "I'm not sure how to help with that. Would you like me to open your healthcare dashboard?";

const SCANNER_NOTICE: &str =
    "Opening medication scanner. Please place the pill in view of your camera.";

const IDENTIFY_NOTICE: &str =
    "Opening medication identification tool. I'll help you identify your pills.";

const SIDE_EFFECT_WARNING: &str =
    "If you're experiencing side effects from your medication, please consult with your healthcare provider.";

const NAME_LINE: &str = "I am VocalCare, your healthcare assistant.";

const CREATOR_LINE: &str = "I was created to help you manage your healthcare information.";

const THANKS_REPLY: &str = "You're welcome! Your health is my priority.";

const HELP_LINE: &str = "You can ask me to navigate to different sections of your healthcare \
    dashboard, like medication, therapy, vitals, or overview. I can also scan pills, provide \
    health tips and medication reminders.";

const MODULE_ANNOUNCEMENT: &str = "Opening the cancer module. Please wait. You can ask me \
    about types of cancer, symptoms, treatments, or prevention tips, or ask for a case summary.";

const MODULE_WELCOME: &str = "Welcome to the Cancer Module. How can I assist you today?";

const MODULE_MENU: &str = "You can ask me about types of cancer, symptoms, treatments, or \
    prevention tips. Say 'exit' to leave the cancer module.";

const MODULE_EXIT_LINE: &str =
    "Exiting the cancer module. Let me know if you need further assistance.";

const MODULE_UNCLEAR_LINE: &str =
    "I'm not sure how to help with that. Could you please rephrase or ask something else?";

const CANCER_TYPES_LINE: &str = "There are many types of cancer, including breast cancer, \
    lung cancer, prostate cancer, skin cancer, and leukemia. Which one would you like to know \
    more about?";

const CANCER_IMAGES_LINE: &str = "Here are some images related to cancer types.";

const CANCER_SYMPTOMS_LINE: &str = "Cancer symptoms vary depending on the type, but common \
    signs include unexplained weight loss, persistent fatigue, lumps or swelling, and changes \
    in skin or moles. Please consult a doctor for a proper diagnosis.";

const CANCER_TREATMENTS_LINE: &str = "Cancer treatments include surgery, chemotherapy, \
    radiation therapy, immunotherapy, and targeted therapy. The best treatment depends on the \
    type and stage of cancer.";

const CANCER_PREVENTION_LINE: &str = "To reduce your risk of cancer, avoid smoking, maintain \
    a healthy diet, exercise regularly, limit alcohol consumption, and protect your skin from \
    the sun.";

const CASE_DETAILS_PROMPT: &str =
    "Please provide the details of the case you would like to summarize.";

/// Which intent vocabulary is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueState {
    Outer,
    InCancerModule,
}

/// The turn-based dialogue engine.
///
/// # Details
/// Owns its three collaborators for the whole session. Generic over the
/// collaborator seams so the loop can be driven by scripted stand-ins in
/// tests; production wiring lives in [`run_assistant`].
pub struct Assistant<S, V, N> {
    source: S,
    voice: V,
    navigator: N,
    state: DialogueState,
}

/// Builds the production collaborators from configuration and runs the
/// assistant until the user says goodbye.
///
/// # Errors
/// Propagates only startup failures; everything inside the loop recovers.
pub async fn run_assistant() -> Result<()> {
    let config = config::load_app_config();
    let responder = Responder::new();
    let settings = ListenSettings {
        calibration: config.recognizer.calibration(),
        pause_threshold: config.recognizer.pause_threshold(),
    };
    let source = MicSource::new(HttpTranscriber::new(&config.recognizer), responder, settings);
    let navigator = DashboardNavigator::new(config.dashboard_url.clone(), responder);
    Assistant::new(source, responder, navigator).run().await
}

impl<S, V, N> Assistant<S, V, N>
where
    S: UtteranceSource + Send,
    V: Speak,
    N: Navigate,
{
    /// Creates an engine starting in the outer dialogue.
    pub fn new(source: S, voice: V, navigator: N) -> Self {
        Self {
            source,
            voice,
            navigator,
            state: DialogueState::Outer,
        }
    }

    /// Runs turns until a terminal intent is dispatched.
    ///
    /// # Returns
    /// `Ok(())` once the user has been told goodbye.
    pub async fn run(&mut self) -> Result<()> {
        self.greet();
        while self.process_turn().await? {}
        Ok(())
    }

    /// Speaks the greeting and prints the usage hints once at startup.
    fn greet(&self) {
        self.voice.say(GREETING);
        println!("You can ask me to navigate to different sections of your healthcare dashboard.");
        println!("Try saying: 'open medication tracker', 'I need therapy', or 'show my health overview'");
        println!("To stop the program at anytime, say 'stop' or 'exit'.");
    }

    /// Executes one capture-classify-dispatch turn.
    ///
    /// # Returns
    /// * `Ok(true)` to keep looping, `Ok(false)` after the farewell.
    async fn process_turn(&mut self) -> Result<bool> {
        if self.state == DialogueState::InCancerModule {
            self.voice.say(MODULE_MENU);
        }
        let utterance = self.source.capture().await;
        let keep_going = match utterance.text() {
            // Silence and failures never dispatch; re-poll without nagging.
            Some(text) if !text.is_empty() => match self.state {
                DialogueState::Outer => self.dispatch_outer(classify_outer(text)).await,
                DialogueState::InCancerModule => self.dispatch_module(classify_module(text)),
            },
            _ => true,
        };
        if keep_going {
            tokio::time::sleep(TURN_DELAY).await;
        }
        Ok(keep_going)
    }

    /// Dispatches an outer-dialogue intent.
    ///
    /// # Returns
    /// `false` only for [`Intent::Terminate`].
    async fn dispatch_outer(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::OpenDashboard(section) => {
                self.navigator.open(section);
            }
            Intent::ScanMedication => {
                self.navigator.open(Some(Section::Medication));
                self.voice.say(SCANNER_NOTICE);
            }
            Intent::IdentifyMedication => {
                self.navigator.open(Some(Section::Medication));
                self.voice.say(IDENTIFY_NOTICE);
            }
            Intent::TellMedicationReminder => {
                self.voice.say(phrases::pick(phrases::MEDICATION_REMINDERS));
            }
            Intent::SideEffectWarning => self.voice.say(SIDE_EFFECT_WARNING),
            Intent::StateName => self.voice.say(NAME_LINE),
            Intent::StateCreator => self.voice.say(CREATOR_LINE),
            Intent::TellTime => self.voice.say(&spoken_time(Local::now())),
            Intent::TellJoke => self.voice.say(phrases::pick(phrases::JOKES)),
            Intent::TellFact => self.voice.say(phrases::pick(phrases::HEALTH_FACTS)),
            Intent::Thanks => self.voice.say(THANKS_REPLY),
            Intent::Help => self.voice.say(HELP_LINE),
            Intent::EnterCancerModule => self.enter_cancer_module(),
            Intent::Unclear => self.clarify().await,
            Intent::Terminate => {
                self.voice.say(FAREWELL);
                return false;
            }
        }
        true
    }

    /// Dispatches a cancer-module intent.
    ///
    /// # Returns
    /// Always `true`; leaving the module pops back to the outer dialogue
    /// instead of terminating.
    fn dispatch_module(&mut self, intent: ModuleIntent) -> bool {
        match intent {
            ModuleIntent::ListCancerTypes => self.voice.say(CANCER_TYPES_LINE),
            ModuleIntent::ShowCancerImages => self.voice.say(CANCER_IMAGES_LINE),
            ModuleIntent::SummarizeCase => self.summarize_case(),
            ModuleIntent::ListSymptoms => self.voice.say(CANCER_SYMPTOMS_LINE),
            ModuleIntent::ListTreatments => self.voice.say(CANCER_TREATMENTS_LINE),
            ModuleIntent::ListPrevention => self.voice.say(CANCER_PREVENTION_LINE),
            ModuleIntent::ExitModule => {
                self.voice.say(MODULE_EXIT_LINE);
                self.navigator.open(Some(Section::Overview));
                self.state = DialogueState::Outer;
            }
            ModuleIntent::Unclear => self.voice.say(MODULE_UNCLEAR_LINE),
        }
        true
    }

    /// Announces and enters the cancer module.
    fn enter_cancer_module(&mut self) {
        self.voice.say(MODULE_ANNOUNCEMENT);
        self.navigator.open(Some(Section::CancerModule));
        self.voice.say(MODULE_WELCOME);
        self.state = DialogueState::InCancerModule;
    }

    /// Asks the clarifying question and captures exactly one follow-up.
    ///
    /// An affirmative follow-up opens the dashboard with no section; anything
    /// else (including another failure) drops back into the normal loop.
    async fn clarify(&mut self) {
        self.voice.say(CLARIFY_QUESTION);
        let reply = self.source.capture().await;
        if reply.text().is_some_and(is_affirmative) {
            self.navigator.open(None);
        }
    }

    /// Solicits free-text case details and acknowledges them.
    fn summarize_case(&mut self) {
        self.voice.say(CASE_DETAILS_PROMPT);
        let details = read_case_details();
        self.voice.say(&format!(
            "Thank you for providing the case details: {}. I will summarize it for you.",
            details
        ));
    }
}

/// Reads one line of case details from standard input, unvalidated.
fn read_case_details() -> String {
    print!("Please provide the case details: ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if let Err(err) = std::io::stdin().read_line(&mut line) {
        warn!("Could not read case details: {}", err);
    }
    line.trim().to_string()
}

/// Formats the spoken clock line for a local timestamp.
fn spoken_time(now: DateTime<Local>) -> String {
    format!("The time is {}.", now.format("%H:%M"))
}

/// Whether a clarification follow-up counts as a yes.
fn is_affirmative(text: &str) -> bool {
    ["yes", "sure", "okay"].iter().any(|word| text.contains(word))
}
