/*
 * @file intent.rs
 * @brief Keyword-rule intent classification for VocalCare
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

//! Intent classification for spoken commands.
//!
//! Classification is a fixed, ordered table of keyword rules matched by
//! case-insensitive substring containment. The first rule that matches wins;
//! there is no scoring and no longest-match resolution, so an utterance that
//! mentions both "medication" and "therapy" resolves to whichever rule sits
//! earlier in the table. The outer dialogue and the cancer module each carry
//! their own vocabulary.

/// Dashboard sections the assistant can navigate to.
///
/// # Details
/// Each section carries an opaque query token appended to the dashboard URL
/// and a spoken label used in confirmations. Tokens are passed through as-is
/// and are never validated against the dashboard's actual routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Medication,
    Therapy,
    Overview,
    Vitals,
    CancerModule,
}

impl Section {
    /// Returns the query-parameter token for this section.
    pub fn token(self) -> &'static str {
        match self {
            Section::Medication => "medication",
            Section::Therapy => "therapy",
            Section::Overview => "overview",
            Section::Vitals => "vitals",
            Section::CancerModule => "cancer_module",
        }
    }

    /// Returns the human-readable name spoken in confirmations.
    pub fn label(self) -> &'static str {
        match self {
            Section::CancerModule => "cancer module",
            other => other.token(),
        }
    }
}

/// Everything the assistant understands in the outer dialogue.
///
/// # Details
/// Exactly one intent is selected per utterance; an unmatched utterance is
/// `Unclear`, never an error. `ScanMedication` and `IdentifyMedication` open
/// the medication section and add a spoken notice on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Open the dashboard, optionally at a specific section.
    OpenDashboard(Option<Section>),
    /// Open the medication section with the pill-scanner notice.
    ScanMedication,
    /// Open the medication section with the pill-identification notice.
    IdentifyMedication,
    /// Speak one of the canned medication reminders.
    TellMedicationReminder,
    /// Speak the side-effect guidance line.
    SideEffectWarning,
    /// Speak the assistant's name.
    StateName,
    /// Speak the assistant's provenance.
    StateCreator,
    /// Speak the current local time.
    TellTime,
    /// Speak one of the canned jokes.
    TellJoke,
    /// Speak one of the canned health facts.
    TellFact,
    /// Acknowledge thanks.
    Thanks,
    /// Speak the capabilities summary.
    Help,
    /// Enter the cancer-information sub-dialogue.
    EnterCancerModule,
    /// Say farewell and stop the assistant.
    Terminate,
    /// Nothing matched; ask a clarifying question.
    Unclear,
}

/// Everything the assistant understands inside the cancer module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleIntent {
    ListCancerTypes,
    ShowCancerImages,
    SummarizeCase,
    ListSymptoms,
    ListTreatments,
    ListPrevention,
    /// Leave the module and return to the outer dialogue.
    ExitModule,
    Unclear,
}

/// One entry in a classification table.
///
/// A rule matches when every `all` keyword appears in the utterance and, if
/// `any` is non-empty, at least one `any` keyword appears as well.
struct Rule<I> {
    all: &'static [&'static str],
    any: &'static [&'static str],
    intent: I,
}

impl<I: Copy> Rule<I> {
    fn matches(&self, text: &str) -> bool {
        self.all.iter().all(|word| text.contains(word))
            && (self.any.is_empty() || self.any.iter().any(|word| text.contains(word)))
    }
}

/// The outer-dialogue rule table, in match priority order.
///
/// Order is load-bearing: the medication rule precedes the scan, identify,
/// and reminder rules, so any utterance containing "pill" or "medication"
/// resolves to the plain medication dispatch before those conjunction rules
/// are consulted. The later rules keep their historical positions anyway;
/// reordering them would change dispatch for ambiguous utterances.
const OUTER_RULES: &[Rule<Intent>] = &[
    Rule {
        all: &[],
        any: &["dashboard", "healthcare"],
        intent: Intent::OpenDashboard(None),
    },
    Rule {
        all: &[],
        any: &["cancer_module", "cancer"],
        intent: Intent::EnterCancerModule,
    },
    Rule {
        all: &[],
        any: &["medication", "pill", "medicine", "prescription"],
        intent: Intent::OpenDashboard(Some(Section::Medication)),
    },
    Rule {
        all: &[],
        any: &["therapy", "mental health", "depression", "talk", "feeling sad"],
        intent: Intent::OpenDashboard(Some(Section::Therapy)),
    },
    Rule {
        all: &[],
        any: &["overview", "summary", "health overview", "home"],
        intent: Intent::OpenDashboard(Some(Section::Overview)),
    },
    Rule {
        all: &[],
        any: &["vitals", "metrics", "measurements", "stats", "numbers"],
        intent: Intent::OpenDashboard(Some(Section::Vitals)),
    },
    Rule {
        all: &["scan"],
        any: &["pill", "medication"],
        intent: Intent::ScanMedication,
    },
    Rule {
        all: &["identify"],
        any: &["pill", "medication"],
        intent: Intent::IdentifyMedication,
    },
    Rule {
        all: &["remind", "medication"],
        any: &[],
        intent: Intent::TellMedicationReminder,
    },
    Rule {
        all: &["side effect"],
        any: &[],
        intent: Intent::SideEffectWarning,
    },
    Rule {
        all: &["what is your name"],
        any: &[],
        intent: Intent::StateName,
    },
    Rule {
        all: &["who created you"],
        any: &[],
        intent: Intent::StateCreator,
    },
    Rule {
        all: &[],
        any: &["what time is it", "time"],
        intent: Intent::TellTime,
    },
    Rule {
        all: &["joke"],
        any: &[],
        intent: Intent::TellJoke,
    },
    Rule {
        all: &[],
        any: &["fact", "health tip", "tip"],
        intent: Intent::TellFact,
    },
    Rule {
        all: &[],
        any: &["thank you", "thanks"],
        intent: Intent::Thanks,
    },
    Rule {
        all: &["help"],
        any: &[],
        intent: Intent::Help,
    },
    Rule {
        all: &[],
        any: &["stop", "exit", "goodbye", "bye", "quit"],
        intent: Intent::Terminate,
    },
];

/// The cancer-module rule table, in match priority order.
const MODULE_RULES: &[Rule<ModuleIntent>] = &[
    Rule {
        all: &["types of cancer"],
        any: &[],
        intent: ModuleIntent::ListCancerTypes,
    },
    Rule {
        all: &[],
        any: &["view images", "show images"],
        intent: ModuleIntent::ShowCancerImages,
    },
    Rule {
        all: &[],
        any: &["case summary", "case"],
        intent: ModuleIntent::SummarizeCase,
    },
    Rule {
        all: &["symptoms"],
        any: &[],
        intent: ModuleIntent::ListSymptoms,
    },
    Rule {
        all: &["treatment"],
        any: &[],
        intent: ModuleIntent::ListTreatments,
    },
    Rule {
        all: &["prevention"],
        any: &[],
        intent: ModuleIntent::ListPrevention,
    },
    Rule {
        all: &[],
        any: &["exit", "quit"],
        intent: ModuleIntent::ExitModule,
    },
];

/// Classifies an utterance against the outer-dialogue vocabulary.
///
/// # Details
/// Lowercases the utterance and walks the rule table top to bottom, returning
/// the intent of the first matching rule. Total and deterministic: the same
/// input always yields the same intent, and no input fails to classify.
///
/// # Arguments
/// * `utterance` - The transcribed user utterance.
///
/// # Returns
/// * `Intent` - The first matching intent, or `Intent::Unclear`.
pub fn classify_outer(utterance: &str) -> Intent {
    let text = utterance.to_lowercase();
    OUTER_RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unclear)
}

/// Classifies an utterance against the cancer-module vocabulary.
///
/// # Arguments
/// * `utterance` - The transcribed user utterance.
///
/// # Returns
/// * `ModuleIntent` - The first matching intent, or `ModuleIntent::Unclear`.
pub fn classify_module(utterance: &str) -> ModuleIntent {
    let text = utterance.to_lowercase();
    MODULE_RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.intent)
        .unwrap_or(ModuleIntent::Unclear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_deterministic() {
        let utterance = "please open my medication tracker";
        assert_eq!(classify_outer(utterance), classify_outer(utterance));
        assert_eq!(
            classify_outer(utterance),
            Intent::OpenDashboard(Some(Section::Medication))
        );
    }

    #[test]
    fn unmatched_utterance_is_unclear_not_an_error() {
        assert_eq!(classify_outer("zyzzyva"), Intent::Unclear);
        assert_eq!(classify_module("zyzzyva"), ModuleIntent::Unclear);
    }

    #[test]
    fn earlier_rule_wins_for_ambiguous_utterances() {
        // "dashboard" (rule 1) outranks "medication" (rule 3).
        assert_eq!(
            classify_outer("open medication dashboard"),
            Intent::OpenDashboard(None)
        );
        // "cancer" (rule 2) outranks "treatment" keywords that only exist
        // in the module vocabulary anyway.
        assert_eq!(classify_outer("cancer treatment"), Intent::EnterCancerModule);
    }

    #[test]
    fn scan_and_identify_rules_are_shadowed_by_medication() {
        // Both conjunction rules require "pill" or "medication", which the
        // plain medication rule already claims three positions earlier.
        assert_eq!(
            classify_outer("scan my pills"),
            Intent::OpenDashboard(Some(Section::Medication))
        );
        assert_eq!(
            classify_outer("identify this medication"),
            Intent::OpenDashboard(Some(Section::Medication))
        );
        // Without the conjunct noun neither rule can fire at all.
        assert_eq!(classify_outer("scan this"), Intent::Unclear);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_outer("WHAT TIME IS IT"), Intent::TellTime);
        assert_eq!(classify_outer("what time is it"), Intent::TellTime);
        assert_eq!(classify_module("SYMPTOMS"), ModuleIntent::ListSymptoms);
    }

    #[test]
    fn matching_ignores_word_boundaries() {
        // Plain substring containment, no word boundaries: "vitals" inside
        // a longer word still matches.
        assert_eq!(
            classify_outer("revitalsing"),
            Intent::OpenDashboard(Some(Section::Vitals))
        );
    }

    #[test]
    fn therapy_phrases_route_to_the_therapy_section() {
        for utterance in ["i need therapy", "i am feeling sad", "depression help"] {
            assert_eq!(
                classify_outer(utterance),
                Intent::OpenDashboard(Some(Section::Therapy)),
                "utterance: {utterance}"
            );
        }
    }

    #[test]
    fn reminder_rule_is_shadowed_by_medication() {
        // The reminder rule needs "medication", which the plain medication
        // rule already claims six positions earlier. Order decides.
        assert_eq!(
            classify_outer("remind me about my medication"),
            Intent::OpenDashboard(Some(Section::Medication))
        );
        // "remind" alone falls through the table to Unclear.
        assert_eq!(classify_outer("remind me"), Intent::Unclear);
    }

    #[test]
    fn terminate_phrases_are_recognized() {
        for utterance in ["stop", "goodbye", "please quit now"] {
            assert_eq!(classify_outer(utterance), Intent::Terminate, "utterance: {utterance}");
        }
    }

    #[test]
    fn module_vocabulary_is_disjoint_from_outer() {
        // "symptoms" means nothing in the outer dialogue.
        assert_eq!(classify_outer("symptoms"), Intent::Unclear);
        assert_eq!(classify_module("symptoms"), ModuleIntent::ListSymptoms);
        // "exit" terminates outside but only pops the module inside.
        assert_eq!(classify_outer("exit"), Intent::Terminate);
        assert_eq!(classify_module("exit"), ModuleIntent::ExitModule);
    }

    #[test]
    fn case_rule_catches_both_phrasings() {
        assert_eq!(classify_module("case summary"), ModuleIntent::SummarizeCase);
        assert_eq!(classify_module("about this case"), ModuleIntent::SummarizeCase);
    }

    #[test]
    fn section_tokens_and_labels() {
        assert_eq!(Section::Vitals.token(), "vitals");
        assert_eq!(Section::Vitals.label(), "vitals");
        assert_eq!(Section::CancerModule.token(), "cancer_module");
        assert_eq!(Section::CancerModule.label(), "cancer module");
    }
}
