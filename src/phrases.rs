//! Canned spoken responses.
//!
//! The sets are fixed; one entry is chosen at random per request so repeated
//! questions don't sound like a broken record.

use rand::seq::SliceRandom;

/// Jokes served for a "tell me a joke" request.
pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Did you hear about the mathematician who's afraid of negative numbers? He'll stop at nothing to avoid them!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "I told my wife she was drawing her eyebrows too high. She looked surprised.",
    "What do you call a fake noodle? An impasta!",
];

/// Health facts served for a "health tip" request.
pub const HEALTH_FACTS: &[&str] = &[
    "Regular exercise can help reduce symptoms of depression and anxiety.",
    "Taking your medication at the same time each day helps maintain consistent levels in your bloodstream.",
    "Deep breathing exercises can help reduce stress and lower blood pressure.",
    "Mindfulness meditation can improve focus and reduce symptoms of anxiety and depression.",
    "Social connections are just as important for your health as diet and exercise.",
];

/// Reminders served for a medication-reminder request.
pub const MEDICATION_REMINDERS: &[&str] = &[
    "Remember to take your medications with food unless directed otherwise by your doctor.",
    "It's important to finish all prescribed antibiotics, even if you start feeling better.",
    "If you experience side effects from your medication, consult your healthcare provider before stopping.",
    "Setting an alarm on your phone can help you remember to take your medications at the same time each day.",
    "Keep a medication log to track when you've taken your doses and any side effects you experience.",
];

/// Picks one entry from a canned set at random.
pub fn pick(set: &'static [&'static str]) -> &'static str {
    set.choose(&mut rand::thread_rng()).copied().unwrap_or("")
}
