//! Spirit response synthesis.

use serde::{Deserialize, Serialize};

use super::config::ResponseConfig;
use super::entropy::EntropySource;

/// Single-word responses.
pub const SPIRIT_WORDS: [&str; 23] = [
    "Hello", "Help", "Cold", "Here", "Listen", "Yes", "No", "Leave", "Stay", "Find", "Lost",
    "Home", "Dark", "Light", "Remember", "Pain", "Love", "Fear", "Hope", "Truth", "Secret",
    "Hidden", "Forgotten",
];

/// Full-sentence responses.
pub const SPIRIT_SENTENCES: [&str; 12] = [
    "I am here with you",
    "Can you hear me?",
    "Help me find peace",
    "I have been waiting so long",
    "Do not be afraid of me",
    "I need to tell you something important",
    "The truth must be known",
    "I cannot rest until this is resolved",
    "Remember what happened here",
    "They do not want you to know",
    "I am trapped in this place",
    "Please help me cross over",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    #[default]
    Word,
    Sentence,
}

/// Outcome of one response attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritResponse {
    pub should_respond: bool,
    /// Empty when `should_respond` is false
    pub message: String,
    pub kind: ResponseKind,
}

impl SpiritResponse {
    /// The "no response" value: empty message, word kind.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }
}

/// Decides whether a response happens at `level` and picks its text.
///
/// Draws, in order: the gate (only when `level` exceeds the level gate), the
/// length decision, and the table index. `temperature` is accepted for
/// interface compatibility and has no effect.
pub fn synthesize<E: EntropySource + ?Sized>(
    level: f64,
    temperature: f64,
    config: &ResponseConfig,
    entropy: &mut E,
) -> SpiritResponse {
    let _ = temperature;

    if !(level > config.level_gate && entropy.next_unit() > config.draw_gate) {
        return SpiritResponse::silent();
    }

    let sentence_gate = if level > config.sentence_level_gate {
        config.sentence_draw_high
    } else {
        config.sentence_draw_low
    };

    let (kind, message) = if entropy.next_unit() > sentence_gate {
        let idx = entropy.pick_index(SPIRIT_SENTENCES.len());
        (ResponseKind::Sentence, SPIRIT_SENTENCES[idx])
    } else {
        let idx = entropy.pick_index(SPIRIT_WORDS.len());
        (ResponseKind::Word, SPIRIT_WORDS[idx])
    };

    tracing::debug!(level, ?kind, text = message, "spirit response");
    SpiritResponse {
        should_respond: true,
        message: message.to_string(),
        kind,
    }
}
