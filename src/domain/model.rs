use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Incoming `/api/fortune` body. Both fields are raw, un-normalized text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FortuneRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl FortuneRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            mood: None,
        }
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Reads each field on its own: a field that is missing or not a string
    /// becomes `None` without affecting the other one. A body that is not
    /// JSON at all yields an empty request.
    pub fn from_json_slice(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!("Ignoring unparseable fortune request body: {}", e);
                }
                return Self::default();
            }
        };

        let text_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            question: text_field("question"),
            mood: text_field("mood"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Hopeful,
    Cryptic,
    Playful,
    Grounding,
    Bold,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Hopeful,
        Mood::Cryptic,
        Mood::Playful,
        Mood::Grounding,
        Mood::Bold,
    ];

    /// Case-sensitive match against the lowercase mood names.
    pub fn parse(value: &str) -> Option<Mood> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Hopeful => "hopeful",
            Mood::Cryptic => "cryptic",
            Mood::Playful => "playful",
            Mood::Grounding => "grounding",
            Mood::Bold => "bold",
        }
    }

    /// Relative weight when a mood has to be drawn at random.
    pub fn weight(&self) -> u32 {
        match self {
            Mood::Hopeful => 4,
            Mood::Cryptic | Mood::Playful => 3,
            Mood::Grounding | Mood::Bold => 2,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decorative noun shown next to a fortune. Carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Key,
    Mirror,
    Lantern,
    Coin,
    Feather,
    Compass,
    Shell,
    Seed,
    Thread,
    Candle,
    Door,
    Bridge,
    Cup,
    Stone,
}

impl Symbol {
    pub const ALL: [Symbol; 14] = [
        Symbol::Key,
        Symbol::Mirror,
        Symbol::Lantern,
        Symbol::Coin,
        Symbol::Feather,
        Symbol::Compass,
        Symbol::Shell,
        Symbol::Seed,
        Symbol::Thread,
        Symbol::Candle,
        Symbol::Door,
        Symbol::Bridge,
        Symbol::Cup,
        Symbol::Stone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Key => "Key",
            Symbol::Mirror => "Mirror",
            Symbol::Lantern => "Lantern",
            Symbol::Coin => "Coin",
            Symbol::Feather => "Feather",
            Symbol::Compass => "Compass",
            Symbol::Shell => "Shell",
            Symbol::Seed => "Seed",
            Symbol::Thread => "Thread",
            Symbol::Candle => "Candle",
            Symbol::Door => "Door",
            Symbol::Bridge => "Bridge",
            Symbol::Cup => "Cup",
            Symbol::Stone => "Stone",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a generator needs: the normalized question plus the draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortunePrompt {
    pub question: String,
    pub mood: Mood,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneText {
    pub fortune: String,
    pub suggestion: String,
    pub lucky: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneResult {
    #[serde(flatten)]
    pub text: FortuneText,
    pub mood: Mood,
    pub symbol: Symbol,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FortuneResult {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
