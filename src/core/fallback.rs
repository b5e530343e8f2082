use crate::domain::model::{FortuneText, Mood};
use rand::seq::SliceRandom;
use rand::Rng;

pub const CRYPTIC_QUESTION_SUFFIX: &str = " The question is part of the answer.";

const SUGGESTIONS: [&str; 6] = [
    "Drink a glass of water.",
    "Write one honest sentence.",
    "Clean one small corner.",
    "Text one supportive person.",
    "Step outside for 60 seconds.",
    "Do the next tiny task.",
];

const LUCKY_VALUES: [&str; 7] = ["7", "11", "blue", "green", "13", "gold", "2"];

fn fortune_lines(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Hopeful => &[
            "Something light is gathering behind the scenes—stay open to it.",
            "A small decision today makes tomorrow feel easier.",
        ],
        Mood::Cryptic => &[
            "The answer arrives sideways. Notice what repeats.",
            "What you're seeking is near, but not where you've been looking.",
        ],
        Mood::Playful => &[
            "Your future self is already laughing about this. Keep going.",
            "Plot twist: you're closer than you think.",
        ],
        Mood::Grounding => &[
            "Return to what's simple. You don't need to rush this.",
            "One calm step is still progress. Take it.",
        ],
        Mood::Bold => &[
            "Choose the option that scares you a little—in a good way.",
            "Say it plainly. Clarity is your power today.",
        ],
    }
}

/// Local fortune from the template banks. Always succeeds.
pub fn generate_fallback<R: Rng + ?Sized>(question: &str, mood: Mood, rng: &mut R) -> FortuneText {
    let mut fortune = fortune_lines(mood)
        .choose(rng)
        .copied()
        .unwrap_or(crate::core::decoder::DEFAULT_FORTUNE)
        .to_string();
    let suggestion = SUGGESTIONS.choose(rng).copied().unwrap_or(SUGGESTIONS[0]);
    let lucky = LUCKY_VALUES.choose(rng).copied().unwrap_or(LUCKY_VALUES[0]);

    // 唯一的跨欄位條件：問句結尾且心情為 cryptic
    if question.ends_with('?') && mood == Mood::Cryptic {
        fortune.push_str(CRYPTIC_QUESTION_SUFFIX);
    }

    FortuneText {
        fortune,
        suggestion: suggestion.to_string(),
        lucky: lucky.to_string(),
    }
}
