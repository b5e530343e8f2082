use crate::domain::model::{Mood, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;

/// Keeps a valid mood as-is, otherwise draws one weighted by [`Mood::weight`].
pub fn select_mood<R: Rng + ?Sized>(candidate: &str, rng: &mut R) -> Mood {
    if let Some(mood) = Mood::parse(candidate) {
        return mood;
    }

    // 權重為常數且皆大於零，choose_weighted 不會失敗
    Mood::ALL
        .choose_weighted(rng, Mood::weight)
        .copied()
        .unwrap_or(Mood::Hopeful)
}

pub fn select_symbol<R: Rng + ?Sized>(rng: &mut R) -> Symbol {
    Symbol::ALL.choose(rng).copied().unwrap_or(Symbol::Key)
}
