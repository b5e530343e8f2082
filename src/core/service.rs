use crate::core::fallback::generate_fallback;
use crate::core::normalize::clean_text;
use crate::core::selection::{select_mood, select_symbol};
use crate::domain::model::{FortunePrompt, FortuneRequest, FortuneResult, FortuneText, Source};
use crate::domain::ports::FortuneGenerator;
use crate::utils::error::{RemoteError, Result};
use crate::utils::validation::validate_question;

pub const FALLBACK_WARNING: &str = "Remote generation failed; returned fallback fortune.";

/// Resolves one fortune request: validate, draw, try the generator once,
/// fall back locally on any failure.
pub struct FortuneService<G: FortuneGenerator> {
    generator: G,
}

impl<G: FortuneGenerator> FortuneService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[cfg(test)]
    pub(crate) fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn tell(&self, request: FortuneRequest) -> Result<FortuneResult> {
        let question = clean_text(request.question.as_deref());
        validate_question(&question)?;

        let mood_hint = clean_text(request.mood.as_deref());
        let prompt = {
            // thread_rng 不是 Send，不能跨越 await
            let mut rng = rand::thread_rng();
            let mood = select_mood(&mood_hint, &mut rng);
            let symbol = select_symbol(&mut rng);
            FortunePrompt {
                question,
                mood,
                symbol,
            }
        };

        tracing::debug!(
            "Resolved mood '{}' and symbol '{}' for question of {} chars",
            prompt.mood,
            prompt.symbol,
            prompt.question.chars().count()
        );

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                tracing::info!("Fortune generated remotely (mood: {})", prompt.mood);
                Ok(assemble(text, &prompt, Source::Remote, None))
            }
            Err(err) => {
                log_remote_failure(&err);
                let text = generate_fallback(&prompt.question, prompt.mood, &mut rand::thread_rng());
                Ok(assemble(text, &prompt, Source::Fallback, Some(&err)))
            }
        }
    }
}

fn log_remote_failure(err: &RemoteError) {
    match err {
        RemoteError::MissingCredentials => {
            tracing::debug!("Remote generation not configured, using fallback");
        }
        _ => match std::error::Error::source(err) {
            Some(cause) => tracing::warn!(
                "⚠️ Remote generation failed [{}]: {} ({})",
                err.category(),
                err,
                cause
            ),
            None => tracing::warn!("⚠️ Remote generation failed [{}]: {}", err.category(), err),
        },
    }
}

fn assemble(
    text: FortuneText,
    prompt: &FortunePrompt,
    source: Source,
    failure: Option<&RemoteError>,
) -> FortuneResult {
    FortuneResult {
        text,
        mood: prompt.mood,
        symbol: prompt.symbol,
        source,
        warning: failure.map(|_| FALLBACK_WARNING.to_string()),
        details: failure.map(ToString::to_string),
    }
}
