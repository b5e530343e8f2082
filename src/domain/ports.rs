use crate::domain::model::{FortunePrompt, FortuneText};
use crate::utils::error::RemoteError;
use async_trait::async_trait;

/// A source of fortune text that may fail. The outcome is returned as a
/// value; callers decide what a failure means.
#[async_trait]
pub trait FortuneGenerator: Send + Sync {
    async fn generate(&self, prompt: &FortunePrompt) -> Result<FortuneText, RemoteError>;
}
