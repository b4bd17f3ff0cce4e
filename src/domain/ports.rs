use crate::domain::model::Joke;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of jokes for the HTTP layer. Implementations own their selection
/// state; callers only ever ask for one joke at a time.
#[async_trait]
pub trait JokeProvider: Send + Sync {
    async fn random_joke(&self) -> Result<Joke>;
}
