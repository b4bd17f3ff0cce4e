use crate::domain::model::Joke;
use crate::domain::ports::JokeProvider;
use crate::utils::error::{JokeApiError, Result};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;

/// Both layouts seen in the wild: a bare array, or `{"jokes": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JokesFile {
    List(Vec<Joke>),
    Wrapped { jokes: Vec<Joke> },
}

impl From<JokesFile> for Vec<Joke> {
    fn from(file: JokesFile) -> Self {
        match file {
            JokesFile::List(jokes) => jokes,
            JokesFile::Wrapped { jokes } => jokes,
        }
    }
}

/// Jokes read once from a JSON file and served in random order.
#[derive(Debug, Clone)]
pub struct JsonFileJokes {
    jokes: Vec<Joke>,
}

impl JsonFileJokes {
    pub fn from_jokes(jokes: Vec<Joke>) -> Self {
        Self { jokes }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let provider = Self::from_json_str(&content)?;

        if provider.is_empty() {
            tracing::warn!("Jokes file {} contains no jokes", path.display());
        } else {
            tracing::info!("Loaded {} jokes from {}", provider.len(), path.display());
        }

        Ok(provider)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: JokesFile = serde_json::from_str(content)?;
        Ok(Self::from_jokes(file.into()))
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }
}

#[async_trait]
impl JokeProvider for JsonFileJokes {
    async fn random_joke(&self) -> Result<Joke> {
        self.jokes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(JokeApiError::NoJokesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parses_bare_array() {
        let jokes = JsonFileJokes::from_json_str(
            r#"[{"setup":"a","punchline":"b"},{"setup":"c","punchline":"d"}]"#,
        )
        .unwrap();
        assert_eq!(jokes.len(), 2);
    }

    #[test]
    fn test_parses_wrapped_legacy_layout() {
        let jokes = JsonFileJokes::from_json_str(
            r#"{"jokes":[{"joke":"Knock knock.","response":"Who's there?"}]}"#,
        )
        .unwrap();
        assert_eq!(jokes.len(), 1);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = JsonFileJokes::from_json_str(r#"{"jokes": "nope"}"#);
        assert!(matches!(result, Err(JokeApiError::SerializationError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = JsonFileJokes::from_file("/definitely/not/here/jokes.json");
        assert!(matches!(result, Err(JokeApiError::IoError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"[{"setup":"Why?","punchline":"Because."}]"#)
            .unwrap();

        let jokes = JsonFileJokes::from_file(temp_file.path()).unwrap();
        assert_eq!(jokes.len(), 1);
    }

    #[tokio::test]
    async fn test_random_joke_comes_from_collection() {
        let all = vec![Joke::new("a", "b"), Joke::new("c", "d"), Joke::new("e", "f")];
        let provider = JsonFileJokes::from_jokes(all.clone());

        for _ in 0..20 {
            let joke = provider.random_joke().await.unwrap();
            assert!(all.contains(&joke));
        }
    }

    #[tokio::test]
    async fn test_empty_collection_fails() {
        let provider = JsonFileJokes::from_jokes(vec![]);
        assert!(provider.is_empty());

        let result = provider.random_joke().await;
        assert!(matches!(result, Err(JokeApiError::NoJokesAvailable)));
    }
}
