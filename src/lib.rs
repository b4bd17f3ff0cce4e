pub mod adapters;
pub mod config;
pub mod domain;
pub mod router;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ServerConfig;

pub use adapters::JsonFileJokes;
pub use domain::{model::Joke, ports::JokeProvider};
pub use server::context::AppContext;
pub use utils::error::{JokeApiError, Result};
