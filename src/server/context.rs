use std::sync::Arc;

use crate::domain::ports::JokeProvider;
use crate::server::cors::CorsPolicy;

/// Everything a request handler can reach. Built once at startup and shared
/// read-only between connections.
#[derive(Clone)]
pub struct AppContext {
    pub provider: Arc<dyn JokeProvider>,
    pub cors: CorsPolicy,
    pub prefix: String,
}

impl AppContext {
    pub fn new(provider: Arc<dyn JokeProvider>, prefix: impl Into<String>) -> Self {
        Self {
            provider,
            cors: CorsPolicy::default(),
            prefix: prefix.into(),
        }
    }
}
