use crate::server::cors::CorsRejection;
use crate::utils::error::JokeApiError;
use hyper::{Method, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{prefix} {message}")]
pub struct ServerError {
    pub prefix: &'static str,
    pub message: String,
    pub status_code: StatusCode,
    /// Methods the resource does support, for 405 responses.
    pub allow: Option<&'static str>,
}

impl From<JokeApiError> for ServerError {
    fn from(err: JokeApiError) -> Self {
        ServerError {
            prefix: "[PROVIDER ERROR]",
            message: err.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            allow: None,
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError {
            prefix: "[JSON ERROR]",
            message: err.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            allow: None,
        }
    }
}

impl From<CorsRejection> for ServerError {
    fn from(err: CorsRejection) -> Self {
        ServerError {
            prefix: "[CORS]",
            message: err.to_string(),
            status_code: StatusCode::FORBIDDEN,
            allow: None,
        }
    }
}

pub fn not_found(path: &str) -> ServerError {
    ServerError {
        prefix: "[NOT FOUND]",
        message: format!("No route for {}", path),
        status_code: StatusCode::NOT_FOUND,
        allow: None,
    }
}

pub fn method_not_allowed(method: &Method, path: &str, allow: &'static str) -> ServerError {
    ServerError {
        prefix: "[METHOD NOT ALLOWED]",
        message: format!("{} is not supported on {}", method, path),
        status_code: StatusCode::METHOD_NOT_ALLOWED,
        allow: Some(allow),
    }
}
