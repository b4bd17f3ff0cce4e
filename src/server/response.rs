use chrono::{SecondsFormat, Utc};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::server::error::ServerError;

pub type ServerResponse = Response<BoxBody<Bytes, hyper::Error>>;
pub type ResponseResult = Result<ServerResponse, ServerError>;

const APPLICATION_JSON: &str = "application/json";

pub fn empty() -> BoxBody<Bytes, hyper::Error> {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody<Bytes, hyper::Error> {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

pub fn send<T: Into<Bytes>>(body: T) -> ServerResponse {
    Response::new(full(body))
}

/// 200 with `value` serialized as the JSON body.
pub fn send_json<T: Serialize>(value: &T) -> ResponseResult {
    let body = serde_json::to_vec(value)?;
    let length = body.len();
    let mut res = send(body);
    let headers = res.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    // Kept explicit so HEAD responses still advertise the GET body size.
    headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
    Ok(res)
}

pub fn send_status(status: StatusCode) -> ServerResponse {
    let mut res = Response::new(empty());
    *res.status_mut() = status;
    res
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    timestamp: String,
    status: u16,
    error: &'a str,
    path: &'a str,
}

/// Generic error document. Never carries handler output, only the status.
pub fn send_error(status: StatusCode, path: &str) -> ServerResponse {
    let body = ErrorBody {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or("Unknown Error"),
        path,
    };

    let mut res = match serde_json::to_vec(&body) {
        Ok(bytes) => {
            let mut res = send(bytes);
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
            res
        }
        Err(_) => Response::new(empty()),
    };
    *res.status_mut() = status;
    res
}
