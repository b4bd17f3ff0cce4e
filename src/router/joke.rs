use http::request::Parts;
use hyper::header::{HeaderValue, ALLOW};
use hyper::StatusCode;

use crate::server::context::AppContext;
use crate::server::cors::{self, CorsPolicy};
use crate::server::response::{self, ResponseResult};

pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// `GET <prefix>/joke`, also serving HEAD. Provider errors are left for the
/// router to translate.
pub async fn get(ctx: &AppContext) -> ResponseResult {
    let joke = ctx.provider.random_joke().await?;
    response::send_json(&joke)
}

pub fn options(parts: &Parts, ctx: &AppContext) -> ResponseResult {
    if !CorsPolicy::is_preflight(&parts.method, &parts.headers) {
        let mut res = response::send_status(StatusCode::NO_CONTENT);
        res.headers_mut()
            .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        return Ok(res);
    }

    let (origin, request_method, request_headers) = cors::preflight_request(&parts.headers);
    let headers = ctx
        .cors
        .preflight_headers(origin, request_method, request_headers)?;

    let mut res = response::send_status(StatusCode::OK);
    res.headers_mut().extend(headers);
    Ok(res)
}
