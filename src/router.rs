mod joke;

use std::sync::Arc;

use http::request::Parts;
use hyper::header::{HeaderValue, ALLOW, ORIGIN};
use hyper::{Method, Request, Response, StatusCode};
use tracing::{debug, error, warn};

use crate::server::context::AppContext;
use crate::server::cors::{self, CorsPolicy};
use crate::server::error;
use crate::server::response::{self, ResponseResult, ServerResponse};

/// Splits `path` into the segments below the mount prefix, or `None` when
/// the path is not under the prefix at all.
fn mounted_subroutes<'a>(prefix: &str, path: &'a str) -> Option<Vec<&'a str>> {
    let rest = path.strip_prefix(prefix)?;
    let rest = rest.strip_prefix('/')?;
    Some(rest.trim_end_matches('/').split('/').collect())
}

pub async fn router(parts: &Parts, ctx: &AppContext) -> ResponseResult {
    let method = &parts.method;
    let path = parts.uri.path();

    let subroutes = match mounted_subroutes(&ctx.prefix, path) {
        Some(subroutes) => subroutes,
        None => return Err(error::not_found(path)),
    };

    match (method, subroutes.as_slice()) {
        (&Method::GET | &Method::HEAD, ["joke"]) => joke::get(ctx).await,
        (&Method::OPTIONS, ["joke"]) => joke::options(parts, ctx),
        (_, ["joke"]) => Err(error::method_not_allowed(method, path, joke::ALLOWED_METHODS)),

        _ => Err(error::not_found(path)),
    }
}

/// Entry point for every request: routes it, turns handler errors into the
/// generic error document and attaches CORS headers under the mount prefix.
/// Request bodies are never read; HEAD responses keep the GET headers and
/// drop the body.
pub async fn serve<B>(req: Request<B>, ctx: Arc<AppContext>) -> ServerResponse {
    let (parts, _) = req.into_parts();
    let path = parts.uri.path().to_owned();
    let origin = cors::header_str(&parts.headers, &ORIGIN).map(str::to_owned);

    debug!("Received {} request at {} from {:?}", parts.method, path, origin);

    let mut res = match router(&parts, &ctx).await {
        Ok(res) => res,
        Err(err) => {
            if err.status_code == StatusCode::INTERNAL_SERVER_ERROR {
                error!("{}", err);
            } else {
                warn!("{}", err);
            }

            let mut res = response::send_error(err.status_code, &path);
            if let Some(allow) = err.allow {
                res.headers_mut().insert(ALLOW, HeaderValue::from_static(allow));
            }
            res
        }
    };

    if mounted_subroutes(&ctx.prefix, &path).is_some() {
        // Preflight responses already carry their own allow headers.
        let origin = if CorsPolicy::is_preflight(&parts.method, &parts.headers) {
            None
        } else {
            origin.as_deref()
        };
        ctx.cors.apply(origin, res.headers_mut());
    }

    if parts.method == Method::HEAD {
        let (res_parts, _) = res.into_parts();
        return Response::from_parts(res_parts, response::empty());
    }

    res
}
