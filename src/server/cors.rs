use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
};
use hyper::Method;
use thiserror::Error;
use url::Url;

/// The only browser origins allowed to read API responses.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:4020", "http://bobapp-front:4020"];

const MAX_AGE_SECONDS: u32 = 1800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorsRejection {
    #[error("Preflight request without Origin header")]
    MissingOrigin,

    #[error("Origin '{0}' is not allowed")]
    OriginNotAllowed(String),

    #[error("Method '{0}' is not allowed")]
    MethodNotAllowed(String),

    #[error("Requested headers '{0}' are malformed")]
    MalformedHeaders(String),
}

/// Cross-origin rules for the API. The origin list is fixed at compile time;
/// there is no way to widen it at runtime.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allowed_methods: Vec<Method>,
    max_age: u32,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: ALLOWED_ORIGINS
                .iter()
                .filter_map(|origin| normalize_origin(origin))
                .collect(),
            allowed_methods: vec![Method::GET],
            max_age: MAX_AGE_SECONDS,
        }
    }
}

impl CorsPolicy {
    /// Returns the serialized origin to echo back if `origin` is on the list.
    pub fn allowed_origin(&self, origin: &str) -> Option<String> {
        let normalized = normalize_origin(origin)?;
        self.allowed_origins
            .iter()
            .find(|allowed| **allowed == normalized)
            .cloned()
    }

    pub fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
        method == Method::OPTIONS
            && headers.contains_key(ORIGIN)
            && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
    }

    /// Headers for a simple (non-preflight) request, or `None` when the
    /// origin is absent or not allowed.
    pub fn actual_headers(&self, origin: Option<&str>) -> Option<HeaderMap> {
        let allowed = self.allowed_origin(origin?)?;
        let value = HeaderValue::from_str(&allowed).ok()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        Some(headers)
    }

    pub fn preflight_headers(
        &self,
        origin: Option<&str>,
        request_method: Option<&str>,
        request_headers: Option<&str>,
    ) -> Result<HeaderMap, CorsRejection> {
        let origin = origin.ok_or(CorsRejection::MissingOrigin)?;
        let allowed = self
            .allowed_origin(origin)
            .ok_or_else(|| CorsRejection::OriginNotAllowed(origin.to_string()))?;

        let request_method = request_method.unwrap_or_default();
        let method_allowed = Method::from_bytes(request_method.trim().as_bytes())
            .map(|method| self.allowed_methods.contains(&method))
            .unwrap_or(false);
        if !method_allowed {
            return Err(CorsRejection::MethodNotAllowed(request_method.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_str(&allowed)
                .map_err(|_| CorsRejection::OriginNotAllowed(origin.to_string()))?,
        );
        if let Ok(methods) = HeaderValue::from_str(&self.allow_methods_value()) {
            headers.insert(ACCESS_CONTROL_ALLOW_METHODS, methods);
        }

        // Any request header is allowed; echo the list back normalized.
        if let Some(requested) = request_headers {
            let names = requested
                .split(',')
                .map(|name| name.trim().to_ascii_lowercase())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !names.is_empty() {
                let value = HeaderValue::from_str(&names)
                    .map_err(|_| CorsRejection::MalformedHeaders(requested.to_string()))?;
                headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, value);
            }
        }

        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from(self.max_age));
        Ok(headers)
    }

    /// Adds `Vary` and, for allowed origins, the allow-origin header.
    pub fn apply(&self, origin: Option<&str>, headers: &mut HeaderMap) {
        headers.insert(VARY, HeaderValue::from_static("Origin"));
        if let Some(extra) = self.actual_headers(origin) {
            headers.extend(extra);
        }
    }

    fn allow_methods_value(&self) -> String {
        self.allowed_methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Origin, requested method and requested headers of a preflight.
pub fn preflight_request(headers: &HeaderMap) -> (Option<&str>, Option<&str>, Option<&str>) {
    (
        header_str(headers, &ORIGIN),
        header_str(headers, &ACCESS_CONTROL_REQUEST_METHOD),
        header_str(headers, &ACCESS_CONTROL_REQUEST_HEADERS),
    )
}

/// `scheme://host[:port]` with case folded and default ports dropped.
/// Opaque origins (`null`) and anything carrying a path never normalize.
fn normalize_origin(origin: &str) -> Option<String> {
    let trimmed = origin.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).ok()?;

    if url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
    {
        return None;
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(origin.ascii_serialization())
}
