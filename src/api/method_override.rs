//! Method override for HTML forms.
//!
//! Browsers only submit forms as GET or POST. A POST carrying `_method=PUT`
//! (or `DELETE`, `PATCH`) in its query string, or the equivalent
//! `X-HTTP-Method-Override` header, is rewritten to that method before routing.

use axum::extract::Request;
use axum::http::Method;
use tower::util::MapRequestLayer;
use tracing::debug;

/// Query parameter naming the intended method.
pub const METHOD_PARAM: &str = "_method";

/// Header naming the intended method when no query parameter is present.
pub const METHOD_HEADER: &str = "x-http-method-override";

/// Methods a POST may be rewritten to.
const OVERRIDABLE: [Method; 3] = [Method::PUT, Method::PATCH, Method::DELETE];

/// Layer that applies [`override_method`] to every request.
pub fn method_override_layer() -> MapRequestLayer<fn(Request) -> Request> {
    MapRequestLayer::new(override_method as fn(Request) -> Request)
}

/// Rewrite a POST request's method from its override parameter or header.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    if let Some(method) = requested_method(&req) {
        debug!(to = %method, path = %req.uri().path(), "Overriding POST method");
        *req.method_mut() = method;
    }

    req
}

fn requested_method<B>(req: &axum::http::Request<B>) -> Option<Method> {
    let from_query = req.uri().query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == METHOD_PARAM)
            .map(|(_, value)| value.into_owned())
    });

    let raw = match from_query {
        Some(value) => value,
        None => req
            .headers()
            .get(METHOD_HEADER)?
            .to_str()
            .ok()?
            .to_string(),
    };

    parse_method(&raw)
}

fn parse_method(raw: &str) -> Option<Method> {
    let method = Method::from_bytes(raw.trim().to_ascii_uppercase().as_bytes()).ok()?;
    OVERRIDABLE.contains(&method).then_some(method)
}
