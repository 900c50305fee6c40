//! Cross-origin resource sharing.
//!
//! Every response, including preflights, carries the policy's
//! allow-origin, allow-methods and allow-headers headers. Any `OPTIONS`
//! request is answered here with `204 No Content` and never reaches a route.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
        HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::CorsConfig;

#[derive(Debug, Error)]
pub enum CorsError {
    #[error("\"*\" cannot be combined with explicit origins")]
    MixedWildcard,
    #[error("invalid origin {0:?}")]
    Origin(String),
    #[error("invalid method {0:?}")]
    Method(String),
    #[error("invalid header name {0:?}")]
    Header(String),
}

impl CorsError {
    /// Configuration key the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            CorsError::MixedWildcard | CorsError::Origin(_) => "cors.allowed_origins",
            CorsError::Method(_) => "cors.allowed_methods",
            CorsError::Header(_) => "cors.allowed_headers",
        }
    }
}

/// Which origins may read responses.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Cross-origin policy applied to every response.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
    methods: HeaderValue,
    headers: HeaderValue,
}

impl CorsPolicy {
    /// Any origin; `GET, POST, OPTIONS`; `Content-Type`.
    pub fn permissive() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            methods: HeaderValue::from_static("GET, POST, OPTIONS"),
            headers: HeaderValue::from_static("Content-Type"),
        }
    }

    /// Build a policy, rejecting anything that cannot be sent as a header.
    /// Config validation goes through here too.
    pub fn from_config(config: &CorsConfig) -> Result<Self, CorsError> {
        let origins = if config.allowed_origins.iter().any(|o| o == "*") {
            if config.allowed_origins.len() > 1 {
                return Err(CorsError::MixedWildcard);
            }
            AllowedOrigins::Any
        } else {
            let list = config
                .allowed_origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o)
                        .ok()
                        .filter(|_| !o.is_empty())
                        .ok_or_else(|| CorsError::Origin(o.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowedOrigins::List(list)
        };

        for method in &config.allowed_methods {
            Method::from_bytes(method.as_bytes()).map_err(|_| CorsError::Method(method.clone()))?;
        }
        for header in &config.allowed_headers {
            HeaderName::from_bytes(header.as_bytes()).map_err(|_| CorsError::Header(header.clone()))?;
        }

        let methods = config.allowed_methods.join(", ");
        let headers = config.allowed_headers.join(", ");
        Ok(Self {
            origins,
            methods: HeaderValue::from_str(&methods).map_err(|_| CorsError::Method(methods.clone()))?,
            headers: HeaderValue::from_str(&headers).map_err(|_| CorsError::Header(headers.clone()))?,
        })
    }

    /// Value for `Access-Control-Allow-Origin`, if the origin is allowed.
    fn allow_origin(&self, request_origin: Option<&HeaderValue>) -> Option<HeaderValue> {
        match &self.origins {
            AllowedOrigins::Any => Some(HeaderValue::from_static("*")),
            AllowedOrigins::List(list) => request_origin
                .filter(|origin| list.contains(origin))
                .cloned(),
        }
    }

    /// Write the policy's headers into a response.
    pub fn apply(&self, request_origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        if let Some(origin) = self.allow_origin(request_origin) {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        if matches!(self.origins, AllowedOrigins::List(_)) {
            headers.append(VARY, HeaderValue::from_static("origin"));
        }
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.headers.clone());
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    policy.apply(origin.as_ref(), response.headers_mut());
    response
}
