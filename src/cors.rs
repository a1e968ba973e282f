use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::Method;
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::{Error, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Requested-With, Accept, Origin";
const MAX_AGE_SECS: &str = "86400";

/// Which origins may read responses, from `CORS_ALLOWED_ORIGINS`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// `*`, the default.
    #[default]
    Any,
    /// Reflect whatever `Origin` the request carries.
    Mirror,
    /// Exact-match allow-list.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Unset, blank or `*` means any origin; `echo` mirrors; anything else is a
    /// comma-separated list.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).unwrap_or_default();
        match raw {
            "" | "*" => AllowedOrigins::Any,
            r if r.eq_ignore_ascii_case("echo") => AllowedOrigins::Mirror,
            r => {
                let origins: Vec<String> = r
                    .split(',')
                    .map(|o| o.trim().trim_end_matches('/'))
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                if origins.is_empty() {
                    AllowedOrigins::Any
                } else {
                    AllowedOrigins::List(origins)
                }
            }
        }
    }

    fn allow_origin(&self, origin: Option<&HeaderValue>) -> Option<HeaderValue> {
        match self {
            AllowedOrigins::Any => Some(HeaderValue::from_static("*")),
            AllowedOrigins::Mirror => {
                Some(origin.cloned().unwrap_or_else(|| HeaderValue::from_static("*")))
            }
            AllowedOrigins::List(list) => {
                let origin = origin?;
                let value = origin.to_str().ok()?;
                list.iter().any(|o| o == value).then(|| origin.clone())
            }
        }
    }

    /// Writes the CORS headers for a request carrying `origin`.
    ///
    /// A request from an origin outside the list gets no `Allow-Origin`, which
    /// the browser treats as a refusal.
    pub fn apply(&self, headers: &mut HeaderMap, origin: Option<&HeaderValue>) {
        if let Some(value) = self.allow_origin(origin) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        if *self != AllowedOrigins::Any {
            headers.insert(header::VARY, HeaderValue::from_static("Origin"));
        }
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(MAX_AGE_SECS),
        );
    }
}

pub struct CorsMiddleware<S> {
    service: S,
    policy: Arc<AllowedOrigins>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let policy = Arc::clone(&self.policy);
        let origin = req.headers().get(header::ORIGIN).cloned();

        // Preflight never reaches the routes
        if req.method() == Method::OPTIONS {
            let mut response = HttpResponse::NoContent().finish();
            policy.apply(response.headers_mut(), origin.as_ref());
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            policy.apply(res.headers_mut(), origin.as_ref());
            Ok(res.map_into_left_body())
        })
    }
}

/// Middleware answering preflight requests and decorating every response with
/// CORS headers.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: Arc<AllowedOrigins>,
}

impl Cors {
    pub fn new(policy: AllowedOrigins) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware {
            service,
            policy: Arc::clone(&self.policy),
        }))
    }
}
