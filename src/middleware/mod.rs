/// HTTP middleware utilities for blog-service
///
/// Provides JWT bearer-token authentication in two flavors: a scope-level
/// middleware for resources that require authentication on every method
/// (the follow endpoints), and a `UserId` extractor for individual write
/// handlers on otherwise-public resources.
pub mod permissions;

pub use permissions::*;

use crate::auth;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::HeaderMap;
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

/// Authenticated user identifier, resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct UserId(pub Uuid);

fn authenticate(headers: &HeaderMap) -> Result<UserId, Error> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid Authorization scheme"))?;

    let claims = auth::validate_token(token)
        .map_err(|_| ErrorUnauthorized("Invalid or expired token"))?;

    let user_id = Uuid::parse_str(&claims.claims.sub)
        .map_err(|_| ErrorUnauthorized("Invalid user ID"))?;

    Ok(UserId(user_id))
}

/// Actix middleware that rejects any request without a valid bearer token.
///
/// Wrapped around scopes where even safe methods require authentication.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let user_id = authenticate(req.headers())?;
            req.extensions_mut().insert(user_id);

            service.call(req).await
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        // Routes behind JwtAuthMiddleware already carry the identity in the
        // request extensions; elsewhere the extractor authenticates itself.
        let cached = req.extensions().get::<UserId>().cloned();
        match cached {
            Some(user_id) => ready(Ok(user_id)),
            None => ready(authenticate(req.headers())),
        }
    }
}
