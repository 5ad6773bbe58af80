//! Authorization contracts shared by the middleware and the policy engines.
//!
//! This module is deliberately contracts-only: no HTTP status codes, no
//! response bodies. The middleware owns the wire mapping.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use thiserror::Error;

use crate::services::auth::Token;

/// What a request is attempting: a (resource, method) pair.
///
/// Produced fresh per request by a [`ResourceResolver`]; it has no identity
/// beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub resource: String,
    pub method: String,
}

impl Action {
    pub fn new(resource: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            method: method.into(),
        }
    }
}

/// Authorization outcome for a single (token, action) pair.
///
/// Engine failures are NOT an outcome; they travel as `Err(PolicyError)` so
/// callers can tell "denied" apart from "could not decide".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Policy-engine failures (not denials).
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy backend error: {0}")]
    Backend(String),
    #[error("policy evaluation error: {0}")]
    Evaluation(String),
}

/// Policy decision contract: may this subject perform this action?
///
/// Implementations must be safe for concurrent read-only use. Per-request
/// context (request id etc.) arrives via the ambient tracing span, never by
/// mutating the shared instance.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, token: &Token, action: &Action) -> Result<Decision, PolicyError>;
}

/// Resource-resolution failures.
///
/// Identifying the resource is the server's job; the middleware maps any of
/// these to a generic 500, never to an auth failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot identify resource for path: {0}")]
    UnknownPath(String),
}

/// Maps a request to the [`Action`] it attempts. Pluggable per route group.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, req: &Request<Body>) -> Result<Action, ResolveError>;
}

/// Adapter turning a plain function or closure into a [`ResourceResolver`],
/// the shape ad-hoc route groups and tests usually want.
pub struct ResolveFn<F>(pub F);

impl<F> ResourceResolver for ResolveFn<F>
where
    F: Fn(&Request<Body>) -> Result<Action, ResolveError> + Send + Sync,
{
    fn resolve(&self, req: &Request<Body>) -> Result<Action, ResolveError> {
        (self.0)(req)
    }
}
