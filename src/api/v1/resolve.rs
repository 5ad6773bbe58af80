//! Default resource resolution for the v1 API.
//!
//! リソース識別は URL 構造から機械的に導出する: mount prefix を除いた path
//! segment を `:` で連結して resource 名とする。
//! (`GET /api/v1/users/123` → resource `users:123`, method `GET`)
//!
//! ルートグループに固有のルールが必要なら `ResolveFn` で差し替える。

use axum::body::Body;
use axum::extract::OriginalUri;
use axum::http::Request;

use crate::services::authz::{Action, ResolveError, ResourceResolver};

/// Derives `Action { resource, method }` from the request path.
#[derive(Debug, Clone)]
pub struct PathResolver {
    prefix: String,
}

impl PathResolver {
    /// `prefix` is the mount point to strip, e.g. `/api/v1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ResourceResolver for PathResolver {
    fn resolve(&self, req: &Request<Body>) -> Result<Action, ResolveError> {
        // Inside a nested router the plain uri is already stripped; prefer
        // the original one so the prefix rule stays uniform.
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|uri| uri.0.path())
            .unwrap_or_else(|| req.uri().path());

        let rest = path.strip_prefix(self.prefix.as_str()).unwrap_or(path);

        let resource = rest
            .split('/')
            .filter(|seg| !seg.is_empty())
            .collect::<Vec<_>>()
            .join(":");

        if resource.is_empty() {
            return Err(ResolveError::UnknownPath(path.to_string()));
        }

        Ok(Action::new(resource, req.method().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Method;

    use super::*;

    fn get(path: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn joins_path_segments_with_colons() {
        let action = PathResolver::new("/api/v1")
            .resolve(&get("/api/v1/users/123"))
            .unwrap();
        assert_eq!(action, Action::new("users:123", "GET"));
    }

    #[test]
    fn ignores_query_strings() {
        let action = PathResolver::new("/api/v1")
            .resolve(&get("/api/v1/users?page=2"))
            .unwrap();
        assert_eq!(action, Action::new("users", "GET"));
    }

    #[test]
    fn keeps_unprefixed_paths_whole() {
        let action = PathResolver::new("/api/v1").resolve(&get("/user")).unwrap();
        assert_eq!(action, Action::new("user", "GET"));
    }

    #[test]
    fn prefers_the_original_uri_when_nested() {
        let mut req = get("/user");
        req.extensions_mut()
            .insert(OriginalUri("/api/v1/user".parse().unwrap()));

        let action = PathResolver::new("/api/v1").resolve(&req).unwrap();
        assert_eq!(action, Action::new("user", "GET"));
    }

    #[test]
    fn empty_remainder_is_an_error() {
        assert!(matches!(
            PathResolver::new("/api/v1").resolve(&get("/api/v1/")),
            Err(ResolveError::UnknownPath(_))
        ));
        assert!(matches!(
            PathResolver::new("/api/v1").resolve(&get("/api/v1")),
            Err(ResolveError::UnknownPath(_))
        ));
    }

    #[test]
    fn carries_the_request_method() {
        let req = Request::builder()
            .method(Method::DELETE)
            .uri("/api/v1/users/7")
            .body(Body::empty())
            .unwrap();

        let action = PathResolver::new("/api/v1").resolve(&req).unwrap();
        assert_eq!(action.method, "DELETE");
    }
}
