//! Coarse scope-based authorizer.
//!
//! ポリシーは意図的に小さい: token の space 区切り scope entry が要求された
//! resource をカバーしているかどうかだけを見る。これ以上細かい判断は、同じ
//! trait の後ろに居る本物のポリシーエンジンの仕事。

use async_trait::async_trait;

use crate::services::auth::Token;
use crate::services::authz::core::{Action, Authorizer, Decision, PolicyError};

/// Scope entry granting access to everything.
pub const SCOPE_ALL: &str = "*";

/// Default authorizer: allows when some scope entry covers the resource.
///
/// Covers means:
/// - the entry is `*`, or
/// - the entry equals the resource exactly, or
/// - the entry ends in `:*` and its prefix matches whole leading segments
///   of the resource (`foo:*` covers `foo:bar`, not `foobar`).
#[derive(Debug, Clone, Default)]
pub struct ScopeAuthorizer;

impl ScopeAuthorizer {
    pub fn new() -> Self {
        Self
    }

    fn covers(entry: &str, resource: &str) -> bool {
        if entry == SCOPE_ALL || entry == resource {
            return true;
        }
        if let Some(prefix) = entry.strip_suffix(":*") {
            return resource
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(':'));
        }
        false
    }
}

#[async_trait]
impl Authorizer for ScopeAuthorizer {
    async fn authorize(&self, token: &Token, action: &Action) -> Result<Decision, PolicyError> {
        let Some(scope) = token.scope.as_deref() else {
            return Ok(Decision::Deny);
        };

        let allowed = scope
            .split_whitespace()
            .any(|entry| Self::covers(entry, &action.resource));

        Ok(if allowed { Decision::Allow } else { Decision::Deny })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use uuid::Uuid;

    use super::*;

    fn token(scope: Option<&str>) -> Token {
        Token {
            subject: Uuid::new_v4(),
            issuer: "bar".into(),
            expires_at: DateTime::from_timestamp(4101104069, 0).unwrap(),
            scope: scope.map(str::to_owned),
            jti: None,
        }
    }

    async fn decide(scope: Option<&str>, resource: &str) -> Decision {
        ScopeAuthorizer::new()
            .authorize(&token(scope), &Action::new(resource, "GET"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn catch_all_entry_allows_anything() {
        assert_eq!(decide(Some("*"), "foo:bar").await, Decision::Allow);
    }

    #[tokio::test]
    async fn exact_entry_allows() {
        assert_eq!(decide(Some("foo:bar"), "foo:bar").await, Decision::Allow);
    }

    #[tokio::test]
    async fn any_entry_in_the_list_counts() {
        assert_eq!(decide(Some("aaa bbb foo:bar"), "foo:bar").await, Decision::Allow);
    }

    #[tokio::test]
    async fn wildcard_entry_covers_deeper_segments() {
        assert_eq!(decide(Some("foo:*"), "foo:bar").await, Decision::Allow);
        assert_eq!(decide(Some("foo:*"), "foo:bar:baz").await, Decision::Allow);
    }

    #[tokio::test]
    async fn wildcard_entry_respects_segment_boundaries() {
        assert_eq!(decide(Some("foo:*"), "foobar").await, Decision::Deny);
        assert_eq!(decide(Some("foo:*"), "foo").await, Decision::Deny);
    }

    #[tokio::test]
    async fn unrelated_entries_deny() {
        assert_eq!(decide(Some("posts users"), "foo:bar").await, Decision::Deny);
    }

    #[tokio::test]
    async fn absent_scope_denies() {
        assert_eq!(decide(None, "foo:bar").await, Decision::Deny);
        assert_eq!(decide(Some(""), "foo:bar").await, Decision::Deny);
    }
}
