/*
 * Responsibility
 * - 認可 (authorization) の契約と既定実装の公開インターフェース
 * - 契約 (Action / Decision / Authorizer / ResourceResolver) は core、
 *   scope ベースの既定 authorizer は scope に置く
 */
mod core;
mod scope;

pub use self::core::{
    Action, Authorizer, Decision, PolicyError, ResolveError, ResolveFn, ResourceResolver,
};
pub use self::scope::{SCOPE_ALL, ScopeAuthorizer};
