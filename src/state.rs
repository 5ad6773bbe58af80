/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - verifier / authz は trait object で持ち、実装を差し替え可能にする
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenVerifier;
use crate::services::authz::Authorizer;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub authz: Arc<dyn Authorizer>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn TokenVerifier>, authz: Arc<dyn Authorizer>) -> Self {
        Self { verifier, authz }
    }
}
