use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::middleware::authz::request_token;
use crate::services::auth::Token;

/// Handler 側で検証済み Token を受け取るための extractor。
/// authz middleware が Token を request extensions に insert 済みである前提。
/// 見つからない場合は 401 (ミドルウェア未適用のルートから使われたケース)。
pub struct AuthzTokenExtractor(pub Token);

impl<S> FromRequestParts<S> for AuthzTokenExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        request_token(&parts.extensions)
            .cloned()
            .map(AuthzTokenExtractor)
            .ok_or(AppError::Unauthorized)
    }
}
