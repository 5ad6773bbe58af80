/*
 * Responsibility
 * - /user 系 handler の response DTO
 * - 内部型 (Token) と wire 形の分離
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::services::auth::Token;

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl From<&Token> for CurrentUserResponse {
    fn from(token: &Token) -> Self {
        Self {
            id: token.subject,
            issuer: token.issuer.clone(),
            scope: token.scope.clone(),
            expires_at: token.expires_at,
        }
    }
}
