/*
 * Responsibility
 * - 検証済みアクセストークンの型 (Token) と検証の契約 (TokenVerifier)
 * - 実装 (jwt.rs) と middleware の間の境界をここで固定する
 */
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A verified access token, as seen by the rest of the application.
///
/// - `subject` is the authenticated principal (project convention: UUID).
/// - `scope` keeps the raw space-separated scope string; deciding what it
///   grants belongs to the authorizer, not to this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub subject: Uuid,
    pub issuer: String,
    pub expires_at: DateTime<Utc>,
    pub scope: Option<String>,
    pub jti: Option<String>,
}

/// Errors returned by token verification.
///
/// Every variant means "this credential is invalid". Callers log the detail
/// server-side and answer with a generic 401; nothing here reaches clients.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("invalid claims: {0}")]
    Claims(&'static str),
}

/// Token verification contract.
///
/// Implementations must be safe for concurrent read-only use by many
/// simultaneous requests.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, raw: &str) -> Result<Token, VerifyError>;
}
