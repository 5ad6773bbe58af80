/*
 * Responsibility
 * - アクセストークン検証まわりの公開インターフェース
 * - 契約 (Token / TokenVerifier) と実装 (JwtVerifier) の re-export
 */
pub mod jwt;
pub mod verifier;

pub use jwt::JwtVerifier;
pub use verifier::{Token, TokenVerifier, VerifyError};
