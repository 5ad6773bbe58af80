/*
 * Responsibility
 * - handler 向け extractor の公開インターフェース
 */
mod authz_token;

pub use authz_token::AuthzTokenExtractor;
