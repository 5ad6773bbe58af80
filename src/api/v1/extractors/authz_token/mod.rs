/*!
 * AuthzTokenExtractor (handler-facing)
 *
 * Responsibility:
 * - middleware が extensions に入れた検証済み Token を handler の引数として
 *   取り出す
 *
 * Public API:
 * - AuthzTokenExtractor
 */

mod core;

pub use self::core::AuthzTokenExtractor;
