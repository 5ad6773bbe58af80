/*
 * Responsibility
 * - middleware の公開インターフェース (module 宣言のみ)
 */
pub mod authz;
pub mod http;
