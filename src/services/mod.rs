/*
 * Responsibility
 * - services の公開インターフェース (module 宣言のみ)
 */
pub mod auth;
pub mod authz;
