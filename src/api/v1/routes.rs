/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ここに並ぶ route は全て authz middleware の内側 (適用は app.rs)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::user::current_user;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/user", get(current_user))
}
