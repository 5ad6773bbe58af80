/*
 * Responsibility
 * - GET /user: 検証済み Token から現在の主体情報を返す
 * - 検証・認可そのものは middleware 側の責務 (ここでは extensions を読むだけ)
 */
use axum::Json;

use crate::api::v1::dto::user::CurrentUserResponse;
use crate::api::v1::extractors::AuthzTokenExtractor;

pub async fn current_user(
    AuthzTokenExtractor(token): AuthzTokenExtractor,
) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse::from(&token))
}
