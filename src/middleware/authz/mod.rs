/*!
 * Request authorization middleware
 *
 * Responsibility:
 * - 保護対象ルートへの verify → resolve → authorize パイプラインの強制
 * - 失敗の分類と安定したエラー応答への写像 (error.rs)
 * - 検証済み Token の extensions への格納と読み出し (request_token)
 *
 * Public API:
 * - AuthzMiddleware / AuthzToken / request_token
 * - AuthzError
 */

mod core;
mod error;

pub use self::core::{AuthzMiddleware, AuthzToken, request_token};
pub use self::error::AuthzError;
