//! Failure taxonomy of the authorization pipeline and its wire mapping.
//!
//! どの段階で落ちたかをタグ付きで持ち、client へ返す status / message は
//! ここで固定する。server 側起因 (resolution / authorizer) の詳細は source
//! としてログにだけ出し、応答 body には決して載せない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::ErrorEnvelope;
use crate::services::auth::VerifyError;
use crate::services::authz::{PolicyError, ResolveError};

/// Everything that can terminate the authorization pipeline early.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No usable `Authorization: Bearer <token>` header.
    #[error("missing or invalid auth header")]
    CredentialMissing,

    /// The token failed verification.
    #[error("invalid jwt")]
    CredentialInvalid(#[source] VerifyError),

    /// The resource resolver could not identify the target.
    #[error("resource resolution failed")]
    ResolutionFailed(#[source] ResolveError),

    /// The policy engine answered: deny.
    #[error("unauthorized")]
    PolicyDenied,

    /// The policy engine could not answer.
    #[error("authorizer failure")]
    AuthorizerInternal(#[source] PolicyError),
}

impl AuthzError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthzError::CredentialMissing | AuthzError::CredentialInvalid(_) => {
                StatusCode::UNAUTHORIZED
            }
            AuthzError::PolicyDenied => StatusCode::FORBIDDEN,
            AuthzError::ResolutionFailed(_) | AuthzError::AuthorizerInternal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The exact client-visible message. Server-caused failures collapse
    /// into a generic text so nothing internal leaks.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthzError::CredentialMissing => "missing or invalid auth header",
            AuthzError::CredentialInvalid(_) => "invalid jwt",
            AuthzError::PolicyDenied => "unauthorized",
            AuthzError::ResolutionFailed(_) | AuthzError::AuthorizerInternal(_) => "internal error",
        }
    }

    /// Build the terminal wire response: status + JSON envelope.
    pub fn into_response_with_request_id(self, request_id: Option<String>) -> Response {
        let body = ErrorEnvelope {
            error: self.client_message().to_string(),
            request_id,
        };
        (self.status(), Json(body)).into_response()
    }
}
