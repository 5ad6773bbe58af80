//! Request authorization middleware.
//!
//! 保護対象の全ルートに対して、固定順のパイプラインを強制する:
//!
//! 1. `Authorization: Bearer <token>` の抽出
//! 2. TokenVerifier による検証
//! 3. ResourceResolver による `Action { resource, method }` の解決
//! 4. Authorizer への可否問い合わせ (request-scoped span の中で)
//! 5. 成功時のみ `AuthzToken` を extensions に入れて next へ
//!
//! どの段階の失敗も即座に固定の JSON エラー応答へ写像される (fail closed、
//! リトライ無し)。token の発行やポリシーの中身はこの層の関心外。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Extensions, Request, header},
    middleware::{self, Next},
    response::Response,
};
use tracing::Instrument;

use crate::middleware::authz::error::AuthzError;
use crate::middleware::http::REQUEST_ID_HEADER;
use crate::services::auth::{Token, TokenVerifier};
use crate::services::authz::{Authorizer, Decision, ResourceResolver};

/// Extensions entry holding the verified token for downstream handlers.
///
/// Present if and only if the whole pipeline succeeded for this request.
#[derive(Debug, Clone)]
pub struct AuthzToken(pub Token);

/// The middleware's collaborators. Cheap to clone; the shared instances are
/// immutable and serve every in-flight request concurrently.
#[derive(Clone)]
pub struct AuthzMiddleware {
    pub verifier: Arc<dyn TokenVerifier>,
    pub resolver: Arc<dyn ResourceResolver>,
    pub authz: Arc<dyn Authorizer>,
}

impl AuthzMiddleware {
    /// Wrap `router` so every route in it runs the authorization pipeline.
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self, authorize_request))
    }
}

/// Pure lookup of the token stored by the middleware.
///
/// Returns `None` when the pipeline did not run (or did not succeed) for
/// this request; performs no verification of its own.
pub fn request_token(extensions: &Extensions) -> Option<&Token> {
    extensions.get::<AuthzToken>().map(|t| &t.0)
}

async fn authorize_request(
    State(mw): State<AuthzMiddleware>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Set by the HTTP-level stack (or the client); echoed in error bodies.
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    match run_pipeline(&mw, req, request_id.as_deref()).await {
        Ok((mut req, token)) => {
            req.extensions_mut().insert(AuthzToken(token));
            next.run(req).await
        }
        Err(err) => err.into_response_with_request_id(request_id),
    }
}

/// The ordered pipeline. Stops at the first failing stage; never retries.
async fn run_pipeline(
    mw: &AuthzMiddleware,
    req: Request<Body>,
    request_id: Option<&str>,
) -> Result<(Request<Body>, Token), AuthzError> {
    // 1. Extract the credential.
    let raw = bearer_token(&req).ok_or(AuthzError::CredentialMissing)?;

    // 2. Verify it. The cause stays server-side.
    let token = mw.verifier.verify(raw).map_err(|err| {
        tracing::warn!(error = ?err, "access token verification failed");
        AuthzError::CredentialInvalid(err)
    })?;

    // 3. Resolve the action. Resolver failure is a server fault, not the
    //    caller's.
    let action = mw.resolver.resolve(&req).map_err(|err| {
        tracing::error!(error = ?err, "resource resolution failed");
        AuthzError::ResolutionFailed(err)
    })?;

    // 4. Ask the policy engine, inside a request-scoped span so its logs
    //    carry the request context without touching the shared instance.
    let span = tracing::info_span!(
        "authorize",
        request_id = request_id.unwrap_or_default(),
        subject = %token.subject,
        resource = %action.resource,
        method = %action.method,
    );

    let decision = mw
        .authz
        .authorize(&token, &action)
        .instrument(span)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, "authorizer failure");
            AuthzError::AuthorizerInternal(err)
        })?;

    match decision {
        Decision::Allow => Ok((req, token)),
        Decision::Deny => {
            tracing::info!(
                subject = %token.subject,
                resource = %action.resource,
                method = %action.method,
                "authorization denied"
            );
            Err(AuthzError::PolicyDenied)
        }
    }
}

/// `Authorization: Bearer <token>` extraction. The scheme literal is
/// matched case-sensitively and empty tokens are rejected.
fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let auth = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}
