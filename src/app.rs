/*
 * Responsibility
 * - Config 読み込み → 依存生成 → Router 組み立て
 * - middleware の適用 (authz / HTTP-level)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::resolve::PathResolver;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware::authz::AuthzMiddleware;
use crate::middleware::http;
use crate::services::auth::JwtVerifier;
use crate::services::authz::ScopeAuthorizer;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,authz_gateway=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice immediately.
        // In production, prefer the default behavior (stderr) and let the server keep running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    // Build process-level services here and inject them into the shared
    // application state. The verifier holds the AS public key, parsed once.
    let verifier = JwtVerifier::new(
        &config.access_jwt_public_key_pem,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )
    .map_err(anyhow::Error::msg)?;

    Ok(AppState::new(
        Arc::new(verifier),
        Arc::new(ScopeAuthorizer::new()),
    ))
}

fn build_router(state: AppState) -> Router {
    async fn not_found() -> AppError {
        AppError::NotFound
    }

    let mw = AuthzMiddleware {
        verifier: state.verifier.clone(),
        resolver: Arc::new(PathResolver::new("/api/v1")),
        authz: state.authz.clone(),
    };

    let router = Router::new()
        .route("/health", get(api::v1::handlers::health::health))
        .nest("/api/v1", mw.apply(api::v1::routes()))
        .fallback(not_found)
        .with_state(state);

    http::apply(router)
}
