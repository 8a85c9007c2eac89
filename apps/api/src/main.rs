mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::resolver::ResponseResolver;
use crate::chat::session::{SessionLimits, SessionStore, MAX_TRANSCRIPT_MESSAGES};
use crate::config::Config;
use crate::llm_client::{ChatCompleter, LlmClient};
use crate::profile::{canonical_profile, PortfolioProfile};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio Chatbot API v{}", env!("CARGO_PKG_VERSION"));

    let profile = Arc::new(match &config.profile_path {
        Some(path) => {
            let profile = PortfolioProfile::from_json_file(path)?;
            info!("Loaded portfolio profile from {}", path.display());
            profile
        }
        None => canonical_profile(),
    });
    info!(
        "Portfolio profile: {} ({} projects)",
        profile.name,
        profile.projects.len()
    );

    let completer: Option<Arc<dyn ChatCompleter>> = match &config.nvidia_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_api_url.clone(), config.llm_timeout)?;
            info!(
                "LLM client initialized (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.llm_timeout
            );
            Some(Arc::new(llm))
        }
        None => {
            warn!("NVIDIA_API_KEY is not set; all replies will use keyword fallback responses");
            None
        }
    };

    let resolver = ResponseResolver::new(profile.clone(), completer);
    let sessions = SessionStore::new(SessionLimits {
        idle_ttl: config.session_idle_ttl,
        max_sessions: config.max_sessions,
        max_messages: MAX_TRANSCRIPT_MESSAGES,
    });
    sessions.spawn_idle_sweeper(config.session_idle_ttl.min(Duration::from_secs(60)));
    let state = AppState::new(profile, resolver, sessions);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
