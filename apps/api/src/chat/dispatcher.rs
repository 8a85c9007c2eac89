//! The two operations offered to the hosting surface: `health` and `chat`.

use crate::chat::prompts::MESSAGE_REQUIRED_ERROR;
use crate::chat::resolver::ResponseResolver;
use crate::models::chat::{now_iso8601, ChatResponse, HealthResponse};

pub const SERVICE_NAME: &str = "Portfolio Chatbot API";

/// Always healthy; checks no dependencies.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_iso8601(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Wraps the resolver in the chat contract. Missing or blank input is an
/// error response, never a fault.
pub async fn chat(resolver: &ResponseResolver, message: Option<&str>) -> ChatResponse {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => ChatResponse::success(resolver.resolve(message).await),
        None => ChatResponse::error(MESSAGE_REQUIRED_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::chat::ChatStatus;
    use crate::profile::canonical_profile;

    fn resolver() -> ResponseResolver {
        ResponseResolver::new(Arc::new(canonical_profile()), None)
    }

    #[test]
    fn test_health_is_always_healthy() {
        let h = health();
        assert_eq!(h.status, "healthy");
        assert_eq!(h.service, "Portfolio Chatbot API");
        assert_eq!(h.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_and_blank_messages() {
        let resolver = resolver();
        for message in [None, Some(""), Some("   ")] {
            let r = chat(&resolver, message).await;
            assert_eq!(r.status, ChatStatus::Error);
            assert_eq!(r.error.as_deref(), Some(MESSAGE_REQUIRED_ERROR));
            assert!(r.response.is_none());
        }
        assert_eq!(health().status, "healthy");
    }

    #[tokio::test]
    async fn test_chat_wraps_resolver_reply() {
        let resolver = resolver();
        let r = chat(&resolver, Some("what tech do you use?")).await;
        assert_eq!(r.status, ChatStatus::Success);
        assert_eq!(
            r.response.as_deref(),
            Some(resolver.resolve("what tech do you use?").await.as_str())
        );
        assert!(r.error.is_none());
    }
}
