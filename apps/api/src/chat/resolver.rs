//! Response resolver: turns a visitor message into a reply, never failing.
//!
//! Order of attempts:
//! 1. blank message → fixed prompt-for-input
//! 2. completion API (only when a credential was configured at startup)
//! 3. keyword fallback for every other outcome

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::chat::fallback::{classify, fallback_response};
use crate::chat::prompts::EMPTY_MESSAGE_PROMPT;
use crate::chat::template::system_prompt;
use crate::llm_client::{ChatCompleter, LlmError};
use crate::profile::PortfolioProfile;

/// Why a reply came from the keyword fallback instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    RemoteFailure,
    Timeout,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FallbackReason::MissingCredential => "missing_credential",
            FallbackReason::RemoteFailure => "remote_failure",
            FallbackReason::Timeout => "timeout",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Fallback(FallbackReason),
    /// Blank input; neither the model nor the fallback was consulted.
    InputPrompt,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub text: String,
    pub source: ReplySource,
}

pub struct ResponseResolver {
    profile: Arc<PortfolioProfile>,
    completer: Option<Arc<dyn ChatCompleter>>,
}

impl ResponseResolver {
    /// `completer` is `None` when no credential is configured; the resolver then
    /// answers from the keyword fallback for its whole lifetime.
    pub fn new(profile: Arc<PortfolioProfile>, completer: Option<Arc<dyn ChatCompleter>>) -> Self {
        Self { profile, completer }
    }

    /// Reply text for `message`. Always non-empty.
    pub async fn resolve(&self, message: &str) -> String {
        let resolution = self.resolve_detailed(message).await;
        debug!(source = ?resolution.source, "Resolved chat reply");
        resolution.text
    }

    /// Like `resolve`, but also reports where the reply came from.
    pub async fn resolve_detailed(&self, message: &str) -> Resolution {
        let message = message.trim();
        if message.is_empty() {
            return Resolution {
                text: EMPTY_MESSAGE_PROMPT.to_string(),
                source: ReplySource::InputPrompt,
            };
        }

        let reason = match &self.completer {
            None => FallbackReason::MissingCredential,
            Some(completer) => {
                let system = system_prompt(&self.profile);
                match completer.complete(&system, message).await {
                    Ok(text) => {
                        return Resolution {
                            text,
                            source: ReplySource::Remote,
                        }
                    }
                    Err(LlmError::Timeout(after)) => {
                        warn!("Completion API timed out after {after:?}");
                        FallbackReason::Timeout
                    }
                    Err(e) => {
                        warn!("Completion API call failed: {e}");
                        FallbackReason::RemoteFailure
                    }
                }
            }
        };

        let topic = classify(message);
        if reason == FallbackReason::MissingCredential {
            debug!(topic = ?topic, "Answering from keyword fallback");
        } else {
            warn!(reason = %reason, topic = ?topic, "Answering from keyword fallback");
        }

        Resolution {
            text: fallback_response(message, &self.profile),
            source: ReplySource::Fallback(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::llm_client::LlmClient;
    use crate::profile::canonical_profile;
    use crate::test_support::spawn_mock_api;

    struct CannedCompleter(Result<&'static str, ()>);

    #[async_trait]
    impl ChatCompleter for CannedCompleter {
        async fn complete(&self, system: &str, _user: &str) -> Result<String, LlmError> {
            assert!(system.contains("Vinoth Kumar"));
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    fn offline() -> ResponseResolver {
        ResponseResolver::new(Arc::new(canonical_profile()), None)
    }

    fn with_completer(completer: impl ChatCompleter + 'static) -> ResponseResolver {
        ResponseResolver::new(Arc::new(canonical_profile()), Some(Arc::new(completer)))
    }

    async fn with_mock_api(router: Router, timeout: Duration) -> ResponseResolver {
        let base = spawn_mock_api(router).await;
        let client = LlmClient::new(
            "nvapi-test".to_string(),
            format!("{base}/v1/chat/completions"),
            timeout,
        )
        .unwrap();
        with_completer(client)
    }

    #[tokio::test]
    async fn test_blank_message_returns_input_prompt() {
        let resolver = with_completer(CannedCompleter(Ok("should not be used")));
        for blank in ["", "   ", "\n\t"] {
            let r = resolver.resolve_detailed(blank).await;
            assert_eq!(r.source, ReplySource::InputPrompt);
            assert_eq!(r.text, EMPTY_MESSAGE_PROMPT);
        }
    }

    #[tokio::test]
    async fn test_missing_credential_uses_fallback() {
        let resolver = offline();
        let r = resolver.resolve_detailed("What are your SKILLS?").await;
        assert_eq!(
            r.source,
            ReplySource::Fallback(FallbackReason::MissingCredential)
        );
        assert!(r.text.contains("3+ years"));
        assert!(r.text.contains("Machine Learning"));
        assert!(r.text.contains("Python"));
    }

    #[tokio::test]
    async fn test_remote_reply_is_returned() {
        let resolver = with_completer(CannedCompleter(Ok("I work mostly in PyTorch.")));
        let r = resolver.resolve_detailed("what tools?").await;
        assert_eq!(r.source, ReplySource::Remote);
        assert_eq!(r.text, "I work mostly in PyTorch.");
    }

    #[tokio::test]
    async fn test_remote_error_converges_with_offline_fallback() {
        let resolver = with_completer(CannedCompleter(Err(())));
        let msg = "How can I contact you?";
        let r = resolver.resolve_detailed(msg).await;
        assert_eq!(r.source, ReplySource::Fallback(FallbackReason::RemoteFailure));
        assert_eq!(r.text, offline().resolve(msg).await);
    }

    #[tokio::test]
    async fn test_http_500_converges_with_offline_fallback() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let resolver = with_mock_api(router, Duration::from_secs(5)).await;

        for msg in [
            "Tell me about your projects",
            "What's your background?",
            "Do you like pizza?",
        ] {
            let r = resolver.resolve_detailed(msg).await;
            assert_eq!(r.source, ReplySource::Fallback(FallbackReason::RemoteFailure));
            assert_eq!(r.text, offline().resolve(msg).await);
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back_within_bound() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"choices": [{"message": {"content": "too late"}}]}))
            }),
        );
        let timeout = Duration::from_millis(300);
        let resolver = with_mock_api(router, timeout).await;

        let started = Instant::now();
        let r = resolver.resolve_detailed("where are you based").await;
        let elapsed = started.elapsed();

        assert_eq!(r.source, ReplySource::Fallback(FallbackReason::Timeout));
        assert_eq!(r.text, offline().resolve("where are you based").await);
        assert!(elapsed >= timeout);
        assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn test_successful_api_reply_is_trimmed() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": "\n  Happy to chat about my ML work!  \n"}}]
                }))
            }),
        );
        let resolver = with_mock_api(router, Duration::from_secs(5)).await;
        let r = resolver.resolve_detailed("hi").await;
        assert_eq!(r.source, ReplySource::Remote);
        assert_eq!(r.text, "Happy to chat about my ML work!");
    }

    #[tokio::test]
    async fn test_resolving_does_not_touch_profile() {
        let profile = Arc::new(canonical_profile());
        let resolver = ResponseResolver::new(profile.clone(), None);
        let before = serde_json::to_value(profile.as_ref()).unwrap();
        resolver.resolve("skills").await;
        resolver.resolve("contact").await;
        assert_eq!(serde_json::to_value(profile.as_ref()).unwrap(), before);
    }
}
