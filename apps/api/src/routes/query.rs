//! `GET /`: the query-parameter surface.
//!
//! `?endpoint=health` and `?endpoint=chat&message=...` answer with JSON and always
//! HTTP 200. Anything else gets the interactive HTML page.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::chat::dispatcher::{self, SERVICE_NAME};
use crate::chat::template::fill_placeholders;
use crate::state::AppState;

#[derive(Debug, Default, PartialEq)]
pub struct RootQuery {
    pub endpoint: Option<String>,
    pub message: Option<String>,
}

impl RootQuery {
    /// Picks the known parameters out of the raw pairs. A repeated parameter
    /// takes its last value; unknown ones are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = RootQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "endpoint" => query.endpoint = Some(value),
                "message" => query.message = Some(value),
                _ => {}
            }
        }
        query
    }
}

pub async fn root_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = RootQuery::from_pairs(pairs);
    match query.endpoint.as_deref() {
        Some("health") => Json(dispatcher::health()).into_response(),
        Some("chat") => {
            Json(dispatcher::chat(&state.resolver, query.message.as_deref()).await).into_response()
        }
        _ => {
            let asked = query
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty());
            let exchange = match asked {
                Some(message) => Some((message, state.resolver.resolve(message).await)),
                None => None,
            };
            Html(render_page(exchange.as_ref().map(|(q, a)| (*q, a.as_str())))).into_response()
        }
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>🤖 {title}</h1>
<p>Backend API for the portfolio chatbot.</p>
<h2>Available endpoints</h2>
<pre>
GET /?endpoint=health
  Returns API health status

GET /?endpoint=chat&amp;message=YOUR_MESSAGE
  Returns the chatbot response for the given message
</pre>
<h2>Try it</h2>
<form method="get" action="/">
<input type="text" name="message" value="{message}" placeholder="Ask about skills, projects, experience..." size="60">
<button type="submit">Send</button>
</form>
{answer}
</body>
</html>
"#;

fn render_page(exchange: Option<(&str, &str)>) -> String {
    let (message, answer) = match exchange {
        Some((question, reply)) => (
            html_escape(question),
            format!("<h2>Response</h2>\n<p>{}</p>", html_escape(reply)),
        ),
        None => (String::new(), String::new()),
    };
    fill_placeholders(PAGE_TEMPLATE, |key| match key {
        "title" => Some(SERVICE_NAME),
        "message" => Some(message.as_str()),
        "answer" => Some(answer.as_str()),
        _ => None,
    })
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_parameter_takes_last_value() {
        let pairs = vec![
            ("endpoint".to_string(), "chat".to_string()),
            ("message".to_string(), "hi".to_string()),
            ("utm_source".to_string(), "mail".to_string()),
            ("message".to_string(), "skills".to_string()),
        ];
        assert_eq!(
            RootQuery::from_pairs(pairs),
            RootQuery {
                endpoint: Some("chat".to_string()),
                message: Some("skills".to_string()),
            }
        );
    }

    #[test]
    fn test_page_without_exchange_has_no_response_section() {
        let page = render_page(None);
        assert!(page.contains("Portfolio Chatbot API"));
        assert!(page.contains("<form"));
        assert!(!page.contains("<h2>Response</h2>"));
        assert!(!page.contains("{answer}"));
    }

    #[test]
    fn test_page_escapes_visitor_input() {
        let page = render_page(Some(("<script>alert(1)</script>", "a & b")));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &amp; b"));
    }

    #[test]
    fn test_placeholder_text_in_question_stays_literal() {
        let page = render_page(Some(("{answer}", "Hello there")));
        assert!(page.contains(r#"value="{answer}""#));
        assert_eq!(page.matches("<h2>Response</h2>").count(), 1);
        assert!(page.contains("<p>Hello there</p>"));
    }
}
