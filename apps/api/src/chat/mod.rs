// Chat engine: prompt construction, completion call, keyword fallback, sessions.
// All completion calls go through llm_client; nothing here talks HTTP directly.

pub mod dispatcher;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod resolver;
pub mod session;
pub mod template;
