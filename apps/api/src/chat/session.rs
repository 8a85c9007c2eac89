//! Per-session chat transcripts, kept in memory only.
//!
//! Each `ChatSession` is owned by the registry and only ever touched through it;
//! sessions never share transcripts. The registry lock is held for map access only,
//! never across a completion call.
//!
//! The registry is bounded: idle sessions expire, the number of live sessions is
//! capped (least recently active evicted first), and transcripts keep only their
//! most recent messages.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::chat::{ChatMessage, Role, SessionView};

/// Oldest messages beyond this are dropped from a transcript.
pub const MAX_TRANSCRIPT_MESSAGES: usize = 100;

#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    pub idle_ttl: Duration,
    pub max_sessions: usize,
    pub max_messages: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
            max_sessions: 1_000,
            max_messages: MAX_TRANSCRIPT_MESSAGES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_active: now,
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Appends a user question and the reply it got, in that order, keeping at
    /// most `max_messages` of the newest messages.
    pub fn record_exchange(&mut self, question: &str, reply: &str, max_messages: usize) {
        self.transcript.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
        });
        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            content: reply.to_string(),
        });
        if self.transcript.len() > max_messages {
            let excess = self.transcript.len() - max_messages;
            self.transcript.drain(..excess);
        }
        self.last_active = Utc::now();
    }

    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.last_active > ttl,
            Err(_) => false,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            created_at: self.created_at,
            messages: self.transcript().to_vec(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::default(),
            limits,
        }
    }

    /// Starts a session, first dropping idle ones and, at capacity, the least
    /// recently active.
    pub async fn create(&self) -> SessionView {
        let session = ChatSession::new();
        let view = session.view();

        let mut sessions = self.sessions.write().await;
        Self::purge_idle(&mut sessions, Utc::now(), self.limits.idle_ttl);
        while !sessions.is_empty() && sessions.len() >= self.limits.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.last_active)
                .map(|s| s.id)
            else {
                break;
            };
            sessions.remove(&oldest);
            debug!(session_id = %oldest, "Evicted least recently active session");
        }
        sessions.insert(session.id, session);
        view
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.live(id).await.is_some()
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionView> {
        self.live(id).await
    }

    /// Records an exchange on session `id`. Returns false if the session is gone
    /// or has expired.
    pub async fn record_exchange(&self, id: Uuid, question: &str, reply: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(session) if !session.is_idle(Utc::now(), self.limits.idle_ttl) => {
                session.record_exchange(question, reply, self.limits.max_messages);
                true
            }
            Some(_) => {
                sessions.remove(&id);
                false
            }
            None => false,
        }
    }

    /// Ends a session, discarding its transcript.
    pub async fn end(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops every session idle at `now`. Returns how many were removed.
    pub async fn purge_idle_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::purge_idle(&mut sessions, now, self.limits.idle_ttl)
    }

    /// Periodically purges idle sessions so expired transcripts are freed even
    /// when no new sessions are being created.
    pub fn spawn_idle_sweeper(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                store.purge_idle_at(Utc::now()).await;
            }
        })
    }

    async fn live(&self, id: Uuid) -> Option<SessionView> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .filter(|s| !s.is_idle(Utc::now(), self.limits.idle_ttl))
            .map(ChatSession::view)
    }

    fn purge_idle(
        sessions: &mut HashMap<Uuid, ChatSession>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, ttl));
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, "Purged idle sessions");
        }
        removed
    }
}
