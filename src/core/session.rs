use crate::core::engine::MatchEngine;
use std::collections::HashMap;

/// Keeps one isolated engine per scoring session.
///
/// Mutable access goes through `&mut self`, so each session has a single writer.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, MatchEngine>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session's engine, creating an empty one on first use.
    pub fn session_mut(&mut self, key: &str) -> &mut MatchEngine {
        self.sessions.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!("Opening scoring session '{}'", key);
            MatchEngine::new()
        })
    }

    pub fn session(&self, key: &str) -> Option<&MatchEngine> {
        self.sessions.get(key)
    }

    pub fn close(&mut self, key: &str) -> Option<MatchEngine> {
        self.sessions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
