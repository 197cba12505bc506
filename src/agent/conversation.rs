//! Chat memory kept across turns.

use crate::types::ModelMessage;

/// Completed user/assistant exchanges, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ModelMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished turn.
    pub fn add_exchange(&mut self, user: ModelMessage, assistant: ModelMessage) {
        self.messages.push(user);
        self.messages.push(assistant);
    }

    pub fn messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
