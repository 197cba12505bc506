//! Agent delegate boundary and the ReAct implementation.

pub mod conversation;
pub mod delegate;
pub mod prompt;
pub mod react;

pub use conversation::Conversation;
pub use delegate::{AgentDelegate, PromptInspection};
pub use react::ReActAgent;
