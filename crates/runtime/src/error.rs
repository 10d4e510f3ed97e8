//! Runtime error types.

use game_core::AgentId;

/// Convenience alias used across the runtime API.
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),

    #[error("no enemy archetype named '{0}'")]
    UnknownArchetype(String),

    #[error("no patrol route named '{0}'")]
    UnknownRoute(String),

    #[error("no player has been spawned")]
    PlayerNotSpawned,

    #[error("content error: {0}")]
    Content(#[from] anyhow::Error),
}
