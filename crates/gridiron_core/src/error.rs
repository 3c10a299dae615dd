use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no archetype resolvable for {0}")]
    ArchetypeNotFound(String),

    #[error("invalid archetype {id}: {reason}")]
    InvalidArchetype { id: String, reason: String },

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("roster store error: {0}")]
    Store(String),

    #[error("history error: {0}")]
    History(String),

    #[error("depth chart error: {0}")]
    DepthChart(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
