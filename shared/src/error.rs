use thiserror::Error;

/// Raised by a [`CollapsibleHandle`](crate::CollapsibleHandle) whose
/// element is not (or no longer) mounted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("panel element is not mounted")]
    Unresolved,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid accordion config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSS length `{0}`")]
    InvalidLength(String),
    #[error("unknown icon position `{0}`")]
    UnknownIconPosition(String),
    #[error("icon rotation must be below 360 degrees, got {0}")]
    InvalidRotation(u16),
}
