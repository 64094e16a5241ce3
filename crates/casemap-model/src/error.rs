use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown unmapped action: {0} (expected skip, use_original or use_default)")]
    UnknownUnmappedAction(String),
    #[error("unknown mapped field: {0} (expected update_type or event_type)")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
