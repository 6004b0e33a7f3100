pub type TickframeResult<T> = Result<T, TickframeError>;

#[derive(thiserror::Error, Debug)]
pub enum TickframeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("unknown style '{name}' (available: {})", available.join(", "))]
    UnknownStyle {
        name: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TickframeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
