use feed_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        error: std::io::Error,
    },
}
