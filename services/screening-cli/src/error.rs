use credit_card_applications::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write screening output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to encode screening output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no frequent flyer registry configured; pass --registry or set FFN_REGISTRY_PATH")]
    MissingRegistry,
}
