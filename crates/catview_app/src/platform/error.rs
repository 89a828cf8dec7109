/// Failures that stop the viewer before or while the window runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid service address: {0}")]
    Config(#[from] url::ParseError),
    #[error("window failed: {0}")]
    Ui(#[from] iced::Error),
}
