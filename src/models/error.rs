#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage read failed: {0}")]
    StorageRead(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Invalid theme: {0:?}")]
    InvalidTheme(String),

    #[error("Document unavailable")]
    DocumentUnavailable,

    #[error("DOM error: {0}")]
    Dom(String),
}
