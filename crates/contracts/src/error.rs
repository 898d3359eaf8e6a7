use thiserror::Error;

/// Ошибки редьюсеров хранилища, которые UI показывает в строке предупреждения
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("delete of {0} was not confirmed")]
    NotConfirmed(String),

    #[error("{0}")]
    Validation(String),
}
