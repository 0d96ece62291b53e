use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Every invoked strategy failed to reach the store. Hosts should map
    /// this to a "search temporarily unavailable" response, not a generic
    /// failure.
    #[error("search temporarily unavailable")]
    StoreUnavailable,

    #[error("store error: {0}")]
    Store(#[from] cardex_store::StoreError),

    #[error("{0}")]
    Other(String),
}
