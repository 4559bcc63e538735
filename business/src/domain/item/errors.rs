#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.price_negative")]
    PriceNegative,
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
