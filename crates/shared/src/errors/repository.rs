use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Raised from inside the order transaction; `product` is the product name,
    /// or "Unknown Product" when the id did not resolve.
    #[error("Not enough stock for {product}")]
    StockShortage { product: String },

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a unique-constraint violation to `AlreadyExists`, everything else to `Sqlx`.
    pub fn from_unique(err: SqlxError, msg: &str) -> Self {
        if let SqlxError::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return RepositoryError::AlreadyExists(msg.to_string());
        }
        RepositoryError::Sqlx(err)
    }
}
