/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A referential constraint or a concurrent change blocked the write.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}
