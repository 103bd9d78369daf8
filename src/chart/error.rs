use thiserror::Error;

use crate::domain::DomainError;
use crate::layout::LayoutError;
use crate::scoring::ScoringError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error(transparent)]
    UnmappedDomain(#[from] DomainError),

    #[error(transparent)]
    EmptyInput(#[from] LayoutError),

    #[error(transparent)]
    MissingPolicy(#[from] ScoringError),
}

impl AssemblyError {
    /// Short machine-readable kind, used in response headers.
    pub fn kind(&self) -> &'static str {
        match self {
            AssemblyError::UnmappedDomain(_) => "unmapped_domain",
            AssemblyError::EmptyInput(_) => "empty_input",
            AssemblyError::MissingPolicy(_) => "missing_policy",
        }
    }
}
