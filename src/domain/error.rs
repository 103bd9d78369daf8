use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The label is not in the legacy lookup table.
    #[error("unmapped domain label '{label}'")]
    Unmapped { label: String },
}
