use thiserror::Error;

use crate::domain::CanonicalDomain;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("no policy registered for domain '{domain}'")]
    MissingPolicy { domain: CanonicalDomain },

    #[error("invalid threshold {threshold} for domain '{domain}': must be finite")]
    InvalidThreshold {
        domain: CanonicalDomain,
        threshold: f64,
    },
}
