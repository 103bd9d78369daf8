//! Per-domain relevance classification.
//!
//! Every [`CanonicalDomain`](crate::domain::CanonicalDomain) owns one [`DomainPolicy`]. A
//! record is [`Relevant`](Relevance::Relevant) when its score is at or above the policy
//! threshold. The comparison is exact IEEE `>=` with no tolerance, so a score equal to the
//! threshold is relevant.

pub mod classifier;
pub mod error;
pub mod policy;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::{ThresholdClassifier, classify};
pub use error::ScoringError;
pub use policy::{DomainPolicy, PolicyTable};
pub use types::Relevance;
