//! Canonical domains and the legacy-label normalizer.
//!
//! The set of domains is closed: every similarity comparison belongs to exactly one
//! [`CanonicalDomain`]. Input tables carry older labels (`jobvacancy`, `Unknown`, ...),
//! which [`normalize`] maps onto the canonical set. Unknown labels are rejected rather
//! than guessed, since the domain selects the relevance threshold downstream.

pub mod error;
pub mod normalizer;


pub use error::DomainError;
pub use normalizer::{LEGACY_LABELS, normalize};

use serde::{Deserialize, Serialize};

/// One of the fixed categories a comparison can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalDomain {
    #[serde(rename = "Job Matching")]
    JobMatching,
    #[serde(rename = "Medical Suggestions")]
    MedicalSuggestions,
    #[serde(rename = "Sports Insights")]
    SportsInsights,
}

impl CanonicalDomain {
    /// Every canonical domain, in declaration order.
    pub const ALL: [CanonicalDomain; 3] = [
        CanonicalDomain::JobMatching,
        CanonicalDomain::MedicalSuggestions,
        CanonicalDomain::SportsInsights,
    ];

    /// Name shown on axis ticks and in hover text.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            CanonicalDomain::JobMatching => "Job Matching",
            CanonicalDomain::MedicalSuggestions => "Medical Suggestions",
            CanonicalDomain::SportsInsights => "Sports Insights",
        }
    }

    /// Suffix used by `RELCHART_<KEY>_THRESHOLD` overrides.
    pub(crate) fn env_key(&self) -> &'static str {
        match self {
            CanonicalDomain::JobMatching => "JOB_MATCHING",
            CanonicalDomain::MedicalSuggestions => "MEDICAL_SUGGESTIONS",
            CanonicalDomain::SportsInsights => "SPORTS_INSIGHTS",
        }
    }
}

impl std::fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
