use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_JOB_MATCHING_THRESHOLD, DEFAULT_MEDICAL_SUGGESTIONS_THRESHOLD,
    DEFAULT_SPORTS_INSIGHTS_THRESHOLD,
};
use crate::domain::CanonicalDomain;

use super::error::ScoringError;

/// Threshold and marker styling for one canonical domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPolicy {
    pub threshold: f64,
    #[serde(rename = "markerColor")]
    pub marker_color: String,
    /// Legend name of the threshold marker.
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl DomainPolicy {
    pub fn new(
        threshold: f64,
        marker_color: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            threshold,
            marker_color: marker_color.into(),
            display_name: display_name.into(),
        }
    }

    /// Built-in policy for `domain`.
    pub fn default_for(domain: CanonicalDomain) -> Self {
        match domain {
            CanonicalDomain::JobMatching => {
                Self::new(DEFAULT_JOB_MATCHING_THRESHOLD, "red", "Job Vacancy Threshold")
            }
            CanonicalDomain::MedicalSuggestions => Self::new(
                DEFAULT_MEDICAL_SUGGESTIONS_THRESHOLD,
                "green",
                "Medical Threshold",
            ),
            CanonicalDomain::SportsInsights => {
                Self::new(DEFAULT_SPORTS_INSIGHTS_THRESHOLD, "blue", "Sports Threshold")
            }
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Mapping from canonical domain to its policy.
///
/// A table may be partial; [`PolicyTable::validate`] enforces completeness at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyTable {
    policies: HashMap<CanonicalDomain, DomainPolicy>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in policy of every canonical domain.
    pub fn with_defaults() -> Self {
        CanonicalDomain::ALL
            .into_iter()
            .map(|domain| (domain, DomainPolicy::default_for(domain)))
            .collect()
    }

    pub fn insert(
        &mut self,
        domain: CanonicalDomain,
        policy: DomainPolicy,
    ) -> Option<DomainPolicy> {
        self.policies.insert(domain, policy)
    }

    pub fn with_policy(mut self, domain: CanonicalDomain, policy: DomainPolicy) -> Self {
        self.insert(domain, policy);
        self
    }

    pub fn get(&self, domain: CanonicalDomain) -> Option<&DomainPolicy> {
        self.policies.get(&domain)
    }

    /// Like [`get`](Self::get), but a missing entry is an error.
    pub fn require(&self, domain: CanonicalDomain) -> Result<&DomainPolicy, ScoringError> {
        self.get(domain).ok_or(ScoringError::MissingPolicy { domain })
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Checks that every canonical domain has a policy with a finite threshold.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for domain in CanonicalDomain::ALL {
            let policy = self.require(domain)?;
            if !policy.threshold.is_finite() {
                return Err(ScoringError::InvalidThreshold {
                    domain,
                    threshold: policy.threshold,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(CanonicalDomain, DomainPolicy)> for PolicyTable {
    fn from_iter<T: IntoIterator<Item = (CanonicalDomain, DomainPolicy)>>(iter: T) -> Self {
        Self {
            policies: iter.into_iter().collect(),
        }
    }
}
