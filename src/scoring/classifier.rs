use tracing::debug;

use crate::model::{ClassifiedRecord, PositionedRecord};

use super::error::ScoringError;
use super::policy::{DomainPolicy, PolicyTable};
use super::types::Relevance;

/// Compares `record`'s score against `policy.threshold` (closed lower bound).
#[inline]
pub fn classify(record: &PositionedRecord, policy: &DomainPolicy) -> Relevance {
    if record.score() >= policy.threshold {
        Relevance::Relevant
    } else {
        Relevance::Irrelevant
    }
}

/// Classifies records by looking up their domain's policy in a [`PolicyTable`].
#[derive(Debug, Clone, Copy)]
pub struct ThresholdClassifier<'a> {
    policies: &'a PolicyTable,
}

impl<'a> ThresholdClassifier<'a> {
    pub fn new(policies: &'a PolicyTable) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &'a PolicyTable {
        self.policies
    }

    pub fn classify(&self, record: &PositionedRecord) -> Result<Relevance, ScoringError> {
        let policy = self.policies.require(record.domain)?;
        Ok(classify(record, policy))
    }

    /// Classifies every record, failing on the first domain without a policy.
    pub fn classify_all(
        &self,
        records: Vec<PositionedRecord>,
    ) -> Result<Vec<ClassifiedRecord>, ScoringError> {
        let classified = records
            .into_iter()
            .map(|record| {
                let relevance = self.classify(&record)?;
                Ok(ClassifiedRecord::new(record, relevance))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        debug!(
            records = classified.len(),
            relevant = classified
                .iter()
                .filter(|r| r.relevance.is_relevant())
                .count(),
            "Classified records"
        );

        Ok(classified)
    }
}
