//! Record types flowing through a single render pass.
//!
//! raw [`SimilarityRecord`] → [`PositionedRecord`] → [`ClassifiedRecord`]. Each stage wraps
//! the previous one; nothing is mutated in place.


use serde::{Deserialize, Serialize};

use crate::domain::CanonicalDomain;
use crate::scoring::Relevance;

/// A pre-computed similarity score between two documents.
///
/// Deserializes from any of the column spellings used by the input tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRecord {
    #[serde(
        rename = "sourceDocument",
        alias = "FileName1",
        alias = "Phrase1",
        alias = "SourceDocument"
    )]
    pub source_document: String,

    #[serde(
        rename = "comparisonDocument",
        alias = "FileName2",
        alias = "Phrase2",
        alias = "DocSentByUserForComparison"
    )]
    pub comparison_document: String,

    #[serde(rename = "domain", alias = "Domain", alias = "rawDomain")]
    pub raw_domain: String,

    #[serde(rename = "score", alias = "SimilarityScore")]
    pub score: f64,
}

impl SimilarityRecord {
    pub fn new(
        source_document: impl Into<String>,
        comparison_document: impl Into<String>,
        raw_domain: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            source_document: source_document.into(),
            comparison_document: comparison_document.into(),
            raw_domain: raw_domain.into(),
            score,
        }
    }

    /// Drops every `.txt` occurrence from both document identifiers.
    pub fn without_txt_extension(mut self) -> Self {
        self.source_document = self.source_document.replace(".txt", "");
        self.comparison_document = self.comparison_document.replace(".txt", "");
        self
    }
}

/// A record with its canonical domain and x-axis slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedRecord {
    #[serde(flatten)]
    pub record: SimilarityRecord,
    #[serde(rename = "canonicalDomain")]
    pub domain: CanonicalDomain,
    #[serde(rename = "axisPosition")]
    pub axis_position: u32,
}

impl PositionedRecord {
    pub fn new(record: SimilarityRecord, domain: CanonicalDomain, axis_position: u32) -> Self {
        Self {
            record,
            domain,
            axis_position,
        }
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.record.score
    }
}

/// A positioned record labelled against its domain threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub positioned: PositionedRecord,
    pub relevance: Relevance,
}

impl ClassifiedRecord {
    pub fn new(positioned: PositionedRecord, relevance: Relevance) -> Self {
        Self {
            positioned,
            relevance,
        }
    }

    pub fn source_document(&self) -> &str {
        &self.positioned.record.source_document
    }

    pub fn comparison_document(&self) -> &str {
        &self.positioned.record.comparison_document
    }

    pub fn domain(&self) -> CanonicalDomain {
        self.positioned.domain
    }

    pub fn axis_position(&self) -> u32 {
        self.positioned.axis_position
    }

    pub fn score(&self) -> f64 {
        self.positioned.score()
    }
}
