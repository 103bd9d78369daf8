use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Outcome of comparing a score against its domain threshold.
pub enum Relevance {
    /// Score at or above threshold.
    Relevant,
    /// Score below threshold.
    Irrelevant,
}

impl Relevance {
    /// Label used for legend entries and serialized output.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::Relevant => "Relevant",
            Relevance::Irrelevant => "Irrelevant",
        }
    }

    /// Returns `true` if relevant.
    pub fn is_relevant(&self) -> bool {
        matches!(self, Relevance::Relevant)
    }
}

impl std::fmt::Display for Relevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
