use super::CanonicalDomain;
use super::error::DomainError;

/// Exact-match table from legacy input labels to canonical domains.
pub const LEGACY_LABELS: [(&str, CanonicalDomain); 3] = [
    ("jobvacancy", CanonicalDomain::JobMatching),
    ("Medical-MedicationSuggestion", CanonicalDomain::MedicalSuggestions),
    ("Unknown", CanonicalDomain::SportsInsights),
];

/// Maps a raw label to its canonical domain.
///
/// Matching is exact and case-sensitive; surrounding whitespace is significant.
pub fn normalize(raw_domain: &str) -> Result<CanonicalDomain, DomainError> {
    LEGACY_LABELS
        .iter()
        .find(|(label, _)| *label == raw_domain)
        .map(|(_, domain)| *domain)
        .ok_or_else(|| DomainError::Unmapped {
            label: raw_domain.to_string(),
        })
}
