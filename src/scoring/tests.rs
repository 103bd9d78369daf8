use super::*;
use crate::domain::CanonicalDomain;
use crate::model::{PositionedRecord, SimilarityRecord};

fn positioned(domain: CanonicalDomain, score: f64) -> PositionedRecord {
    PositionedRecord::new(SimilarityRecord::new("A", "B", "raw", score), domain, 1)
}

#[test]
fn test_score_equal_to_threshold_is_relevant() {
    let policy = DomainPolicy::default_for(CanonicalDomain::JobMatching);
    assert_eq!(policy.threshold, 0.5);

    let record = positioned(CanonicalDomain::JobMatching, 0.5);
    assert_eq!(classify(&record, &policy), Relevance::Relevant);
}

#[test]
fn test_score_just_below_threshold_is_irrelevant() {
    let policy = DomainPolicy::default_for(CanonicalDomain::SportsInsights);
    assert_eq!(policy.threshold, 0.7);

    let record = positioned(CanonicalDomain::SportsInsights, 0.6999999);
    assert_eq!(classify(&record, &policy), Relevance::Irrelevant);
}

#[test]
fn test_no_tolerance_applied() {
    let policy = DomainPolicy::new(0.7, "blue", "Sports Threshold");
    let below = positioned(CanonicalDomain::SportsInsights, 0.7 - f64::EPSILON);
    assert_eq!(classify(&below, &policy), Relevance::Irrelevant);
}

#[test]
fn test_negative_and_large_scores() {
    let policy = DomainPolicy::default_for(CanonicalDomain::JobMatching);
    assert_eq!(
        classify(&positioned(CanonicalDomain::JobMatching, -0.016), &policy),
        Relevance::Irrelevant
    );
    assert_eq!(
        classify(&positioned(CanonicalDomain::JobMatching, 3.0), &policy),
        Relevance::Relevant
    );
}

#[test]
fn test_nan_score_is_irrelevant() {
    let policy = DomainPolicy::default_for(CanonicalDomain::JobMatching);
    let record = positioned(CanonicalDomain::JobMatching, f64::NAN);
    assert_eq!(classify(&record, &policy), Relevance::Irrelevant);
}

#[test]
fn test_classifier_uses_domain_policy() {
    let table = PolicyTable::new()
        .with_policy(
            CanonicalDomain::JobMatching,
            DomainPolicy::default_for(CanonicalDomain::JobMatching),
        )
        .with_policy(
            CanonicalDomain::SportsInsights,
            DomainPolicy::default_for(CanonicalDomain::SportsInsights),
        );
    let classifier = ThresholdClassifier::new(&table);

    assert_eq!(
        classifier.classify(&positioned(CanonicalDomain::JobMatching, 0.6)),
        Ok(Relevance::Relevant)
    );
    assert_eq!(
        classifier.classify(&positioned(CanonicalDomain::SportsInsights, 0.6)),
        Ok(Relevance::Irrelevant)
    );
}

#[test]
fn test_classifier_missing_policy() {
    let table = PolicyTable::new().with_policy(
        CanonicalDomain::JobMatching,
        DomainPolicy::default_for(CanonicalDomain::JobMatching),
    );
    let classifier = ThresholdClassifier::new(&table);

    assert_eq!(
        classifier.classify(&positioned(CanonicalDomain::MedicalSuggestions, 0.9)),
        Err(ScoringError::MissingPolicy {
            domain: CanonicalDomain::MedicalSuggestions
        })
    );
}

#[test]
fn test_classify_all_preserves_order() {
    let table = PolicyTable::with_defaults();
    let classified = ThresholdClassifier::new(&table)
        .classify_all(vec![
            positioned(CanonicalDomain::JobMatching, 0.69),
            positioned(CanonicalDomain::JobMatching, 0.0062),
        ])
        .unwrap();

    let labels: Vec<_> = classified.iter().map(|r| r.relevance).collect();
    assert_eq!(labels, vec![Relevance::Relevant, Relevance::Irrelevant]);
}

#[test]
fn test_default_table_is_complete() {
    let table = PolicyTable::with_defaults();
    assert_eq!(table.len(), CanonicalDomain::ALL.len());
    assert!(table.validate().is_ok());
}

#[test]
fn test_validate_reports_missing_domain() {
    let table = PolicyTable::new().with_policy(
        CanonicalDomain::JobMatching,
        DomainPolicy::default_for(CanonicalDomain::JobMatching),
    );

    assert_eq!(
        table.validate(),
        Err(ScoringError::MissingPolicy {
            domain: CanonicalDomain::MedicalSuggestions
        })
    );
}

#[test]
fn test_validate_rejects_non_finite_threshold() {
    let table = PolicyTable::with_defaults().with_policy(
        CanonicalDomain::SportsInsights,
        DomainPolicy::default_for(CanonicalDomain::SportsInsights).with_threshold(f64::NAN),
    );

    assert!(matches!(
        table.validate(),
        Err(ScoringError::InvalidThreshold {
            domain: CanonicalDomain::SportsInsights,
            ..
        })
    ));
}

#[test]
fn test_relevance_display() {
    assert_eq!(Relevance::Relevant.to_string(), "Relevant");
    assert_eq!(Relevance::Irrelevant.as_str(), "Irrelevant");
    assert!(Relevance::Relevant.is_relevant());
    assert!(!Relevance::Irrelevant.is_relevant());
}
