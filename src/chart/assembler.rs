use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::{CanonicalDomain, normalize};
use crate::layout::allocate_slots;
use crate::model::{PositionedRecord, SimilarityRecord};
use crate::scoring::{PolicyTable, ThresholdClassifier};

use super::error::AssemblyError;
use super::types::{ChartSpec, ThresholdMarker};

/// Builds a [`ChartSpec`] from raw records and a policy table.
///
/// Fails with the first unmapped domain label, on an empty batch, or when a domain
/// present in the batch has no policy. Policies are checked for every present domain
/// before any record is classified.
pub fn assemble(
    records: &[SimilarityRecord],
    policies: &PolicyTable,
) -> Result<ChartSpec, AssemblyError> {
    let domains = records
        .iter()
        .map(|r| normalize(&r.raw_domain))
        .collect::<Result<Vec<CanonicalDomain>, _>>()?;

    let allocation = allocate_slots(domains.iter().copied())?;
    let positions = &allocation.positions;

    for domain in positions.domains() {
        policies.require(domain)?;
    }

    let positioned: Vec<PositionedRecord> = records
        .iter()
        .zip(domains)
        .zip(&allocation.slots)
        .map(|((record, domain), &slot)| PositionedRecord::new(record.clone(), domain, slot))
        .collect();

    let points = ThresholdClassifier::new(policies).classify_all(positioned)?;

    let mut markers = Vec::with_capacity(positions.len());
    let mut axis_labels = BTreeMap::new();
    for (domain, position) in positions.iter() {
        let policy = policies.require(domain)?;
        markers.push(ThresholdMarker::new(domain, position, policy));
        axis_labels.insert(position, domain.display_name().to_string());
    }

    debug!(markers = markers.len(), "Built threshold markers");
    info!(
        points = points.len(),
        domains = positions.len(),
        "Chart assembled"
    );

    Ok(ChartSpec {
        points,
        markers,
        axis_labels,
    })
}
