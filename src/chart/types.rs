use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::MARKER_HALF_WIDTH;
use crate::domain::CanonicalDomain;
use crate::model::ClassifiedRecord;
use crate::scoring::DomainPolicy;

/// Horizontal threshold segment drawn over one domain's slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdMarker {
    pub domain: CanonicalDomain,
    #[serde(rename = "axisPosition")]
    pub axis_position: u32,
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
    pub color: String,
    pub name: String,
}

impl ThresholdMarker {
    /// Marker spanning `[position - 0.4, position + 0.4]` at the policy threshold.
    pub fn new(domain: CanonicalDomain, axis_position: u32, policy: &DomainPolicy) -> Self {
        let center = f64::from(axis_position);
        Self {
            domain,
            axis_position,
            x0: center - MARKER_HALF_WIDTH,
            x1: center + MARKER_HALF_WIDTH,
            y: policy.threshold,
            color: policy.marker_color.clone(),
            name: policy.display_name.clone(),
        }
    }
}

/// Presentation-agnostic chart data: points, marker geometry, axis tick labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub points: Vec<ClassifiedRecord>,
    pub markers: Vec<ThresholdMarker>,
    #[serde(rename = "axisLabels")]
    pub axis_labels: BTreeMap<u32, String>,
}

impl ChartSpec {
    pub fn relevant_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.relevance.is_relevant())
            .count()
    }

    pub fn marker_for(&self, domain: CanonicalDomain) -> Option<&ThresholdMarker> {
        self.markers.iter().find(|m| m.domain == domain)
    }
}
