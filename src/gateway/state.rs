use std::sync::Arc;

use crate::model::SimilarityRecord;
use crate::render::FigureOptions;
use crate::scoring::PolicyTable;

/// Immutable inputs shared by all requests.
///
/// Holds the records and policies, not a rendered chart; every request assembles its own
/// [`ChartSpec`](crate::chart::ChartSpec).
#[derive(Debug, Clone)]
pub struct HandlerState {
    pub records: Arc<Vec<SimilarityRecord>>,

    pub policies: Arc<PolicyTable>,

    pub figure_options: Arc<FigureOptions>,
}

impl HandlerState {
    pub fn new(
        records: Vec<SimilarityRecord>,
        policies: PolicyTable,
        figure_options: FigureOptions,
    ) -> Self {
        Self {
            records: Arc::new(records),
            policies: Arc::new(policies),
            figure_options: Arc::new(figure_options),
        }
    }
}
