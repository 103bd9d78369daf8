//! Relchart library crate (used by the server binary and integration tests).
//!
//! # Pipeline
//!
//! A render pass is a pure, synchronous transform:
//!
//! 1. [`normalize`] maps each legacy domain label onto a [`CanonicalDomain`]
//! 2. [`allocate`] gives each distinct domain an x-axis slot in first-seen order
//! 3. [`ThresholdClassifier`] labels every record against its domain's [`DomainPolicy`]
//! 4. [`assemble`] ties the steps together and adds one [`ThresholdMarker`] per domain
//!
//! The resulting [`ChartSpec`] is plain data. [`render`] turns it into a Plotly figure or
//! HTML page and [`gateway`] serves that page over HTTP.
//!
//! ## Errors
//! - [`DomainError`] - unknown domain label
//! - [`LayoutError`] - empty batch
//! - [`ScoringError`] - domain without a policy
//! - [`AssemblyError`] - any of the above, surfaced by [`assemble`]

pub mod chart;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod domain;
pub mod gateway;
pub mod layout;
pub mod model;
pub mod render;
pub mod scoring;

pub use chart::{AssemblyError, ChartSpec, ThresholdMarker, assemble};
pub use config::{Config, ConfigError};
pub use dataset::{DatasetError, LoadOptions, load_records, parse_records};
pub use domain::{CanonicalDomain, DomainError, LEGACY_LABELS, normalize};
pub use layout::{Allocation, DomainPositions, LayoutError, allocate, allocate_slots};
pub use model::{ClassifiedRecord, PositionedRecord, SimilarityRecord};
pub use render::{FigureOptions, figure, html_page};
pub use scoring::{
    DomainPolicy, PolicyTable, Relevance, ScoringError, ThresholdClassifier, classify,
};
