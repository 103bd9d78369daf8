//! Static input table loading.
//!
//! The table is a JSON array. Each row is either an object using any of the accepted
//! column spellings (see [`SimilarityRecord`](crate::model::SimilarityRecord)) or a
//! four-element array `[source, comparison, domain, score]`.

pub mod error;
pub mod loader;


pub use error::DatasetError;
pub use loader::{LoadOptions, load_records, parse_records};
