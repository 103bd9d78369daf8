//! Chart assembly: the single-pass transform from raw records to a [`ChartSpec`].
//!
//! normalize → allocate → classify → markers. Assembly is all-or-nothing; the first
//! error aborts the batch and no partial spec is produced.

pub mod assembler;
pub mod error;
pub mod types;


pub use assembler::assemble;
pub use error::AssemblyError;
pub use types::{ChartSpec, ThresholdMarker};
