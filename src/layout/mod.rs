//! X-axis slot allocation for canonical domains.
//!
//! Positions follow first-seen order of the input sequence, never sorted order, so the
//! chart layout is a deterministic function of the record order.

pub mod allocator;
pub mod error;


pub use allocator::{Allocation, DomainPositions, allocate, allocate_slots};
pub use error::LayoutError;
