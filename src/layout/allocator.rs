use serde::Serialize;
use tracing::debug;

use crate::constants::{AXIS_POSITION_STRIDE, FIRST_AXIS_POSITION};
use crate::domain::CanonicalDomain;

use super::error::LayoutError;

/// Ordered mapping from domain to axis position.
///
/// Entries are kept in first-seen order; positions are strictly increasing along it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainPositions {
    entries: Vec<(CanonicalDomain, u32)>,
}

impl DomainPositions {
    /// Position allocated to `domain`, if it appeared in the input.
    pub fn get(&self, domain: CanonicalDomain) -> Option<u32> {
        self.entries
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, position)| *position)
    }

    pub fn contains(&self, domain: CanonicalDomain) -> bool {
        self.get(domain).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Domains in first-seen order.
    pub fn domains(&self) -> impl Iterator<Item = CanonicalDomain> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalDomain, u32)> + '_ {
        self.entries.iter().copied()
    }

    fn insert_if_absent(&mut self, domain: CanonicalDomain) -> u32 {
        if let Some(position) = self.get(domain) {
            return position;
        }
        let index = self.entries.len() as u32;
        let position = FIRST_AXIS_POSITION + AXIS_POSITION_STRIDE * index;
        self.entries.push((domain, position));
        position
    }
}

/// Allocation result together with the slot of every input item, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub positions: DomainPositions,
    pub slots: Vec<u32>,
}

/// Assigns `1 + 2*i` to the i-th distinct domain in `domains`.
pub fn allocate<I>(domains: I) -> Result<DomainPositions, LayoutError>
where
    I: IntoIterator<Item = CanonicalDomain>,
{
    allocate_slots(domains).map(|allocation| allocation.positions)
}

/// Like [`allocate`], also returning the position of each input item.
pub fn allocate_slots<I>(domains: I) -> Result<Allocation, LayoutError>
where
    I: IntoIterator<Item = CanonicalDomain>,
{
    let mut positions = DomainPositions::default();
    let slots: Vec<u32> = domains
        .into_iter()
        .map(|domain| positions.insert_if_absent(domain))
        .collect();

    if slots.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    debug!(
        records = slots.len(),
        domains = positions.len(),
        "Allocated axis positions"
    );

    Ok(Allocation { positions, slots })
}
