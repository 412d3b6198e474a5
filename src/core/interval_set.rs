use crate::core::interval::Interval;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeId(u64);

impl Display for RangeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("range {candidate} overlaps existing range {existing} in scope {scope}")]
pub struct RangeOverlap {
    pub scope: String,
    pub candidate: Interval,
    pub existing: Interval,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredRange<V> {
    pub id: RangeId,
    pub interval: Interval,
    pub value: V,
}

/// Per-scope collection of ranges with the guarantee that no two ranges of
/// the same scope share a point, so a lookup can never be ambiguous.
#[derive(Debug)]
pub struct IntervalSet<S, V> {
    next_id: u64,
    scopes: HashMap<S, Vec<StoredRange<V>>>,
}

impl<S: Copy + Eq + Hash + Display, V> IntervalSet<S, V> {
    pub fn new() -> Self {
        IntervalSet {
            next_id: 0,
            scopes: HashMap::new(),
        }
    }

    /// Checks the candidate against every stored range of the scope before
    /// committing. On conflict the set is left unchanged.
    pub fn insert(&mut self, scope: S, interval: Interval, value: V) -> Result<RangeId, RangeOverlap> {
        let conflict = self
            .scopes
            .get(&scope)
            .into_iter()
            .flatten()
            .find(|range| range.interval.overlaps(&interval));
        if let Some(existing) = conflict {
            return Err(RangeOverlap {
                scope: scope.to_string(),
                candidate: interval,
                existing: existing.interval,
            });
        }

        let id = RangeId(self.next_id);
        self.next_id += 1;
        self.scopes.entry(scope).or_default().push(StoredRange { id, interval, value });
        Ok(id)
    }

    /// At most one range can contain the point thanks to the insert
    /// invariant.
    pub fn lookup(&self, scope: S, point_km: f64) -> Option<&StoredRange<V>> {
        self.scopes.get(&scope)?.iter().find(|range| range.interval.contains(point_km))
    }

    /// Removal cannot create an overlap, so no re-validation is needed.
    /// Returns whether a range was removed.
    pub fn remove(&mut self, scope: S, id: RangeId) -> bool {
        match self.scopes.get_mut(&scope) {
            Some(ranges) => {
                let count_before = ranges.len();
                ranges.retain(|range| range.id != id);
                ranges.len() < count_before
            }
            None => false,
        }
    }

    pub fn ranges(&self, scope: S) -> &[StoredRange<V>] {
        self.scopes.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<S: Copy + Eq + Hash + Display, V> Default for IntervalSet<S, V> {
    fn default() -> Self {
        IntervalSet::new()
    }
}
