use bit_vec::BitVec;

/// A set of point indices over `[0, n)`, stored as a bitset.
///
/// Used for region query results (the neighbor set of a point) and for the
/// monotonic visited/clustered bookkeeping of a clustering run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    bits: BitVec,
    len: usize,
}

/// The result of a region query.
pub type NeighborSet = PointSet;

impl PointSet {
    /// Empty set over a universe of `n` points.
    pub fn new(n: usize) -> Self {
        Self {
            bits: BitVec::from_elem(n, false),
            len: 0,
        }
    }

    /// Size of the universe this set ranges over.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.bits.get(idx).unwrap_or(false)
    }

    /// Add `idx`. Returns `true` if it was not already a member.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the universe.
    pub fn insert(&mut self, idx: usize) -> bool {
        if self.contains(idx) {
            return false;
        }
        self.bits.set(idx, true);
        self.len += 1;
        true
    }

    /// Add every member of `other`, returning the indices that were new.
    pub fn union_with(&mut self, other: &PointSet) -> Vec<usize> {
        other.iter().filter(|&idx| self.insert(idx)).collect()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(idx, bit)| bit.then_some(idx))
    }
}
