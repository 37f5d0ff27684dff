use std::collections::btree_map::{self, BTreeMap};

/// Final DBSCAN output: cluster identifier → member point indices.
///
/// Identifiers start at 1 and are assigned in order of discovery. Pruned
/// clusters leave gaps; identifiers are never reused. A point that appears
/// in no entry is noise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMap {
    clusters: BTreeMap<usize, Vec<usize>>,
}

impl ClusterMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cluster_id: usize, point_idx: usize) {
        self.clusters.entry(cluster_id).or_default().push(point_idx);
    }

    /// Drop every cluster with fewer than `min_count` members, returning how
    /// many were removed.
    pub(crate) fn prune(&mut self, min_count: usize) -> usize {
        let before = self.clusters.len();
        self.clusters.retain(|_, members| members.len() >= min_count);
        before - self.clusters.len()
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Members of cluster `cluster_id`, in the order they joined.
    pub fn get(&self, cluster_id: usize) -> Option<&[usize]> {
        self.clusters.get(&cluster_id).map(Vec::as_slice)
    }

    /// Cluster identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.clusters.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, Vec<usize>> {
        self.clusters.iter()
    }

    /// The cluster containing `point_idx`, or `None` for noise.
    pub fn cluster_of(&self, point_idx: usize) -> Option<usize> {
        self.clusters
            .iter()
            .find(|(_, members)| members.contains(&point_idx))
            .map(|(&id, _)| id)
    }

    /// One label per point in `[0, n)`; noise is `None`.
    pub fn labels(&self, n: usize) -> Vec<Option<usize>> {
        let mut labels = vec![None; n];
        for (&id, members) in &self.clusters {
            for &idx in members {
                if idx < n {
                    labels[idx] = Some(id);
                }
            }
        }
        labels
    }

    /// Points in `[0, n)` that belong to no cluster, ascending.
    pub fn noise(&self, n: usize) -> Vec<usize> {
        self.labels(n)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, label)| label.is_none().then_some(idx))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<usize, Vec<usize>> {
        self.clusters
    }
}

impl<'a> IntoIterator for &'a ClusterMap {
    type Item = (&'a usize, &'a Vec<usize>);
    type IntoIter = btree_map::Iter<'a, usize, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
