//! Growing one cluster through density-reachable points.
//!
//! Two monotonic sets drive the traversal:
//!
//! - `visited`: points whose own neighborhood has been examined.
//! - `clustered`: points that may no longer be appended to a cluster. This
//!   includes points absorbed from a noise candidate's neighborhood, which
//!   are *not* in any cluster. A point absorbed that way is never added to a
//!   later cluster, and if it is later picked as a seed the expansion is a
//!   no-op. Keep the two sets separate: folding them into one "assigned"
//!   flag changes which clusters come out.

use std::collections::BTreeSet;

use log::trace;

use super::cluster_map::ClusterMap;
use super::distance::DistanceMatrix;
use super::neighborhood::region_query;
use super::point_set::{NeighborSet, PointSet};

/// Mutable state of one clustering run, threaded through the assembler and
/// every expansion.
#[derive(Debug)]
pub(crate) struct Traversal<'a> {
    pub(crate) matrix: &'a DistanceMatrix,
    pub(crate) eps: f64,
    pub(crate) min_count: usize,
    pub(crate) visited: PointSet,
    pub(crate) clustered: PointSet,
    pub(crate) clusters: ClusterMap,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(matrix: &'a DistanceMatrix, eps: f64, min_count: usize) -> Self {
        let n = matrix.len();
        Self {
            matrix,
            eps,
            min_count,
            visited: PointSet::new(n),
            clustered: PointSet::new(n),
            clusters: ClusterMap::new(),
        }
    }

    pub(crate) fn region_query(&self, point_idx: usize) -> NeighborSet {
        region_query(point_idx, self.eps, self.matrix)
    }

    /// Grow cluster `cluster_id` from core point `seed`.
    ///
    /// Pending neighbors are taken smallest index first. An unvisited
    /// neighbor is visited and, if its own neighborhood holds at least
    /// `min_count` points, that neighborhood joins the growing set. Each
    /// neighbor is appended to the cluster unless it is already clustered.
    /// Already-visited neighbors are skipped outright.
    pub(crate) fn expand_cluster(
        &mut self,
        seed: usize,
        mut neighbors: NeighborSet,
        cluster_id: usize,
    ) {
        if self.clustered.contains(seed) {
            trace!("cluster {cluster_id}: seed {seed} already claimed, skipping");
            return;
        }

        self.clusters.push(cluster_id, seed);
        self.clustered.insert(seed);
        self.visited.insert(seed);

        let mut pending: BTreeSet<usize> = neighbors
            .iter()
            .filter(|&idx| !self.visited.contains(idx))
            .collect();

        while let Some(idx) = pending.pop_first() {
            self.visited.insert(idx);

            let reachable = self.region_query(idx);
            if reachable.len() >= self.min_count {
                // Core point: its neighborhood becomes reachable too.
                for added in neighbors.union_with(&reachable) {
                    if !self.visited.contains(added) {
                        pending.insert(added);
                    }
                }
            }

            if self.clustered.insert(idx) {
                self.clusters.push(cluster_id, idx);
            }
        }

        trace!(
            "cluster {cluster_id}: seed {seed}, {} reachable points",
            neighbors.len()
        );
    }
}
