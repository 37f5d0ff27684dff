use super::cluster_map::ClusterMap;
use crate::error::Result;

/// Common interface for clustering algorithms that report noise.
pub trait Clustering {
    /// Cluster `data` (one vector per point) into a [`ClusterMap`].
    fn fit(&self, data: &[Vec<f64>]) -> Result<ClusterMap>;

    /// One label per input point: the cluster identifier, or `None` for noise.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.labels(data.len()))
    }
}
