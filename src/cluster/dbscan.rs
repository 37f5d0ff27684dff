//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It does not need the number
//! of clusters up front, finds clusters of arbitrary shape, and leaves
//! outliers unassigned.
//!
//! ## Core Concepts
//!
//! - **Eps (ε)**: maximum distance between two points to be neighbors.
//! - **MinCount**: minimum neighborhood size (the point itself included) for
//!   a point to be "core", and minimum size of a reported cluster.
//! - **Core point**: has at least MinCount points within ε.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Noise point**: neither core nor border; absent from every cluster.
//!
//! ## Algorithm Steps
//!
//! 1. Build the pairwise [`DistanceMatrix`].
//! 2. For each unvisited point P, in index order:
//!    - Find its ε-neighborhood.
//!    - If it has fewer than MinCount members, P is a noise candidate and its
//!      whole neighborhood is marked as claimed (without joining a cluster).
//!    - Else open cluster `c + 1` and expand it from P.
//! 3. Drop clusters with fewer than MinCount members.
//!
//! Cluster identifiers start at 1 and are never reused, so pruning (or a
//! seed that turns out to be claimed already) leaves gaps.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) metric evaluations plus O(n²) neighborhood scans.
//! - **Space**: O(n²) for the distance matrix.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use log::debug;

use super::cluster_map::ClusterMap;
use super::distance::{DistanceMatrix, Euclidean, Metric};
use super::expansion::Traversal;
use super::traits::Clustering;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// DBSCAN clustering parameters.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Euclidean> {
    /// Eps: maximum distance for neighborhood.
    eps: f64,
    /// Minimum neighborhood size for core points and minimum cluster size.
    min_count: usize,
    metric: M,
    /// Attribute selection used by [`Dbscan::fit_dataset`]; empty means all.
    attributes: Vec<usize>,
}

impl Dbscan<Euclidean> {
    /// Create a DBSCAN clusterer using Euclidean distance.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_count` - Minimum number of points (including the point itself)
    ///   in a dense neighborhood, and minimum size of a reported cluster.
    pub fn new(eps: f64, min_count: usize) -> Self {
        Self {
            eps,
            min_count,
            metric: Euclidean,
            attributes: Vec::new(),
        }
    }
}

impl<M> Dbscan<M> {
    /// Set eps (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum neighborhood / cluster size.
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Use a different distance function.
    pub fn with_metric<N: Metric>(self, metric: N) -> Dbscan<N> {
        Dbscan {
            eps: self.eps,
            min_count: self.min_count,
            metric,
            attributes: self.attributes,
        }
    }

    /// Select which dataset attributes feed the distance computation.
    pub fn with_attributes(mut self, attributes: impl Into<Vec<usize>>) -> Self {
        self.attributes = attributes.into();
        self
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    /// Check parameter domains.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if eps is negative or NaN, or min_count is 0.
    pub fn validate(&self) -> Result<()> {
        if self.eps.is_nan() || self.eps < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be non-negative",
            });
        }

        if self.min_count == 0 {
            return Err(Error::InvalidParameter {
                name: "min_count",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Cluster points given their precomputed pairwise distances.
    pub fn fit_matrix(&self, matrix: &DistanceMatrix) -> Result<ClusterMap> {
        self.validate()?;

        let n = matrix.len();
        debug!(
            "dbscan: {n} points, eps={}, min_count={}",
            self.eps, self.min_count
        );

        let mut traversal = Traversal::new(matrix, self.eps, self.min_count);
        let mut cluster_id = 0;

        for point_idx in 0..n {
            if traversal.visited.contains(point_idx) {
                continue;
            }
            traversal.visited.insert(point_idx);

            let neighbors = traversal.region_query(point_idx);

            if neighbors.len() < self.min_count {
                // Noise candidate. Its neighborhood is claimed without joining
                // any cluster.
                traversal.clustered.union_with(&neighbors);
                continue;
            }

            cluster_id += 1;
            traversal.expand_cluster(point_idx, neighbors, cluster_id);
        }

        let mut clusters = traversal.clusters;
        let pruned = clusters.prune(self.min_count);
        debug!(
            "dbscan: opened {cluster_id} clusters, pruned {pruned}, kept {}",
            clusters.len()
        );

        Ok(clusters)
    }
}

impl<M: Metric> Dbscan<M> {
    /// Convert `dataset` using the selected attributes, then cluster it.
    ///
    /// Conversion errors are returned before any distance is computed.
    pub fn fit_dataset<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<ClusterMap> {
        self.validate()?;
        let rows = dataset.to_vectors(&self.attributes)?;
        self.fit(&rows)
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl<M: Metric> Clustering for Dbscan<M> {
    fn fit(&self, data: &[Vec<f64>]) -> Result<ClusterMap> {
        self.validate()?;
        let matrix = DistanceMatrix::build(data, &self.metric)?;
        self.fit_matrix(&matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::distance::Manhattan;
    use crate::dataset::{Attribute, DataGrid, Value};

    fn line(xs: &[f64]) -> Vec<Vec<f64>> {
        xs.iter().map(|&x| vec![x]).collect()
    }

    fn members(map: &ClusterMap) -> Vec<Vec<usize>> {
        map.iter().map(|(_, m)| m.clone()).collect()
    }

    #[test]
    fn test_dbscan_two_clusters() {
        let data = vec![
            // Cluster 1: around (0, 0)
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            vec![0.05, 0.05],
            // Cluster 2: around (5, 5)
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
            vec![5.05, 5.05],
        ];

        let clusters = Dbscan::new(0.3, 3).fit(&data).unwrap();

        assert_eq!(clusters.ids().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(clusters.get(1), Some(&[0, 1, 2, 3, 4][..]));
        assert_eq!(clusters.get(2), Some(&[5, 6, 7, 8, 9][..]));
    }

    #[test]
    fn test_dbscan_with_noise() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            // Outlier
            vec![100.0, 100.0],
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
        ];

        let labels = Dbscan::new(0.3, 3).fit_predict(&data).unwrap();

        assert_eq!(labels.len(), 9);
        assert!(labels[4].is_none());
        for (i, label) in labels.iter().enumerate() {
            if i != 4 {
                assert!(label.is_some());
            }
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        let data = vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ];

        let clusters = Dbscan::new(0.5, 3).fit(&data).unwrap();
        assert!(clusters.is_empty());
        assert_eq!(clusters.noise(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dbscan_chain() {
        let data: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64 * 0.3, 0.0]).collect();

        let clusters = Dbscan::new(0.5, 2).fit(&data).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.get(1), Some(&(0..10).collect::<Vec<_>>()[..]));
    }

    #[test]
    fn two_groups_on_a_line() {
        let data = line(&[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        let clusters = Dbscan::new(1.5, 2).fit(&data).unwrap();

        assert_eq!(members(&clusters), vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert!(clusters.noise(6).is_empty());
    }

    #[test]
    fn undersized_groups_are_pruned() {
        let data = line(&[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        let clusters = Dbscan::new(1.5, 4).fit(&data).unwrap();

        assert!(clusters.is_empty());
        assert_eq!(clusters.noise(6).len(), 6);
    }

    #[test]
    fn single_point_forms_its_own_cluster() {
        for eps in [0.0, 0.5, 100.0] {
            let clusters = Dbscan::new(eps, 1).fit(&[vec![3.0, 4.0]]).unwrap();
            assert_eq!(clusters.get(1), Some(&[0][..]));
        }
    }

    #[test]
    fn everything_within_eps_is_one_cluster() {
        let data = line(&[0.0, 0.4, 0.1, 0.9, 0.3]);
        for min_count in 1..=5 {
            let clusters = Dbscan::new(1.0, min_count).fit(&data).unwrap();
            assert_eq!(members(&clusters), vec![vec![0, 1, 2, 3, 4]]);
        }
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let data: Vec<Vec<f64>> = vec![];
        assert!(Dbscan::new(0.5, 3).fit(&data).unwrap().is_empty());
    }

    #[test]
    fn noise_claims_block_a_later_seed() {
        // 0 is a noise candidate and claims 1. 1 is core but already claimed,
        // so cluster 1 never materializes; cluster 2 grows from 2.
        let data = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let clusters = Dbscan::new(1.0, 3).fit(&data).unwrap();

        assert_eq!(clusters.ids().collect::<Vec<_>>(), vec![2]);
        assert_eq!(clusters.get(2), Some(&[2, 3, 4][..]));
        assert_eq!(clusters.noise(5), vec![0, 1]);
    }

    #[test]
    fn noise_claims_can_empty_the_result() {
        let data = line(&[0.0, 1.0, 2.0, 3.0]);
        let clusters = Dbscan::new(1.0, 3).fit(&data).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn index_lists_follow_discovery_order() {
        let data = line(&[0.0, 2.0, 1.0]);
        let clusters = Dbscan::new(1.1, 2).fit(&data).unwrap();
        assert_eq!(clusters.get(1), Some(&[0, 2, 1][..]));
    }

    #[test]
    fn metric_is_pluggable() {
        // Diagonal neighbors are 1.41 apart under L2 but 2.0 under L1.
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]];

        let l2 = Dbscan::new(1.5, 2).fit(&data).unwrap();
        assert_eq!(l2.len(), 1);

        let l1 = Dbscan::new(1.5, 2).with_metric(Manhattan).fit(&data).unwrap();
        assert!(l1.is_empty());

        let closure = Dbscan::new(1.5, 2)
            .with_metric(|a: &[f64], b: &[f64]| (a[0] - b[0]).abs())
            .fit(&data)
            .unwrap();
        assert_eq!(closure.len(), 1);
    }

    #[test]
    fn test_dbscan_invalid_params() {
        let data = vec![vec![0.0, 0.0]];

        assert!(Dbscan::new(-1.0, 3).fit(&data).is_err());
        assert!(Dbscan::new(f64::NAN, 3).fit(&data).is_err());
        assert_eq!(
            Dbscan::new(0.5, 0).fit(&data).unwrap_err(),
            Error::InvalidParameter {
                name: "min_count",
                message: "must be at least 1",
            }
        );
        assert!(Dbscan::new(0.0, 1).validate().is_ok());
    }

    #[test]
    fn dataset_attributes_are_selected() {
        let mut grid = DataGrid::new(vec![
            Attribute::float("x"),
            Attribute::categorical("tag"),
            Attribute::float("noise"),
        ]);
        for (x, far) in [(0.0, 0.0), (1.0, 50.0), (2.0, 100.0)] {
            grid.push_row(vec![Value::Float(x), "t".into(), Value::Float(far)])
                .unwrap();
        }

        let by_x = Dbscan::new(1.0, 2).with_attributes([0]);
        assert_eq!(by_x.fit_dataset(&grid).unwrap().len(), 1);

        let by_both = Dbscan::new(1.0, 2).with_attributes(vec![0, 2]);
        assert!(by_both.fit_dataset(&grid).unwrap().is_empty());

        let err = Dbscan::new(1.0, 2)
            .with_attributes([0, 1])
            .fit_dataset(&grid)
            .unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn ragged_rows_fail_before_clustering() {
        let data = vec![vec![0.0, 0.0], vec![1.0]];
        let err = Dbscan::new(1.0, 1).fit(&data).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { row: 1, .. }));
    }

    #[test]
    fn builder_and_default() {
        let d = Dbscan::default().with_eps(2.0).with_min_count(3);
        assert_eq!(d.eps(), 2.0);
        assert_eq!(d.min_count(), 3);
        assert!(d.attributes().is_empty());
        assert_eq!(*d.metric(), Euclidean);
        assert_eq!(Dbscan::default().min_count(), 5);
    }
}
