//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! DBSCAN grows clusters from "core" points, points with at least
//! `min_count` neighbors within radius `eps`, and chains through every
//! point density-reachable from them. It finds clusters of arbitrary shape,
//! does not need the cluster count in advance, and leaves outliers out.
//!
//! The pipeline is:
//!
//! 1. [`DistanceMatrix`]: all pairwise distances under a pluggable [`Metric`].
//! 2. [`region_query`]: the ε-neighborhood of one point, as a [`NeighborSet`].
//! 3. Cluster expansion from each core seed.
//! 4. Assembly into a [`ClusterMap`], pruning clusters below `min_count`.
//!
//! ## Usage
//!
//! ```rust
//! use densel::cluster::{Clustering, Dbscan, Manhattan};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let clusters = Dbscan::new(0.5, 2).fit(&data).unwrap();
//! assert_eq!(clusters.get(1), Some(&[0, 1][..]));
//! assert_eq!(clusters.get(2), Some(&[2, 3][..]));
//! assert_eq!(clusters.noise(data.len()), vec![4]);
//!
//! // Any metric, including closures.
//! let labels = Dbscan::new(0.5, 2)
//!     .with_metric(Manhattan)
//!     .fit_predict(&data)
//!     .unwrap();
//! assert_eq!(labels[4], None);
//! ```

mod cluster_map;
mod dbscan;
mod distance;
mod expansion;
mod neighborhood;
mod point_set;
mod traits;

pub use cluster_map::ClusterMap;
pub use dbscan::Dbscan;
pub use distance::{Chebyshev, DistanceMatrix, Euclidean, Manhattan, Metric};
pub use neighborhood::region_query;
pub use point_set::{NeighborSet, PointSet};
pub use traits::Clustering;
