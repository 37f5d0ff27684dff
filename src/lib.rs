//! Density-based clustering primitives.
//!
//! `densel` implements DBSCAN over a precomputed pairwise distance matrix.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`] parameters and entry points for raw vectors, datasets, or
//!   a ready [`DistanceMatrix`]
//! - pluggable distance [`Metric`]s
//! - the [`ClusterMap`] result (cluster id → point indices, noise omitted)
//!
//! [`dataset`] converts typed tabular data into the numeric rows clustering
//! runs on.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod dataset;
pub mod error;

pub use cluster::{
    region_query, Chebyshev, ClusterMap, Clustering, Dbscan, DistanceMatrix, Euclidean, Manhattan,
    Metric, NeighborSet,
};
pub use dataset::{Attribute, AttributeKind, DataGrid, Dataset, Value};
pub use error::{Error, Result};
