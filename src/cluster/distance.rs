//! Pairwise distances.
//!
//! DBSCAN only ever asks "is point `j` within ε of point `i`?", so the whole
//! run works against a dense, symmetric N×N matrix built once up front.
//! That is O(N²) metric evaluations and O(N²) memory; datasets that do not
//! fit are out of scope here.

use crate::error::{Error, Result};

/// A distance function between two equal-length vectors.
///
/// Implementations must be symmetric, non-negative, and zero on identical
/// inputs. Any `Fn(&[f64], &[f64]) -> f64` closure is a `Metric`.
pub trait Metric {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}

/// L2 distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

/// L1 (city block) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

/// L∞ distance: the largest per-coordinate difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

impl Metric for Chebyshev {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}

/// Symmetric N×N matrix of pairwise distances, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the matrix for `rows` under `metric`.
    ///
    /// Only the upper triangle is evaluated; each value is mirrored into the
    /// lower triangle and the diagonal is left at zero.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the rows do not all have the length
    /// of the first row.
    pub fn build<M: Metric + ?Sized>(rows: &[Vec<f64>], metric: &M) -> Result<Self> {
        let n = rows.len();
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(Error::DimensionMismatch {
                    row,
                    expected,
                    found: r.len(),
                });
            }
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&rows[i], &rows[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self { n, data })
    }

    /// Wrap an already computed row-major matrix.
    ///
    /// The caller is responsible for symmetry and a zero diagonal.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != n * n`.
    pub fn from_raw(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(Error::DimensionMismatch {
                row: 0,
                expected: n * n,
                found: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// All distances from point `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
