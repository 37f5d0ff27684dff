use super::distance::DistanceMatrix;
use super::point_set::NeighborSet;

/// Find all points within `eps` of `point_idx`, the point itself included.
///
/// O(N) over one matrix row. A point always neighbors itself when
/// `eps >= 0`, since the diagonal is zero.
pub fn region_query(point_idx: usize, eps: f64, matrix: &DistanceMatrix) -> NeighborSet {
    let mut neighbors = NeighborSet::new(matrix.len());
    for (idx, &d) in matrix.row(point_idx).iter().enumerate() {
        if d <= eps {
            neighbors.insert(idx);
        }
    }
    neighbors
}
