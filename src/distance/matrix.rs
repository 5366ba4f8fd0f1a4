//! Dense distance matrix.

use crate::models::Point;

use super::haversine_km;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from geographic points via the haversine formula, or from an
/// explicit grid for tests and precomputed costs.
///
/// # Examples
///
/// ```
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0).unwrap(),
///     Point::new(0.0, 1.0).unwrap(),
///     Point::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric(1e-10));
/// assert_eq!(dm.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine distance matrix from geographic points.
    ///
    /// Only the upper triangle is computed; the lower triangle is
    /// mirrored, so the result is symmetric by construction.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(points[i], points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from point `from` to point `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Total cost of visiting the given indices in order.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Returns the nearest of the given candidates to `from`.
    ///
    /// Ties break toward the candidate listed first, so the result is
    /// deterministic for a fixed matrix and candidate order. Returns
    /// `None` if `candidates` is empty.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}
