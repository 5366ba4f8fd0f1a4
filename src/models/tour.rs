//! Tour: an ordered visiting sequence over point indices.

use crate::distance::DistanceMatrix;

/// An ordered sequence of point indices.
///
/// A valid tour over `n` points is a permutation of `0..n` with index 0
/// (the start) first and index `n-1` (the end) last. Every optimizer in
/// this crate consumes and produces valid tours; [`Tour::is_valid`]
/// checks the invariant and is what the test suite asserts against.
///
/// # Examples
///
/// ```
/// use route_seq::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3]);
/// assert!(tour.is_valid());
/// assert_eq!(tour.len(), 4);
///
/// let bad = Tour::new(vec![1, 0, 2, 3]); // start not first
/// assert!(!bad.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting sequence of point indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// The visiting sequence.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Mutable access to the visiting sequence.
    pub fn indices_mut(&mut self) -> &mut Vec<usize> {
        &mut self.indices
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks the fixed-endpoint permutation invariant: each of `0..n`
    /// appears exactly once, with 0 first and `n-1` last.
    pub fn is_valid(&self) -> bool {
        let n = self.indices.len();
        if n < 2 {
            return false;
        }
        if self.indices[0] != 0 || self.indices[n - 1] != n - 1 {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.indices {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Total cost of the tour: the sum of consecutive-edge distances.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        distances.path_cost(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tour() {
        assert!(Tour::new(vec![0, 1]).is_valid());
        assert!(Tour::new(vec![0, 2, 1, 3]).is_valid());
    }

    #[test]
    fn test_invalid_tours() {
        assert!(!Tour::new(vec![]).is_valid());
        assert!(!Tour::new(vec![0]).is_valid());
        assert!(!Tour::new(vec![1, 0, 2, 3]).is_valid()); // start not first
        assert!(!Tour::new(vec![0, 3, 1, 2]).is_valid()); // end not last
        assert!(!Tour::new(vec![0, 1, 1, 3]).is_valid()); // duplicate
        assert!(!Tour::new(vec![0, 4, 1, 3]).is_valid()); // out of range
    }

    #[test]
    fn test_tour_cost() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 1.0, 4.0, //
                1.0, 0.0, 2.0, //
                4.0, 2.0, 0.0,
            ],
        )
        .expect("valid");
        let tour = Tour::new(vec![0, 1, 2]);
        assert!((tour.cost(&dm) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_indices_mut() {
        let mut tour = Tour::new(vec![0, 1, 2, 3]);
        tour.indices_mut().swap(1, 2);
        assert_eq!(tour.indices(), &[0, 2, 1, 3]);
        assert!(tour.is_valid());
    }
}
