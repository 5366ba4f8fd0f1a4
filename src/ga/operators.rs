//! Permutation-preserving genetic operators.

use rand::Rng;

/// Ordered crossover (OX) over two parent permutations.
///
/// Copies a randomly chosen contiguous segment of `parent_a` into the
/// child at the same positions, then fills the remaining positions, in
/// ascending position order, with the genes of `parent_b` that are not
/// already present, keeping `parent_b`'s relative order. Both parents
/// must be permutations of the same gene set.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use route_seq::ga::order_crossover;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let child = order_crossover(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], &mut rng);
///
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    debug_assert_eq!(n, parent_b.len());
    if n < 2 {
        return parent_a.to_vec();
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut child = vec![usize::MAX; n];
    child[lo..=hi].copy_from_slice(&parent_a[lo..=hi]);

    let segment = &parent_a[lo..=hi];
    let mut fill = parent_b.iter().copied().filter(|g| !segment.contains(g));
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = fill
                .next()
                .expect("parents must be permutations of the same gene set");
        }
    }

    child
}

/// Swap mutation: exchanges two distinct random positions in place.
///
/// No-op for permutations shorter than two genes.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    genes.swap(i, j);
}
