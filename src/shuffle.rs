// shuffle.rs - Fisher–Yates shuffle driven by the seeded LCG

use crate::error::ShuffleError;
use crate::lcg::Lcg;

/// Shuffle `items` in place and return the advanced seed.
///
/// Walks `i` from `len - 1` down to `1`, drawing `j = floor(value * (i + 1))`
/// and swapping `i` with `j`. Slices of length 0 or 1 are left alone and the
/// seed comes back untouched.
pub fn shuffle_in_place<T>(items: &mut [T], seed: u32) -> u32 {
    let mut rng = Lcg::new(seed);
    for i in (1..items.len()).rev() {
        let j = rng.gen_index(i + 1);
        items.swap(i, j);
    }
    rng.state()
}

/// Copy-on-shuffle: the input is never touched.
pub fn shuffle<T: Clone>(items: &[T], seed: u32) -> (Vec<T>, u32) {
    let mut out = items.to_vec();
    let final_seed = shuffle_in_place(&mut out, seed);
    (out, final_seed)
}

/// The permutation `shuffle` would apply to a sequence of length `n`.
///
/// `perm[k]` is the original index of the element that ends up at position `k`.
pub fn permutation(n: usize, seed: u32) -> (Vec<usize>, u32) {
    let mut perm: Vec<usize> = (0..n).collect();
    let final_seed = shuffle_in_place(&mut perm, seed);
    (perm, final_seed)
}

/// True when `perm` is a bijection on `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Gather `items[perm[0]], items[perm[1]], ...`.
pub fn apply_permutation<T: Clone>(items: &[T], perm: &[usize]) -> Result<Vec<T>, ShuffleError> {
    if !is_permutation(perm, items.len()) {
        return Err(ShuffleError::InvalidPermutation {
            len: perm.len(),
            expected: items.len(),
        });
    }
    Ok(perm.iter().map(|&p| items[p].clone()).collect())
}
