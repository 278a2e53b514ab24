use rand::{rngs::StdRng, Rng};

use crate::select::select_nth_with;

/// Slices longer than this are narrowed with the Floyd & Rivest estimate before partitioning.
pub(crate) const FLOYD_RIVEST_CUTOFF: usize = 600;

/// For the given index and slice length, returns the inclusive bounds `(lo, hi)` of the
/// sub-slice that is expected to contain the element of rank `index`. The bounds always contain
/// `index`.
///
/// The sub-slice has about `0.5 * n^(2/3)` elements, shifted towards the nearer end of the slice
/// by a term proportional to the standard deviation of the sample rank.
pub(crate) fn bracket(index: usize, len: usize) -> (usize, usize) {
    debug_assert!(index < len);
    let n = len as f64;
    let k = index as f64;
    let z = n.ln();
    let s = 0.5 * (2.0 * z / 3.0).exp();
    let sign = match index.cmp(&(len / 2)) {
        core::cmp::Ordering::Less => -1.0,
        core::cmp::Ordering::Equal => 0.0,
        core::cmp::Ordering::Greater => 1.0,
    };
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * sign;
    let lo = (k - k * s / n + sd).floor().max(0.0) as usize;
    let hi = (k + (n - k) * s / n + sd).floor().min(n - 1.0) as usize;
    (lo.min(index), hi.max(index))
}

/// Moves an element close to the element of rank `index` to position `index`. A random sample of
/// the slice is first gathered in the bracket returned by [`bracket`], then the element of the
/// matching rank is selected within the sample.
///
/// Returns `false` without reordering anything if the bracket would not be smaller than the
/// slice.
pub(crate) fn narrow<T, F>(
    data: &mut [T],
    index: usize,
    is_less: &mut F,
    rng: &mut StdRng,
) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let (lo, hi) = bracket(index, data.len());
    if hi - lo + 1 >= data.len() {
        return false;
    }
    sample(data, lo, hi, rng);
    select_nth_with(&mut data[lo..=hi], index - lo, is_less, rng);
    true
}

/// Fills `data[lo..=hi]` with a uniform random sample of the whole slice, without replacement.
///
/// This is a partial Fisher-Yates shuffle over an ordering of the slice in which the positions
/// `lo..=hi` come first.
fn sample<T>(data: &mut [T], lo: usize, hi: usize, rng: &mut StdRng) {
    let len = data.len();
    let count = hi - lo + 1;
    let position = |t: usize| match t {
        t if t < count => lo + t,
        t if t - count < lo => t - count,
        t => t,
    };
    for t in 0..count {
        let j = rng.gen_range(t..len);
        data.swap(position(t), position(j));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn bracket_contains_index() {
        for len in [FLOYD_RIVEST_CUTOFF + 1, 1000, 4321, 100_000, 10_000_000] {
            for index in [0, 1, len / 3, len / 2, len / 2 + 1, len - 2, len - 1] {
                let (lo, hi) = bracket(index, len);
                assert!(lo <= index && index <= hi && hi < len);
                assert!(hi - lo + 1 < len / 4, "len = {len}, bracket = {lo}..={hi}");
            }
        }
    }

    #[test]
    fn bracket_is_sublinear() {
        let len = 10_000_000;
        let (lo, hi) = bracket(len / 2, len);
        // About 0.5 * n^(2/3) = 23208 elements.
        assert!(hi - lo < 30_000);
    }

    #[test]
    fn narrowed_pivot_is_close() {
        let mut rng = StdRng::seed_from_u64(42);
        let len = 20_000;
        for _iter in 0..20 {
            let mut data: Vec<u32> = (0..len).map(|_| rng.gen()).collect();
            let mut sorted = data.clone();
            sorted.sort();
            // Near the ends the bracket is clamped and the estimate is deliberately lopsided.
            let index = rng.gen_range(len as usize / 4..3 * len as usize / 4);
            assert!(narrow(&mut data, index, &mut u32::lt, &mut rng));
            let rank = sorted.partition_point(|x| *x < data[index]);
            assert!(rank.abs_diff(index) < len as usize / 5);
        }
    }

    #[test]
    fn sample_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let len = 1000;
        for (lo, hi) in [(0, 99), (450, 549), (900, 999), (10, 10)] {
            let mut data: Vec<u32> = (0..len).collect();
            sample(&mut data, lo, hi, &mut rng);
            let mut sorted = data.clone();
            sorted.sort();
            assert!(sorted.iter().copied().eq(0..len));
        }
    }

    #[test]
    fn sample_draws_from_the_whole_slice() {
        let mut rng = StdRng::seed_from_u64(11);
        // The bracket starts out holding the smallest values only.
        let len = 10_000u32;
        let (lo, hi) = bracket(len as usize / 2, len as usize);
        let count = (hi - lo + 1) as u32;
        let mut data: Vec<u32> = (count..len).collect();
        data.splice(lo..lo, 0..count);
        sample(&mut data, lo, hi, &mut rng);
        let mean = data[lo..=hi].iter().map(|x| *x as f64).sum::<f64>() / (hi - lo + 1) as f64;
        assert!((mean - len as f64 / 2.0).abs() < len as f64 / 10.0, "mean = {mean}");
    }
}
