use log::trace;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    floyd_rivest::{self, FLOYD_RIVEST_CUTOFF},
    mom::median_of_medians,
    partition::{partition_at, select_max, select_min},
    sort::{sort_at, sort_small},
};

/// Slices of at most this many elements are sorted with a sorting network.
const SMALL: usize = 5;

/// Seed of the generator that draws the Floyd & Rivest samples. A fixed seed keeps every
/// selection reproducible.
const SEED: u64 = 0;

/// Reorders the slice so that the element at `index` is at its sorted position. Elements before
/// `index` are less than or equal to it and elements after it are greater than or equal to it.
///
/// Each step partitions the remaining slice around a pivot and keeps the part that contains
/// `index`. The pivot comes from the Floyd & Rivest estimate over a random sample on long slices
/// and from five evenly spaced elements on short ones. When a step removes less than an eighth of
/// the slice, the next pivot is the median-of-medians, which bounds the total work.
pub(crate) fn select_nth<T, F>(data: &mut [T], index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // A slice that already satisfies the contract is left exactly as it is.
    if is_selected(data, index, is_less) {
        return;
    }
    let mut rng = StdRng::seed_from_u64(SEED);
    select_nth_with(data, index, is_less, &mut rng);
}

/// Returns `true` if no element before `index` is greater than `data[index]` and no element after
/// it is less. Stops at the first element out of place, so unordered input costs only a few
/// comparisons.
fn is_selected<T, F>(data: &[T], index: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let (head, tail) = data.split_at(index);
    let Some((nth, tail)) = tail.split_first() else {
        return false;
    };
    !head.iter().rev().any(|x| is_less(nth, x)) && !tail.iter().any(|x| is_less(x, nth))
}

/// Same as [`select_nth`], drawing the samples from `rng`.
pub(crate) fn select_nth_with<T, F>(
    mut data: &mut [T],
    mut index: usize,
    is_less: &mut F,
    rng: &mut StdRng,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < data.len());
    let mut slow = false;
    loop {
        let len = data.len();
        let (u, v) = match (index, len) {
            (_, 0..=1) => return,
            // When selecting the minimum or maximum, partitioning is not necessary
            (0, _) => select_min(data, is_less),
            (i, len) if i == len - 1 => select_max(data, is_less),
            (_, 2..=SMALL) => {
                sort_small(data, is_less);
                return;
            }
            _ => {
                let p = if slow {
                    trace!("falling back to a median-of-medians pivot for {len} elements");
                    median_of_medians(data, is_less)
                } else if len > FLOYD_RIVEST_CUTOFF
                    && floyd_rivest::narrow(data, index, is_less, rng)
                {
                    index
                } else {
                    sample_pivot(data, index, is_less)
                };
                partition_at(data, p, is_less)
            }
        };

        // Test if the pivot is at its sorted position and if not, continue with the part that
        // contains `index`.
        if index < u {
            data = &mut data[..u];
        } else if index > v {
            data = &mut data[v + 1..];
            index -= v + 1;
        } else {
            return;
        }
        slow = data.len() > len - len / 8;
    }
}

/// Sorts five evenly spaced elements and returns the position of the one whose rank in the sample
/// corresponds to `index`.
fn sample_pivot<T, F>(data: &mut [T], index: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len > SMALL);
    let pos = [0, len / 4, len / 2, 3 * len / 4, len - 1];
    sort_at(data, pos, is_less);
    pos[SMALL * index / len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    fn check_nth(data: &[usize], index: usize, expected: usize) {
        assert_eq!(data[index], expected);
        assert!(data[..index].iter().all(|x| *x <= expected));
        assert!(data[index + 1..].iter().all(|x| *x >= expected));
    }

    #[test]
    fn floyd_rivest_3000() {
        let count = 3000;
        let mut rng = StdRng::seed_from_u64(123);

        for k in (0..count).step_by(7) {
            let mut data: Vec<usize> = (0..count).map(|_| rng.gen_range(0..count)).collect();
            let mut sorted = data.clone();
            sorted.sort();
            select_nth(&mut data, k, &mut usize::lt);
            check_nth(&data, k, sorted[k]);
        }
    }

    #[test]
    fn nth_small() {
        let mut rng = StdRng::seed_from_u64(123);

        for _iter in 0..1000 {
            let count = rng.gen_range(1..1000);
            let high = rng.gen_range(1..=count);

            let mut data: Vec<_> = (0..count).map(|_| rng.gen_range(0..high)).collect();
            let mut sorted = data.clone();
            sorted.sort();
            let index = rng.gen_range(0..count);
            select_nth(&mut data, index, &mut usize::lt);
            check_nth(&data, index, sorted[index]);
        }
    }

    #[test]
    fn large_median() {
        let mut rng = StdRng::seed_from_u64(123);
        let count = 1_000_000;
        let mid = count / 2;

        let mut data: Vec<usize> = (0..count).collect();
        data.shuffle(&mut rng);
        select_nth(&mut data, mid, &mut usize::lt);
        check_nth(&data, mid, mid);
    }

    #[test]
    fn extreme_index() {
        let mut rng = StdRng::seed_from_u64(123);
        let count = 1_000_000;

        let mut data: Vec<usize> = (0..count).collect();
        data.shuffle(&mut rng);
        let index = 42;
        select_nth(&mut data, index, &mut usize::lt);
        check_nth(&data, index, index);

        let index = count - 42;
        select_nth(&mut data, index, &mut usize::lt);
        check_nth(&data, index, index);
    }

    #[test]
    fn sorted_and_reversed() {
        let count = 10_000;
        for index in [1, 17, count / 3, count / 2, count - 2] {
            let mut data: Vec<usize> = (0..count).collect();
            select_nth(&mut data, index, &mut usize::lt);
            check_nth(&data, index, index);

            let mut data: Vec<usize> = (0..count).rev().collect();
            select_nth(&mut data, index, &mut usize::lt);
            check_nth(&data, index, index);
        }
    }

    #[test]
    fn adversarial_comparisons_stay_bounded() {
        // A sawtooth defeats a fixed sampling pattern; the median-of-medians fallback has to
        // keep the number of comparisons linear.
        let count = 100_000;
        let period = 1000;
        let mut data: Vec<usize> = (0..count).map(|i| i % period * count + i).collect();
        let mut sorted = data.clone();
        sorted.sort();
        let mut comparisons = 0usize;
        let index = count / 2;
        select_nth(&mut data, index, &mut |a: &usize, b: &usize| {
            comparisons += 1;
            a < b
        });
        check_nth(&data, index, sorted[index]);
        assert!(comparisons < 40 * count, "{comparisons} comparisons");
    }

    #[test]
    fn sample_pivot_follows_rank() {
        let mut data: Vec<usize> = (0..100).rev().collect();
        let p = sample_pivot(&mut data, 0, &mut usize::lt);
        assert_eq!(data[p], 0);
        let p = sample_pivot(&mut data, 99, &mut usize::lt);
        assert_eq!(data[p], 99);
    }

    #[test]
    fn selected_slice_is_left_alone() {
        let mut rng = StdRng::seed_from_u64(8);
        let count = 10_000;
        let mut data: Vec<usize> = (0..count).map(|_| rng.gen_range(0..count / 10)).collect();
        let index = count / 3;
        select_nth(&mut data, index, &mut usize::lt);
        let before = data.clone();
        let mut comparisons = 0usize;
        select_nth(&mut data, index, &mut |a: &usize, b: &usize| {
            comparisons += 1;
            a < b
        });
        assert_eq!(data, before);
        assert_eq!(comparisons, count - 1);
    }

    #[test]
    fn organ_pipe_comparisons_stay_low() {
        // Ascending then descending: the bracket of the median holds only the largest values.
        let count = 1_000_000;
        let index = count / 2;
        let mut data: Vec<usize> = (0..count / 2).chain((0..count / 2).rev()).collect();
        let mut sorted = data.clone();
        sorted.sort();
        let mut comparisons = 0usize;
        select_nth(&mut data, index, &mut |a: &usize, b: &usize| {
            comparisons += 1;
            a < b
        });
        check_nth(&data, index, sorted[index]);
        assert!(comparisons < 4 * count, "{comparisons} comparisons");
    }
}
