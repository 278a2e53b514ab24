//! Median-of-medians pivot estimation and the deterministic selection built on it.

use crate::{
    partition::partition_at,
    sort::{median_of_group, sort_small},
};

/// The group size of the median-of-medians estimator.
const GROUP: usize = 5;

/// Reorders the slice and returns the index of an approximate median. At least about 30% of the
/// elements are less than or equal to it and at least about 30% are greater than or equal to it.
///
/// The medians of consecutive groups of five are gathered at the front of the slice and the
/// exact median of those is selected. The last group may be shorter than five. Ties between two
/// middle elements always go to the upper one.
///
/// ```text
/// ┌──────────────────┬─────────────────────────────┐
/// │ group medians    │ rest of the groups          │
/// └──────────────────┴─────────────────────────────┘
///  0      ^ returned  g = ceil(len / 5)
/// ```
///
/// Runs in worst-case linear time. Panics if the slice is empty.
pub(crate) fn median_of_medians<T, F>(data: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    assert!(len > 0);
    if len < GROUP {
        sort_small(data, is_less);
        return len / 2;
    }

    let count = len.div_ceil(GROUP);
    for i in 0..count {
        let start = GROUP * i;
        let size = GROUP.min(len - start);
        median_of_group(data, start, size, is_less);
        // `i <= start`, and every position below `start` belongs to a group that is done.
        data.swap(i, start + size / 2);
    }

    let mid = count / 2;
    select_deterministic(&mut data[..count], mid, is_less);
    mid
}

/// Reorders the slice so that the element at `index` is at its sorted position, using the
/// median-of-medians as the pivot of every partition step.
///
/// This is slower on average than the Floyd & Rivest selection, but its worst case is linear.
pub(crate) fn select_deterministic<T, F>(mut data: &mut [T], mut index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < data.len());
    loop {
        if data.len() <= GROUP {
            sort_small(data, is_less);
            return;
        }
        let p = median_of_medians(data, is_less);
        let (u, v) = partition_at(data, p, is_less);
        if index < u {
            data = &mut data[..u];
        } else if index > v {
            data = &mut data[v + 1..];
            index -= v + 1;
        } else {
            return;
        }
    }
}
