/// Partitions the slice into three parts around `pivot`, a value that lives outside the slice.
/// Returns the half-open bounds `(i, j)` of the elements equal to the pivot.
///
/// ```text
/// ┌─────────┬──────────┬─────────┐
/// │ < pivot │ == pivot │ > pivot │
/// └─────────┴──────────┴─────────┘
///            i          j
/// ```
///
/// The pivot need not occur in the slice, in which case `i == j`.
pub(crate) fn partition_around<T, F>(data: &mut [T], pivot: &T, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    // Skip the prefix that is already in place.
    let mut i = 0;
    while i < data.len() && is_less(&data[i], pivot) {
        i += 1;
    }

    //  ┌─────────┬──────────┬─────────┬─────────┐
    //  │ < pivot │ == pivot │  ? .. ? │ > pivot │
    //  └─────────┴──────────┴─────────┴─────────┘
    //             i          j         k
    let (mut j, mut k) = (i, data.len());
    while j < k {
        if is_less(&data[j], pivot) {
            data.swap(i, j);
            i += 1;
            j += 1;
        } else if is_less(pivot, &data[j]) {
            k -= 1;
            data.swap(j, k);
        } else {
            j += 1;
        }
    }
    (i, k)
}

/// Partitions the slice into three parts using the element at index `p` as the pivot. Returns
/// the indices of the first and last elements equal to the pivot.
///
/// Using `(u, v)` to denote the indices returned by the function, the slice is partitioned as
/// follows:
/// ```text
/// ┌───────────┬────────────┬───────────┐
/// │ < data[u] │ == data[u] │ > data[u] │
/// └───────────┴────────────┴───────────┘
///              u          v
/// ```
///
/// Panics if `p` is out of bounds.
pub(crate) fn partition_at<T, F>(data: &mut [T], p: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    data.swap(0, p);
    let (head, tail) = data.split_at_mut(1);
    let (i, j) = partition_around(tail, &head[0], is_less);

    // `tail[..i]` is `data[1..=i]`, so swapping the pivot with `data[i]` closes the gap at the
    // front and places the pivot at the start of the equal run.
    data.swap(0, i);
    (i, j)
}

/// Gathers every element equal to the minimum at the front of the slice and returns the inclusive
/// band `(0, v)` they occupy. The slice must not be empty.
///
/// ```text
/// ┌────────────┬──────────────────────┐
/// │ == minimum │ unordered            │
/// └────────────┴──────────────────────┘
///  0          v
/// ```
pub(crate) fn select_min<T, F>(data: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    // `data[..=v]` holds the copies of the smallest element seen so far.
    let mut v = 0;
    for i in 1..data.len() {
        if is_less(&data[i], &data[0]) {
            // A new minimum: the old band is discarded.
            data.swap(0, i);
            v = 0;
        } else if !is_less(&data[0], &data[i]) {
            // Another copy of the minimum joins the band.
            v += 1;
            data.swap(v, i);
        }
    }
    (0, v)
}

/// Gathers every element equal to the maximum at the back of the slice and returns the inclusive
/// band `(u, len - 1)` they occupy. The slice must not be empty.
///
/// ```text
/// ┌──────────────────────┬────────────┐
/// │ unordered            │ == maximum │
/// └──────────────────────┴────────────┘
///                         u        len-1
/// ```
pub(crate) fn select_max<T, F>(data: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let last = data.len() - 1;
    // `data[u..]` holds the copies of the largest element seen so far.
    let mut u = last;
    for i in (0..last).rev() {
        if is_less(&data[last], &data[i]) {
            // A new maximum: the old band is discarded.
            data.swap(last, i);
            u = last;
        } else if !is_less(&data[i], &data[last]) {
            // Another copy of the maximum joins the band.
            u -= 1;
            data.swap(u, i);
        }
    }
    (u, last)
}
