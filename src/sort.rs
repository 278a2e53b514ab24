#[inline]
/// Compares the elements at `a` and `b` and swaps them if `a` is greater than `b`. Returns `true`
/// if the elements were swapped.
fn swap<T, F>(data: &mut [T], a: usize, b: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a != b);
    debug_assert!(a < data.len());
    debug_assert!(b < data.len());

    let swap = is_less(&data[b], &data[a]);
    if swap {
        data.swap(a, b);
    }
    swap
}

/// Reorders the element at the positions in `pos` so that the median becomes `pos[N / 2]`.
/// Element at `pos[i]` is less than or equal to the element at `pos[N / 2]` for all `i < N / 2`
/// and greater than or equal to the element at `pos[N / 2]` for all `i > N / 2`.
///
/// For even `N` this is the upper median.
pub(crate) fn median_at<T, F, const N: usize>(data: &mut [T], pos: [usize; N], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    macro_rules! sort2 {
        ($a:expr, $b:expr) => {
            swap(data, pos[$a], pos[$b], is_less);
        };
    }
    match N {
        0 | 1 => {}
        2 => {
            sort2!(0, 1);
        }
        3 => {
            sort2!(0, 2);
            sort2!(0, 1);
            sort2!(1, 2);
        }
        4 => {
            sort2!(0, 2);
            sort2!(1, 3);
            sort2!(0, 1);
            sort2!(2, 3);
            sort2!(1, 2);
        }
        5 => {
            sort2!(0, 1);
            sort2!(2, 3);
            sort2!(0, 2);
            sort2!(1, 3);
            sort2!(2, 4);
            sort2!(1, 2);
            sort2!(2, 4);
        }
        _ => unimplemented!("median not implemented for N = {N}"),
    }
}

/// Sorts the elements at the positions in `pos` so that the smallest element becomes `pos[0]` and
/// each element `pos[i]` is less than or equal to the element at `pos[j]` if `i < j`.
pub(crate) fn sort_at<T, F, const N: usize>(data: &mut [T], pos: [usize; N], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    macro_rules! sort2 {
        ($a:expr, $b:expr) => {
            swap(data, pos[$a], pos[$b], is_less);
        };
    }
    match N {
        0 | 1 => {}
        2 => {
            sort2!(0, 1);
        }
        3 => {
            sort2!(0, 2);
            sort2!(0, 1);
            sort2!(1, 2);
        }
        4 => {
            sort2!(0, 2);
            sort2!(1, 3);
            sort2!(0, 1);
            sort2!(2, 3);
            sort2!(1, 2);
        }
        5 => {
            sort2!(0, 3);
            sort2!(1, 4);
            sort2!(0, 2);
            sort2!(1, 3);
            sort2!(0, 1);
            sort2!(2, 4);
            sort2!(1, 2);
            sort2!(3, 4);
            sort2!(2, 3);
        }
        _ => unimplemented!("sort not implemented for N = {N}"),
    }
}

/// Sorts a slice of at most five elements in place.
pub(crate) fn sort_small<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    match data.len() {
        0 | 1 => {}
        2 => sort_at(data, [0, 1], is_less),
        3 => sort_at(data, [0, 1, 2], is_less),
        4 => sort_at(data, [0, 1, 2, 3], is_less),
        5 => sort_at(data, [0, 1, 2, 3, 4], is_less),
        len => unimplemented!("small sort not implemented for {len} elements"),
    }
}

/// Puts the upper median of the `len <= 5` elements starting at `start` at position
/// `start + len / 2`.
pub(crate) fn median_of_group<T, F>(data: &mut [T], start: usize, len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let s = start;
    match len {
        0 | 1 => {}
        2 => median_at(data, [s, s + 1], is_less),
        3 => median_at(data, [s, s + 1, s + 2], is_less),
        4 => median_at(data, [s, s + 1, s + 2, s + 3], is_less),
        5 => median_at(data, [s, s + 1, s + 2, s + 3, s + 4], is_less),
        _ => unimplemented!("group median not implemented for {len} elements"),
    }
}
