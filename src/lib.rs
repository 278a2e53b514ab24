//! Calculate order statistics.
//!
//! [`kth`] and [`kth_by`] find the `k`th smallest element of a slice in place with the
//! Floyd & Rivest algorithm, reordering the slice the way [`slice::select_nth_unstable`] does.
//! [`median_of_medians`] and [`median_of_medians_by`] compute a cheap approximate median, which
//! is guaranteed to lie between roughly the 30th and the 70th percentile.
//!
//! Ranks are zero-based: `kth(v, 0)` is the minimum. Empty slices and out-of-range ranks are
//! reported as [`Error`]s before the slice is touched.
//!
//! ```rust
//! let mut v = vec![10, 3, 7, 1, 9];
//! assert_eq!(*order_stat::kth(&mut v, 2).unwrap(), 7);
//! ```

use core::cmp::Ordering;

use log::debug;

mod error;
mod floyd_rivest;
mod mom;
mod partition;
mod select;
mod sort;


pub use error::{Error, Result};

/// Compute the `k`th order statistic (`k`th smallest element) of `array` via the Floyd-Rivest
/// algorithm.
///
/// `array` is reordered so that the element at index `k` is the one that would be there if the
/// slice were sorted, all elements before it are less than or equal to it, and all elements after
/// it are greater than or equal to it. A reference to that element is returned.
///
/// Long slices are narrowed with the Floyd & Rivest estimate over a random sample, so the pivot of
/// the first partition is usually within a few percent of the answer. Whenever a partition step
/// makes little progress, the next pivot is a median-of-medians, which keeps the worst case
/// linear. The sample generator has a fixed seed, so the same input is always reordered the same
/// way.
///
/// A slice that already has the `k`th element in place, with nothing greater before it and nothing
/// smaller after it, is left unchanged. In particular, calling `kth` again with the same `k`
/// changes nothing.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `array` is empty and [`Error::RankOutOfBounds`] if
/// `k >= array.len()`. The slice is not modified in either case.
///
/// # Examples
///
/// ```rust
/// // the numbers 0, 1, ..., 100.
/// let mut x = (0..101).rev().collect::<Vec<_>>();
/// assert_eq!(*order_stat::kth(&mut x, 10).unwrap(), 10);
/// assert_eq!(*order_stat::kth(&mut x, 0).unwrap(), 0);
/// assert_eq!(*order_stat::kth(&mut x, 100).unwrap(), 100);
///
/// assert!(order_stat::kth(&mut x, 101).is_err());
///
/// let before = x.clone();
/// assert_eq!(*order_stat::kth(&mut x, 100).unwrap(), 100);
/// assert_eq!(x, before);
/// ```
pub fn kth<T: Ord>(array: &mut [T], k: usize) -> Result<&mut T> {
    select_with(array, k, &mut T::lt)
}

/// Compute the element that is the `k`th order statistic in the ordering defined by `cmp` (that
/// is, the `k`th element of `array.sort_by(cmp)`).
///
/// See [`kth`] for the reordering and complexity guarantees.
///
/// `cmp` must define a total order. If it does not, the element returned and the order of the
/// slice are unspecified, but the call is still memory safe and terminates.
///
/// # Errors
///
/// Same as [`kth`].
///
/// # Examples
///
/// ```rust
/// // the numbers 0.0, 1.0, ..., 100.0.
/// let mut x = (0..101).map(|x| x as f64).rev().collect::<Vec<_>>();
///
/// let k = order_stat::kth_by(&mut x, 50, |x, y| x.total_cmp(y)).unwrap();
/// assert_eq!(*k, 50.0);
///
/// // Largest first.
/// let k = order_stat::kth_by(&mut x, 0, |x, y| y.total_cmp(x)).unwrap();
/// assert_eq!(*k, 100.0);
/// ```
pub fn kth_by<T, F>(array: &mut [T], k: usize, mut cmp: F) -> Result<&mut T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    select_with(array, k, &mut |a: &T, b: &T| cmp(a, b) == Ordering::Less)
}

/// Calculate an approximate median of `array`.
///
/// The return value is the index and a reference to some element of `array` that is guaranteed to
/// lie between the 30th and 70th percentiles of the values in `array`, give or take two elements
/// for the short last group of five. The slice is reordered: the medians of the groups of five are
/// moved to its front.
///
/// This is **not** the exact median. Use `kth(array, array.len() / 2)` for that. For slices of
/// fewer than five elements the result is exact, and when the length is even it is the upper of
/// the two middle elements.
///
/// Runs in worst-case linear time.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `array` is empty.
///
/// # Examples
///
/// ```rust
/// // the numbers 0, 1, ..., 100.
/// let mut x = (0..101).rev().collect::<Vec<_>>();
/// let (_, &mut median) = order_stat::median_of_medians(&mut x).unwrap();
/// assert!(30 <= median);
/// assert!(median <= 70);
/// ```
pub fn median_of_medians<T: Ord>(array: &mut [T]) -> Result<(usize, &mut T)> {
    median_with(array, &mut T::lt)
}

/// Calculate an approximate median of `array`, using the ordering defined by `cmp`.
///
/// See [`median_of_medians`] for the guarantees.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `array` is empty.
///
/// # Examples
///
/// ```rust
/// // the numbers 0.0, 1.0, ..., 100.0.
/// let mut x = (0..101).map(|x| x as f64).rev().collect::<Vec<_>>();
/// let (_, &mut median) = order_stat::median_of_medians_by(&mut x, |x, y| x.total_cmp(y)).unwrap();
/// assert!(30.0 <= median);
/// assert!(median <= 70.0);
/// ```
pub fn median_of_medians_by<T, F>(array: &mut [T], mut cmp: F) -> Result<(usize, &mut T)>
where
    F: FnMut(&T, &T) -> Ordering,
{
    median_with(array, &mut |a: &T, b: &T| cmp(a, b) == Ordering::Less)
}

fn select_with<'a, T, F>(array: &'a mut [T], k: usize, is_less: &mut F) -> Result<&'a mut T>
where
    F: FnMut(&T, &T) -> bool,
{
    if let Err(err) = error::check_rank(array.len(), k) {
        debug!("rejecting selection: {err}");
        return Err(err);
    }
    select::select_nth(array, k, is_less);
    Ok(&mut array[k])
}

fn median_with<'a, T, F>(array: &'a mut [T], is_less: &mut F) -> Result<(usize, &'a mut T)>
where
    F: FnMut(&T, &T) -> bool,
{
    if array.is_empty() {
        debug!("rejecting median of an empty slice");
        return Err(Error::EmptyInput);
    }
    let index = mom::median_of_medians(array, is_less);
    Ok((index, &mut array[index]))
}
