//! Stable O(N^2) insertion sort.
//!
//! The working area is split into `[sorted | unsorted]`. Each step takes the
//! next element and swaps it towards the front while it strictly precedes its
//! left neighbour, so equal elements never pass each other. Nearly-sorted
//! input approaches linear time.

use crate::core::Sequence;
use crate::error::{SortError, check_target};

/// Sorts `data` in place by its natural ordering.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort;
///
/// let mut data = vec![5, 2, 4, 6, 1, 3];
/// insertion_sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn insertion_sort<S>(data: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    insertion_sort_by(data, |a, b| a < b);
}

/// Sorts `data` in place with a "strictly before" predicate.
///
/// `less_than(a, b)` must return `true` iff `a` has to come before `b`; it
/// should be a strict weak ordering. A predicate that is not still leaves a
/// permutation of the input, in unspecified order.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort_by;
///
/// let mut data = vec![1, 5, 3];
/// insertion_sort_by(&mut data, |a, b| a > b);
///
/// assert_eq!(data, vec![5, 3, 1]);
/// ```
pub fn insertion_sort_by<S, F>(data: &mut S, mut less_than: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for current in 1..data.len() {
        sift_left(data, current, &mut less_than);
    }
}

/// Sorts `data` in place by an extracted key.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort_by_key;
///
/// let mut words = vec!["ccc", "a", "bb", "d"];
/// insertion_sort_by_key(&mut words, |w| w.len());
///
/// assert_eq!(words, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn insertion_sort_by_key<S, K, F>(data: &mut S, mut key: F)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    insertion_sort_by(data, |a, b| key(a) < key(b));
}

/// Writes a sorted copy of `input` into the front of `target`.
///
/// `input` is left untouched. Only the first `input.len()` slots of `target`
/// are written.
///
/// # Errors
///
/// [`SortError::BufferTooSmall`] if `target` is shorter than `input`. Nothing
/// is written in that case.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort_into;
///
/// let input = [3, 1, 2];
/// let mut target = [0; 3];
/// insertion_sort_into(&input[..], &mut target).unwrap();
///
/// assert_eq!(target, [1, 2, 3]);
/// assert_eq!(input, [3, 1, 2]);
/// ```
pub fn insertion_sort_into<S>(input: &S, target: &mut [S::Item]) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    insertion_sort_into_by(input, target, |a, b| a < b)
}

/// Writes a copy of `input` into `target`, sorted by `less_than`.
///
/// See [`insertion_sort_by`] for the predicate contract and
/// [`insertion_sort_into`] for the buffer contract.
pub fn insertion_sort_into_by<S, F>(
    input: &S,
    target: &mut [S::Item],
    mut less_than: F,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = input.len();
    check_target(len, target.len())?;

    let working = &mut target[..len];
    for end in 0..len {
        working[end] = input.get_item(end).clone();
        sift_left(&mut *working, end, &mut less_than);
    }
    Ok(())
}

/// Moves the element at `back` leftwards past every neighbour it strictly
/// precedes. `data[..back]` must already be sorted.
#[inline]
fn sift_left<S, F>(data: &mut S, mut back: usize, less_than: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while back > 0 && less_than(data.get_item(back), data.get_item(back - 1)) {
        data.swap_items(back, back - 1);
        back -= 1;
    }
}
