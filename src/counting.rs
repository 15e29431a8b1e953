//! Stable O(N + R) counting sort for bounded integer keys.
//!
//! Sorting happens in three passes over the keys:
//!
//! 1. Count how many times each key value occurs (`occurrences`).
//! 2. Prefix-sum the counts into the first output slot of every key (`offsets`).
//! 3. Walk the input in order, sending each element to `offsets[key]` and
//!    bumping that offset, which keeps equal keys in input order.
//!
//! The third pass produces a placement order rather than moving elements, so
//! the source is never overwritten while it is still being read. The order is
//! then either gathered into a caller buffer or applied in place by following
//! its cycles.

use crate::core::{Sequence, apply_permutation};
use crate::digits::DigitKey;
use crate::error::{SortError, check_target};
use cuneiform::cuneiform;
use log::debug;

/// Largest range whose counting tables live inline instead of on the heap.
const INLINE_RANGE: usize = 256;

// Cache-aligned table for small ranges (byte-sized radices and below).
#[cuneiform]
struct InlineCounts {
    data: [usize; INLINE_RANGE],
}

/// A zeroed table of `range` counters.
enum CountTable {
    Inline(InlineCounts, usize),
    Heap(Vec<usize>),
}

impl CountTable {
    fn zeroed(range: usize) -> Result<Self, SortError> {
        if range <= INLINE_RANGE {
            return Ok(CountTable::Inline(
                InlineCounts {
                    data: [0; INLINE_RANGE],
                },
                range,
            ));
        }

        let mut counts = Vec::new();
        counts
            .try_reserve_exact(range)
            .map_err(|_| SortError::TableTooLarge { range })?;
        counts.resize(range, 0);
        Ok(CountTable::Heap(counts))
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        match self {
            CountTable::Inline(counts, range) => &mut counts.data[..*range],
            CountTable::Heap(counts) => counts,
        }
    }
}

/// The `occurrences` and `offsets` tables of one counting sort, reusable
/// across passes over keys with the same range.
pub(crate) struct CountingTables {
    occurrences: CountTable,
    offsets: CountTable,
}

impl CountingTables {
    /// Allocates both tables for keys in `[0, range)`.
    pub(crate) fn new(range: usize) -> Result<Self, SortError> {
        Ok(CountingTables {
            occurrences: CountTable::zeroed(range)?,
            offsets: CountTable::zeroed(range)?,
        })
    }

    /// Writes the stable placement of `keys` into `order`: `order[i]` is the
    /// input position of the element that belongs at output position `i`.
    ///
    /// Every key must be below the table range and `order` must be as long
    /// as `keys`.
    pub(crate) fn place(&mut self, keys: &[usize], order: &mut [usize]) {
        debug_assert_eq!(keys.len(), order.len());

        // 1. Count occurrences of each key
        let occurrences = self.occurrences.as_mut_slice();
        occurrences.fill(0);
        keys.iter().for_each(|&k| occurrences[k] += 1);

        // 2. Compute offsets (prefix sum)
        let offsets = self.offsets.as_mut_slice();
        let mut sum = 0;
        offsets
            .iter_mut()
            .zip(occurrences.iter())
            .for_each(|(offset, &count)| {
                *offset = sum;
                sum += count;
            });

        // 3. Place in input order
        keys.iter().enumerate().for_each(|(index, &k)| {
            order[offsets[k]] = index;
            offsets[k] += 1;
        });
    }
}

/// Sorts `data` in place by `key`, where every key lies in `[0, range)`.
///
/// The sort is stable. Keys may be any primitive integer; negative keys are
/// out of range.
///
/// # Errors
///
/// - [`SortError::InvalidRange`] if `range == 0`, even for empty input.
/// - [`SortError::KeyOutOfRange`] for the first key outside `[0, range)`.
/// - [`SortError::TableTooLarge`] if the counting tables for `range` cannot
///   be allocated. Empty input never allocates them.
///
/// Every key is checked before any element moves, so on error `data` is
/// unchanged.
///
/// # Examples
///
/// ```
/// use sortkit::counting_sort;
///
/// let mut data = vec![4u8, 2, 2, 8, 3, 3, 1];
/// counting_sort(&mut data, |&k| k, 9).unwrap();
///
/// assert_eq!(data, vec![1, 2, 2, 3, 3, 4, 8]);
/// ```
pub fn counting_sort<S, K, F>(data: &mut S, key: F, range: usize) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    let keys = key_slots(data, key, range)?;
    if keys.is_empty() {
        return Ok(());
    }

    debug!("counting sort of {} keys over range {}", keys.len(), range);
    apply_permutation(data, placement_order(&keys, range)?);
    Ok(())
}

/// Writes a copy of `input`, sorted by `key`, into the front of `target`.
///
/// `input` is left untouched. Same key contract as [`counting_sort`].
///
/// # Errors
///
/// As [`counting_sort`], plus [`SortError::BufferTooSmall`] if `target` is
/// shorter than `input`. Nothing is written on error.
///
/// # Examples
///
/// ```
/// use sortkit::counting_sort_into;
///
/// let people = vec![("ann", 31), ("bob", 27), ("cy", 31), ("di", 19)];
/// let mut by_age = vec![("", 0); 4];
/// counting_sort_into(&people, &mut by_age, |p| p.1, 120).unwrap();
///
/// assert_eq!(by_age, vec![("di", 19), ("bob", 27), ("ann", 31), ("cy", 31)]);
/// ```
pub fn counting_sort_into<S, K, F>(
    input: &S,
    target: &mut [S::Item],
    key: F,
    range: usize,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    let keys = key_slots(input, key, range)?;
    check_target(keys.len(), target.len())?;
    if keys.is_empty() {
        return Ok(());
    }

    debug!("counting sort of {} keys over range {}", keys.len(), range);
    let order = placement_order(&keys, range)?;
    target
        .iter_mut()
        .zip(order)
        .for_each(|(slot, source)| *slot = input.get_item(source).clone());
    Ok(())
}

/// Extracts every key of `seq` as a table index, validating it against
/// `range`.
pub(crate) fn key_slots<S, K, F>(seq: &S, mut key: F, range: usize) -> Result<Vec<usize>, SortError>
where
    S: Sequence + ?Sized,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    if range == 0 {
        return Err(SortError::InvalidRange);
    }

    (0..seq.len())
        .map(|index| {
            let k = key(seq.get_item(index));
            if k.is_negative() || k.magnitude() >= range as u128 {
                return Err(SortError::KeyOutOfRange {
                    index,
                    key: k.to_string(),
                    range,
                });
            }
            Ok(k.magnitude() as usize)
        })
        .collect()
}

/// Stable placement of already-validated keys, see [`CountingTables::place`].
fn placement_order(keys: &[usize], range: usize) -> Result<Vec<usize>, SortError> {
    let mut tables = CountingTables::new(range)?;
    let mut order = vec![0; keys.len()];
    tables.place(keys, &mut order);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_sorts_small_range() {
        let mut data = vec![4, 2, 2, 8, 3, 3, 1];
        counting_sort(&mut data, |&k| k, 9).unwrap();
        assert_eq!(data, vec![1, 2, 2, 3, 3, 4, 8]);
    }

    #[test]
    fn test_zero_range_is_rejected() {
        let mut data = vec![1u8, 0];
        assert_eq!(
            counting_sort(&mut data, |&k| k, 0),
            Err(SortError::InvalidRange)
        );
        assert_eq!(data, vec![1, 0]);

        let mut empty: Vec<u8> = vec![];
        assert_eq!(
            counting_sort(&mut empty, |&k| k, 0),
            Err(SortError::InvalidRange)
        );
    }

    #[test]
    fn test_key_out_of_range_leaves_data_untouched() {
        let mut data = vec![3, 1, 9, 2];
        let err = counting_sort(&mut data, |&k| k, 9).unwrap_err();
        assert_eq!(
            err,
            SortError::KeyOutOfRange {
                index: 2,
                key: "9".to_string(),
                range: 9,
            }
        );
        assert_eq!(data, vec![3, 1, 9, 2]);
    }

    #[test]
    fn test_negative_key_is_out_of_range() {
        let mut data = vec![1i64, -1];
        let err = counting_sort(&mut data, |&k| k, 4).unwrap_err();
        assert_eq!(
            err,
            SortError::KeyOutOfRange {
                index: 1,
                key: "-1".to_string(),
                range: 4,
            }
        );
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let mut data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (2, 'e')];
        counting_sort(&mut data, |p| p.0 as u8, 3).unwrap();
        assert_eq!(data, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_large_range_uses_heap_table() {
        let mut data: Vec<u32> = vec![70_000, 5, 65_536, 300, 5];
        counting_sort(&mut data, |&k| k, 70_001).unwrap();
        assert_eq!(data, vec![5, 5, 300, 65_536, 70_000]);
    }

    #[test]
    fn test_copy_mode() {
        let input = vec![4u16, 0, 3, 0];
        let mut target = vec![9u16; 6];
        counting_sort_into(&input, &mut target, |&k| k, 5).unwrap();
        assert_eq!(input, vec![4, 0, 3, 0]);
        assert_eq!(target, vec![0, 0, 3, 4, 9, 9]);
    }

    #[test]
    fn test_copy_mode_rejects_short_buffer() {
        let input = vec![1u8, 0, 1];
        let mut target = vec![7u8; 2];
        assert_eq!(
            counting_sort_into(&input, &mut target, |&k| k, 2),
            Err(SortError::BufferTooSmall { needed: 3, got: 2 })
        );
        assert_eq!(target, vec![7, 7]);
    }

    #[test]
    fn test_vec_deque_in_place() {
        let mut data: VecDeque<u8> = VecDeque::from(vec![2, 0, 1]);
        data.push_front(1);
        counting_sort(&mut data, |&k| k, 3).unwrap();
        assert_eq!(data, VecDeque::from(vec![0, 1, 1, 2]));
    }

    #[test]
    fn test_placement_order() {
        assert_eq!(placement_order(&[2, 0, 2, 1], 3), Ok(vec![1, 3, 0, 2]));
        assert_eq!(placement_order(&[], 1), Ok(vec![]));
    }

    #[test]
    fn test_tables_are_reusable() {
        let mut tables = CountingTables::new(3).unwrap();
        let mut order = vec![0; 4];

        tables.place(&[2, 0, 2, 1], &mut order);
        assert_eq!(order, vec![1, 3, 0, 2]);

        // Counts from the previous pass must not leak into this one.
        tables.place(&[1, 1, 0, 0], &mut order);
        assert_eq!(order, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_huge_range_on_empty_input_allocates_nothing() {
        let mut empty: Vec<u8> = vec![];
        counting_sort(&mut empty, |&k| k, usize::MAX).unwrap();

        let mut target: Vec<u8> = vec![];
        counting_sort_into(&empty, &mut target, |&k| k, usize::MAX).unwrap();
    }

    #[test]
    fn test_unallocatable_range_is_an_error() {
        let mut data = vec![3u64, 1, 2];
        assert_eq!(
            counting_sort(&mut data, |&k| k, usize::MAX),
            Err(SortError::TableTooLarge { range: usize::MAX })
        );
        assert_eq!(data, vec![3, 1, 2]);

        let mut target = vec![0u64; 3];
        assert_eq!(
            counting_sort_into(&data, &mut target, |&k| k, usize::MAX),
            Err(SortError::TableTooLarge { range: usize::MAX })
        );
        assert_eq!(target, vec![0, 0, 0]);
    }
}
