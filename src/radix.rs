//! Least-significant-digit radix sort built on stable counting passes.
//!
//! Keys are read once. The widest key decides how many passes run; each pass
//! is a counting sort over one digit with `radix` buckets, and because every
//! pass is stable the order established by lower digits survives the higher
//! ones.
//!
//! An example with radix 10:
//!
//! ```text
//! {131, 124, 100}
//!   pass 1: {100, 131, 124}   (ones)
//!   pass 2: {100, 124, 131}   (tens)
//!   pass 3: {100, 124, 131}   (hundreds)
//! ```
//!
//! Runs in Θ(d · (n + r)) for `d` digits, `n` elements and radix `r`.

use crate::core::{Sequence, apply_permutation};
use crate::counting::CountingTables;
use crate::digits::{DigitKey, check_radix, digit_count_in, place_value};
use crate::error::{SortError, check_target};
use log::{debug, trace};

/// Writes a copy of `input`, sorted by `key`, into the front of `target`.
///
/// `input` is left untouched. Keys must be non-negative; `radix` is the digit
/// base and doubles as the bucket count of every pass.
///
/// # Errors
///
/// - [`SortError::InvalidRadix`] if `radix < 2`.
/// - [`SortError::NegativeKey`] for the first negative key.
/// - [`SortError::BufferTooSmall`] if `target` is shorter than `input`.
/// - [`SortError::TableTooLarge`] if `radix` counters cannot be allocated.
///   Empty input never allocates them.
///
/// Nothing is written on error.
///
/// # Examples
///
/// ```
/// use sortkit::radix_sort;
///
/// let input = [170u32, 45, 75, 90, 802, 24, 2, 66];
/// let mut target = [0u32; 8];
/// radix_sort(&input[..], &mut target, |&k| k, 10).unwrap();
///
/// assert_eq!(target, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort<S, K, F>(
    input: &S,
    target: &mut [S::Item],
    key: F,
    radix: usize,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    let order = radix_order(input, key, radix)?;
    check_target(order.len(), target.len())?;

    target
        .iter_mut()
        .zip(order)
        .for_each(|(slot, source)| *slot = input.get_item(source).clone());
    Ok(())
}

/// Sorts `data` in place by `key`. Same contract as [`radix_sort`] without
/// the output buffer; elements are moved, never cloned.
///
/// # Examples
///
/// ```
/// use sortkit::radix_sort_mut;
///
/// let mut data = vec![0x3fu8, 0x10, 0xf0, 0x01];
/// radix_sort_mut(&mut data, |&k| k, 16).unwrap();
///
/// assert_eq!(data, vec![0x01, 0x10, 0x3f, 0xf0]);
/// ```
pub fn radix_sort_mut<S, K, F>(data: &mut S, key: F, radix: usize) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    let order = radix_order(data, key, radix)?;
    apply_permutation(data, order);
    Ok(())
}

/// Computes the sorted placement order of `seq` without moving anything.
fn radix_order<S, K, F>(seq: &S, mut key: F, radix: usize) -> Result<Vec<usize>, SortError>
where
    S: Sequence + ?Sized,
    K: DigitKey,
    F: FnMut(&S::Item) -> K,
{
    check_radix(radix)?;
    if seq.is_empty() {
        return Ok(Vec::new());
    }

    // Phase 1: read every key once and find the widest.
    let magnitudes = (0..seq.len())
        .map(|index| {
            let k = key(seq.get_item(index));
            if k.is_negative() {
                return Err(SortError::NegativeKey {
                    index,
                    key: k.to_string(),
                });
            }
            Ok(k.magnitude())
        })
        .collect::<Result<Vec<u128>, _>>()?;

    let widest = magnitudes.iter().copied().max().unwrap_or(0);
    let passes = digit_count_in(widest, radix)?;
    debug!(
        "radix sort of {} keys: {} passes in radix {}",
        magnitudes.len(),
        passes,
        radix
    );

    // Phase 2: one stable counting pass per digit, least significant first.
    // The tables and both scratch buffers are allocated once for all passes.
    let mut tables = CountingTables::new(radix)?;
    let base = radix as u128;
    let len = magnitudes.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut placed = vec![0; len];

    for pass in 1..=passes {
        trace!("radix pass {}/{}", pass, passes);
        let divisor = place_value(pass, radix)?;

        // scratch holds this pass's digits, then the composed order.
        scratch
            .iter_mut()
            .zip(&order)
            .for_each(|(digit, &source)| {
                *digit = ((magnitudes[source] / divisor) % base) as usize;
            });
        tables.place(&scratch, &mut placed);
        scratch
            .iter_mut()
            .zip(&placed)
            .for_each(|(next, &slot)| *next = order[slot]);
        std::mem::swap(&mut order, &mut scratch);
    }
    Ok(order)
}
