//! # Sortkit
//!
//! `sortkit` is a small library of generic sorting algorithms over any
//! random-access [`Sequence`]: slices, `Vec`s, `VecDeque`s, or your own
//! containers.
//!
//! ## Algorithms
//!
//! - **Insertion Sort**: Stable O(N^2) comparison sort, in place ([`insertion_sort`])
//!   or into a caller buffer ([`insertion_sort_into`]). Takes a "strictly before"
//!   predicate, defaulting to [`Ord`].
//! - **Counting Sort**: Stable O(N + R) sort for integer keys in `[0, range)`
//!   ([`counting_sort`], [`counting_sort_into`]).
//! - **Radix Sort**: Stable O(D · (N + R)) least-significant-digit sort for
//!   non-negative integer keys in any base ([`radix_sort`], [`radix_sort_mut`]).
//! - **Digit Utilities**: [`digit_count`], [`digit_count_in`] and [`digit_at`]
//!   on every primitive integer.
//!
//! ## Usage
//!
//! ### Comparison sort
//!
//! ```rust
//! use sortkit::{insertion_sort, insertion_sort_into_by};
//!
//! let mut data = vec![5, 2, 4, 6, 1, 3];
//! insertion_sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
//!
//! // Descending copy; the input stays as it was.
//! let mut target = vec![0; 6];
//! insertion_sort_into_by(&data, &mut target, |a, b| a > b).unwrap();
//! assert_eq!(target, vec![6, 5, 4, 3, 2, 1]);
//! ```
//!
//! ### Integer keys
//!
//! Linear-time sorts take a key extractor, so any element type can be sorted
//! by an integer field.
//!
//! ```rust
//! use sortkit::{counting_sort, radix_sort};
//!
//! struct Order {
//!     id: u64,
//!     priority: u8,
//! }
//!
//! let mut orders = vec![
//!     Order { id: 802, priority: 2 },
//!     Order { id: 45, priority: 0 },
//!     Order { id: 170, priority: 2 },
//! ];
//!
//! counting_sort(&mut orders, |o| o.priority, 3).unwrap();
//! let ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![45, 802, 170]);
//!
//! let mut by_id = vec![0u64; 3];
//! radix_sort(&ids, &mut by_id, |&id| id, 10).unwrap();
//! assert_eq!(by_id, vec![45, 170, 802]);
//! ```
//!
//! ## Errors
//!
//! Fallible calls return [`SortError`] and check all of their input before the
//! first write: an invalid `range` or `radix`, a key outside the declared
//! range, a negative radix key, or an output buffer shorter than the input
//! leave every sequence exactly as it was.
//!
//! ## Logging
//!
//! Table sizes and radix passes are reported through the [`log`] facade at
//! `debug` and `trace` level. Errors are returned, not logged.

pub mod core;
pub mod counting;
pub mod digits;
pub mod error;
pub mod insertion;
pub mod radix;

pub use crate::core::Sequence;
pub use counting::{counting_sort, counting_sort_into};
pub use digits::{DEFAULT_RADIX, DigitKey, digit_at, digit_count, digit_count_in};
pub use error::SortError;
pub use insertion::{
    insertion_sort, insertion_sort_by, insertion_sort_by_key, insertion_sort_into,
    insertion_sort_into_by,
};
pub use radix::{radix_sort, radix_sort_mut};

pub mod prelude {
    pub use crate::core::Sequence;
    pub use crate::counting::{counting_sort, counting_sort_into};
    pub use crate::digits::{DigitKey, digit_at, digit_count, digit_count_in};
    pub use crate::error::SortError;
    pub use crate::insertion::{
        insertion_sort, insertion_sort_by, insertion_sort_by_key, insertion_sort_into,
        insertion_sort_into_by,
    };
    pub use crate::radix::{radix_sort, radix_sort_mut};
}
