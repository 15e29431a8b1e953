//! Digit arithmetic on integer keys.
//!
//! Every primitive integer implements [`DigitKey`]. Digits are always taken
//! from the magnitude of a value, widened to `u128`, so `i128::MIN` and
//! `u128::MAX` are handled without overflow.

use crate::error::SortError;
use std::fmt::Display;

/// Base used by [`digit_count`].
pub const DEFAULT_RADIX: usize = 10;

/// An integer usable as a counting or radix sort key.
pub trait DigitKey: Copy + Display {
    /// Returns `true` for values below zero.
    fn is_negative(self) -> bool;

    /// Absolute value, widened so that `MIN` is representable.
    fn magnitude(self) -> u128;
}

macro_rules! impl_digit_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl DigitKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

macro_rules! impl_digit_key_signed {
    ($($t:ty),*) => {
        $(
            impl DigitKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self.unsigned_abs() as u128
                }
            }
        )*
    };
}

impl_digit_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_digit_key_signed!(i8, i16, i32, i64, i128, isize);

/// Returns the number of decimal digits in `|value|`. Zero has one digit.
///
/// # Examples
///
/// ```
/// use sortkit::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(-999), 3);
/// assert_eq!(digit_count(i64::MIN), 19);
/// ```
pub fn digit_count<K: DigitKey>(value: K) -> u32 {
    count_digits(value.magnitude(), DEFAULT_RADIX as u128)
}

/// Returns the number of base-`radix` digits in `|value|`.
///
/// # Errors
///
/// [`SortError::InvalidRadix`] if `radix < 2`.
pub fn digit_count_in<K: DigitKey>(value: K, radix: usize) -> Result<u32, SortError> {
    check_radix(radix)?;
    Ok(count_digits(value.magnitude(), radix as u128))
}

/// Returns the digit of `|value|` at `place`, counting from 1 at the least
/// significant end.
///
/// # Errors
///
/// - [`SortError::InvalidPlace`] if `place == 0`.
/// - [`SortError::InvalidRadix`] if `radix < 2`.
/// - [`SortError::DigitOverflow`] if `radix^(place - 1)` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use sortkit::digit_at;
///
/// assert_eq!(digit_at(802, 1, 10), Ok(2));
/// assert_eq!(digit_at(802, 2, 10), Ok(0));
/// assert_eq!(digit_at(802, 3, 10), Ok(8));
/// assert_eq!(digit_at(0xBEEFu32, 3, 16), Ok(0xE));
/// ```
pub fn digit_at<K: DigitKey>(value: K, place: u32, radix: usize) -> Result<usize, SortError> {
    check_radix(radix)?;
    let divisor = place_value(place, radix)?;
    Ok(((value.magnitude() / divisor) % radix as u128) as usize)
}

/// `radix^(place - 1)`, the weight of the digit at `place`.
pub(crate) fn place_value(place: u32, radix: usize) -> Result<u128, SortError> {
    if place == 0 {
        return Err(SortError::InvalidPlace);
    }
    (radix as u128)
        .checked_pow(place - 1)
        .ok_or(SortError::DigitOverflow { place, radix })
}

pub(crate) fn check_radix(radix: usize) -> Result<(), SortError> {
    if radix < 2 {
        return Err(SortError::InvalidRadix(radix));
    }
    Ok(())
}

/// Digit count of a magnitude. `radix` must be at least 2.
#[inline]
pub(crate) fn count_digits(mut magnitude: u128, radix: u128) -> u32 {
    let mut digits = 1;
    while magnitude >= radix {
        magnitude /= radix;
        digits += 1;
    }
    digits
}
