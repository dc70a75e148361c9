// ============================================================================
// Conversion API
// Generic entry point and per-width short-name functions
// ============================================================================

use crate::scan::{scan_signed, scan_unsigned, Scanned};

/// Integer types scannable through the generic [`scan`] entry point.
///
/// Unifies the signed and unsigned parser cores behind one bound; implemented
/// for every supported width.
pub trait Scan: Sized {
    /// Scan a value of this type from the start of `input`.
    fn scan_bytes(input: &[u8], base: u32) -> Scanned<Self>;
}

macro_rules! impl_scan_via {
    ($core:ident => $($ty:ty),* $(,)?) => {$(
        impl Scan for $ty {
            #[inline]
            fn scan_bytes(input: &[u8], base: u32) -> Scanned<Self> {
                $core::<$ty>(input, base)
            }
        }
    )*};
}

impl_scan_via!(scan_unsigned => u8, u16, u32, u64, u128, usize);
impl_scan_via!(scan_signed => i8, i16, i32, i64, i128, isize);

/// Scan an integer of type `T` from the start of `input`.
///
/// `base` is 0 for auto-detection or an explicit radix in [2, 36]. The result
/// always carries a value, the consumed length and the error classification;
/// see [`Scanned`].
///
/// # Example
/// ```rust
/// use intscan::convert::scan;
///
/// let scanned = scan::<i32>(b"-0x10", 0);
/// assert_eq!(scanned.value, -16);
/// assert_eq!(scanned.len, 5);
/// ```
#[inline]
pub fn scan<T: Scan>(input: &[u8], base: u32) -> Scanned<T> {
    T::scan_bytes(input, base)
}

macro_rules! scan_fns {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name(input: &[u8], base: u32) -> Scanned<$ty> {
            scan::<$ty>(input, base)
        }
    )*};
}

scan_fns! {
    /// Scan an `i8`; see [`scan`].
    scan_i8 => i8,
    /// Scan an `i16`; see [`scan`].
    scan_i16 => i16,
    /// Scan an `i32`; see [`scan`].
    scan_i32 => i32,
    /// Scan an `i64`; see [`scan`].
    scan_i64 => i64,
    /// Scan an `i128`; see [`scan`].
    scan_i128 => i128,
    /// Scan an `isize`; see [`scan`].
    scan_isize => isize,
    /// Scan a `u8`; see [`scan`].
    scan_u8 => u8,
    /// Scan a `u16`; see [`scan`].
    scan_u16 => u16,
    /// Scan a `u32`; see [`scan`].
    scan_u32 => u32,
    /// Scan a `u64`; see [`scan`].
    scan_u64 => u64,
    /// Scan a `u128`; see [`scan`].
    scan_u128 => u128,
    /// Scan a `usize`; see [`scan`].
    scan_usize => usize,
}


#[cfg(test)]
mod differential_tests {
    //! Randomized comparison against the standard library's radix conversion,
    //! the reference implementation for canonical digit strings.

    use super::*;
    use proptest::prelude::*;

    fn to_radix(mut value: u128, base: u32) -> String {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        if value == 0 {
            return "0".to_string();
        }
        let mut out = Vec::new();
        while value > 0 {
            out.push(DIGITS[(value % base as u128) as usize]);
            value /= base as u128;
        }
        out.reverse();
        String::from_utf8(out).unwrap()
    }

    proptest! {
        #[test]
        fn matches_reference_for_u64_decimal(value: u64) {
            let text = value.to_string();
            let reference = u64::from_str_radix(&text, 10).unwrap();
            let scanned = scan_u64(text.as_bytes(), 10);
            prop_assert_eq!(scanned.value, reference);
            prop_assert_eq!(scanned.len, text.len());
            prop_assert!(scanned.error.is_none());
        }

        #[test]
        fn matches_reference_for_u64_in_any_base(value: u64, base in 2u32..=36) {
            let text = to_radix(value as u128, base);
            let reference = u64::from_str_radix(&text, base).unwrap();
            let scanned = scan_u64(text.as_bytes(), base);
            prop_assert_eq!(scanned.value, reference);
            prop_assert_eq!(scanned.len, text.len());
            prop_assert!(scanned.error.is_none());
        }

        #[test]
        fn matches_reference_for_i64_in_any_base(value: i64, base in 2u32..=36) {
            let mut text = String::new();
            if value < 0 {
                text.push('-');
            }
            text.push_str(&to_radix(value.unsigned_abs() as u128, base));
            let reference = i64::from_str_radix(&text, base).unwrap();
            let scanned = scan_i64(text.as_bytes(), base);
            prop_assert_eq!(scanned.value, reference);
            prop_assert_eq!(scanned.len, text.len());
            prop_assert!(scanned.error.is_none());
        }

        #[test]
        fn total_over_arbitrary_input(
            input in proptest::collection::vec(any::<u8>(), 0..64),
            base in 0u32..40,
        ) {
            // Must classify, never panic, and keep the length in bounds
            let scanned = scan_i32(&input, base);
            prop_assert!(scanned.len <= input.len());
            if scanned.error == Some(crate::scan::ScanError::InvalidArgument) {
                prop_assert_eq!(scanned.len, 0);
                prop_assert_eq!(scanned.value, 0);
            }
        }
    }
}
