// ============================================================================
// Classic-Form Adapter
// Thread-local last-error slot matching the errno reporting convention
// ============================================================================
//
// The primary API reports errors inside `Scanned`. This adapter serves code
// ported from the classic C conversion family, where the error channel is a
// process-wide indicator: each function returns only (value, consumed length)
// and records any error in a slot owned by the calling thread.
//
// Contract, matching the platform errno semantics:
// - An error overwrites the slot.
// - A successful call leaves the slot untouched; it never clears a prior
//   error.
// - Each thread observes only its own slot.

use std::cell::Cell;

use crate::convert::Scan;
use crate::scan::ScanError;

thread_local! {
    static LAST_ERROR: Cell<Option<ScanError>> = const { Cell::new(None) };
}

/// The calling thread's last recorded scan error, if any.
#[inline]
pub fn last_error() -> Option<ScanError> {
    LAST_ERROR.with(Cell::get)
}

/// Take and clear the calling thread's last recorded scan error.
#[inline]
pub fn take_last_error() -> Option<ScanError> {
    LAST_ERROR.with(Cell::take)
}

/// Clear the calling thread's last recorded scan error.
#[inline]
pub fn clear_last_error() {
    LAST_ERROR.with(|slot| slot.set(None));
}

fn record(error: ScanError) {
    tracing::debug!("numeric scan error: {}", error);
    LAST_ERROR.with(|slot| slot.set(Some(error)));
}

/// Classic-form counterpart of [`crate::convert::scan`].
///
/// Returns the value and consumed length; an error is recorded in the
/// thread-local slot instead of being returned.
#[inline]
pub fn to<T: Scan>(input: &[u8], base: u32) -> (T, usize) {
    let scanned = T::scan_bytes(input, base);
    if let Some(error) = scanned.error {
        record(error);
    }
    (scanned.value, scanned.len)
}

macro_rules! to_fns {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name(input: &[u8], base: u32) -> ($ty, usize) {
            to::<$ty>(input, base)
        }
    )*};
}

to_fns! {
    /// Classic-form scan of an `i8`; see [`to`].
    to_i8 => i8,
    /// Classic-form scan of an `i16`; see [`to`].
    to_i16 => i16,
    /// Classic-form scan of an `i32`; see [`to`].
    to_i32 => i32,
    /// Classic-form scan of an `i64`; see [`to`].
    to_i64 => i64,
    /// Classic-form scan of an `i128`; see [`to`].
    to_i128 => i128,
    /// Classic-form scan of an `isize`; see [`to`].
    to_isize => isize,
    /// Classic-form scan of a `u8`; see [`to`].
    to_u8 => u8,
    /// Classic-form scan of a `u16`; see [`to`].
    to_u16 => u16,
    /// Classic-form scan of a `u32`; see [`to`].
    to_u32 => u32,
    /// Classic-form scan of a `u64`; see [`to`].
    to_u64 => u64,
    /// Classic-form scan of a `u128`; see [`to`].
    to_u128 => u128,
    /// Classic-form scan of a `usize`; see [`to`].
    to_usize => usize,
}
