// ============================================================================
// Scanning Core
// Base resolution and digit accumulation for all supported widths
// ============================================================================
//
// This module provides:
// - Scanned<T>: value, consumed length and error of one scan pass
// - scan_unsigned/scan_signed: the two generic accumulation routines
// - ScanUnsigned/ScanSigned: sealed traits over the producible types
// - DIGIT_VALUE/digit_value: the byte classification table
//
// Design principles:
// - Single linear pass, no allocation, no panicking path
// - Overflow is detected before any wrap and saturates to the type bound
// - The consumed length always reflects the full numeric token

pub(crate) mod cursor;
mod digits;
mod errors;
mod signed;
mod unsigned;

pub use digits::{digit_value, DIGIT_VALUE, NON_DIGIT};
pub use errors::{ScanError, ScanResult};
pub use signed::{scan_signed, ScanSigned};
pub use unsigned::{scan_unsigned, ScanUnsigned};

use cursor::Cursor;

pub(crate) mod private {
    /// Restricts the scanner traits to the fixed list of integer types.
    pub trait Sealed {}
}

// ============================================================================
// Scan Result
// ============================================================================

/// Outcome of a single scan pass.
///
/// A scan always produces all three fields: on success `value` is exact, on
/// overflow it is the saturated type bound, on a format error it is zero. The
/// `len` field is the count of consumed bytes, marking the first byte the
/// scanner did not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned<T> {
    /// The converted value, saturated to the type bound on overflow.
    pub value: T,
    /// Number of input bytes consumed.
    pub len: usize,
    /// Error classification, or `None` for an exact conversion.
    pub error: Option<ScanError>,
}

impl<T> Scanned<T> {
    /// Whether the conversion was exact.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, discarding the consumed length.
    ///
    /// For callers that treat a saturated or partial scan as a failure.
    #[inline]
    pub fn into_result(self) -> ScanResult<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }

    /// The unconsumed tail of `input`.
    ///
    /// `input` must be the slice this result was scanned from.
    ///
    /// # Panics
    /// Panics if `self.len` exceeds `input.len()`.
    #[inline]
    pub fn rest<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.len..]
    }
}

// ============================================================================
// Base Resolution
// ============================================================================

/// Whitespace skipped ahead of a numeric token: space and the 0x09-0x0D
/// control range. Locale settings never influence this set.
#[inline]
const fn is_scan_whitespace(byte: u8) -> bool {
    byte == b' ' || (byte >= 0x09 && byte <= 0x0d)
}

/// Outcome of the shared front half of a scan.
pub(crate) enum Prescan {
    /// Digits may follow; accumulate them in this base.
    Token { base: u8, negative: bool },
    /// A leading zero with no octal digit after it; the zero is the whole
    /// token and the cursor already stands one past it.
    Zero,
    /// The resolved base lies outside [2, 36].
    Unsupported,
}

/// Skip whitespace, take an optional sign, resolve the base and consume any
/// base prefix.
///
/// With base 0 the base is auto-detected: a nonzero decimal digit selects 10,
/// a leading `0` followed by `x`/`X` and a hex digit selects 16, `0` followed
/// by `b`/`B` and a binary digit selects 2, any other leading `0` selects 8.
/// With an explicit base 16 or 2 the matching prefix is consumed when a valid
/// digit follows it.
pub(crate) fn resolve(cur: &mut Cursor<'_>, base: u32) -> Prescan {
    while is_scan_whitespace(cur.byte()) {
        cur.bump();
    }

    let negative = match cur.byte() {
        b'+' => {
            cur.bump();
            false
        },
        b'-' => {
            cur.bump();
            true
        },
        _ => false,
    };

    let mut base = base;
    if base == 0 {
        match cur.byte() {
            b'1'..=b'9' => base = 10,
            b'0' => {
                cur.bump();
                if matches!(cur.byte(), b'x' | b'X') && digit_value(cur.byte_at(1)) < 16 {
                    base = 16;
                    cur.bump();
                } else if matches!(cur.byte(), b'b' | b'B') && digit_value(cur.byte_at(1)) < 2 {
                    base = 2;
                    cur.bump();
                } else {
                    base = 8;
                    if digit_value(cur.byte()) >= 8 {
                        return Prescan::Zero;
                    }
                }
            },
            // Leave base 0; rejected below.
            _ => {},
        }
    } else if base == 16
        && cur.byte() == b'0'
        && matches!(cur.byte_at(1), b'x' | b'X')
        && digit_value(cur.byte_at(2)) < 16
    {
        cur.bump();
        cur.bump();
    } else if base == 2
        && cur.byte() == b'0'
        && matches!(cur.byte_at(1), b'b' | b'B')
        && digit_value(cur.byte_at(2)) < 2
    {
        cur.bump();
        cur.bump();
    }

    if !(2..=36).contains(&base) {
        return Prescan::Unsupported;
    }

    Prescan::Token {
        base: base as u8,
        negative,
    }
}
