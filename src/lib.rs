// ============================================================================
// intscan Library
// Allocation-free string to integer conversion with saturating overflow
// ============================================================================

//! # intscan
//!
//! A safety-hardened, allocation-free replacement for the classic "string to
//! long" conversion family.
//!
//! ## Features
//!
//! - **Base auto-detection** (`0x` hex, `0b` binary, leading `0` octal) plus
//!   explicit bases 2 through 36
//! - **Saturating overflow** to the exact type minimum or maximum, never a
//!   wrapped value
//! - **Precise scan boundary** reporting: the consumed length always covers
//!   the full numeric token
//! - **One generic core** instantiated for every width from 8 to 128 bits
//!   plus the pointer-sized pair
//! - **Reentrant by construction**: errors travel in the result; a
//!   thread-local classic-form adapter is available in [`compat`]
//!
//! ## Example
//!
//! ```rust
//! use intscan::prelude::*;
//!
//! let scanned = scan_i64(b"  -42  ", 0);
//! assert_eq!(scanned.value, -42);
//! assert_eq!(scanned.len, 5);
//! assert!(scanned.error.is_none());
//!
//! let detected = scan_u32(b"0x1A", 0);
//! assert_eq!(detected.value, 26);
//!
//! let saturated = scan_u8(b"300", 10);
//! assert_eq!(saturated.value, u8::MAX);
//! assert_eq!(saturated.error, Some(ScanError::OutOfRange));
//! ```

pub mod compat;
pub mod convert;
pub mod scan;

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert::{
        scan, scan_i128, scan_i16, scan_i32, scan_i64, scan_i8, scan_isize, scan_u128, scan_u16,
        scan_u32, scan_u64, scan_u8, scan_usize, Scan,
    };
    pub use crate::scan::{
        scan_signed, scan_unsigned, ScanError, ScanResult, ScanSigned, ScanUnsigned, Scanned,
    };
}
