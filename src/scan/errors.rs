// ============================================================================
// Scan Errors
// Error taxonomy for numeric-text conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by the scanning functions.
///
/// The scanners never refuse to return a value: alongside either error the
/// caller still receives a value (zero, or the saturated bound) and a
/// consumed-length, and decides whether that is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanError {
    /// No valid digit for the resolved base, or a base outside {0} ∪ [2, 36].
    /// The consumed length is 0.
    InvalidArgument,
    /// The numeric token exceeds the range of the target type. The value is
    /// saturated to the type's minimum or maximum and the consumed length
    /// covers the full token.
    OutOfRange,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidArgument => {
                write!(f, "invalid argument: no valid digits or unsupported base")
            },
            ScanError::OutOfRange => {
                write!(f, "result out of range: value saturated to the type bound")
            },
        }
    }
}

impl std::error::Error for ScanError {}

/// Result type alias for callers that reject partial or saturated scans.
pub type ScanResult<T> = Result<T, ScanError>;
