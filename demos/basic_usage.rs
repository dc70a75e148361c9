// ============================================================================
// Basic Usage Example
// ============================================================================

use intscan::compat;
use intscan::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== intscan Example ===\n");

    // Base auto-detection across the supported prefixes
    println!("Auto-detected bases:");
    for input in ["0x1A", "0b101", "017", "19", "0"] {
        let scanned = scan_i64(input.as_bytes(), 0);
        println!("  {:>8} -> {}", input, scanned.value);
    }

    // Scan boundary reporting
    println!("\nScan boundaries:");
    let input = b"  -42 apples";
    let scanned = scan_i32(input, 0);
    println!(
        "  {:?} -> value {}, consumed {} bytes, rest {:?}",
        String::from_utf8_lossy(input),
        scanned.value,
        scanned.len,
        String::from_utf8_lossy(scanned.rest(input)),
    );

    // Saturation instead of wrapping
    println!("\nSaturating overflow:");
    for input in ["300", "-300"] {
        let scanned = scan_i8(input.as_bytes(), 10);
        println!(
            "  {:>4} as i8 -> {} ({})",
            input,
            scanned.value,
            match scanned.error {
                Some(error) => error.to_string(),
                None => "exact".to_string(),
            },
        );
    }

    // Classic form: errors land in the thread-local slot
    println!("\nClassic form:");
    compat::clear_last_error();
    let (value, len) = compat::to_u8(b"999", 10);
    println!(
        "  999 as u8 -> {} (consumed {}, last error: {:?})",
        value,
        len,
        compat::last_error(),
    );
}
