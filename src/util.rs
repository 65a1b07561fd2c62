//! Small formatting helpers used in log output

/// Format a byte count with binary prefixes, e.g. `1.5 KiB`
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

    let mut num = bytes as f64;
    for unit in UNITS {
        if num < 1024.0 {
            return format!("{num:3.1} {unit}B");
        }
        num /= 1024.0;
    }
    format!("{num:.1} ZiB")
}
