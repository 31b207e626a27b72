const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display
///
/// Picks the largest power-of-1024 unit that keeps the scaled value at
/// or above one, capped at gigabytes, and renders it with two decimal
/// places.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", scaled, UNITS[unit])
}
