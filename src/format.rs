//! Human-readable metric formatting.

const SUFFIXES: [&str; 2] = ["", "mil"];
const MILLIONS: &str = "milhões";

/// Format a magnitude with two decimals and a thousand/million suffix.
///
/// Values below 1000 keep no suffix, values below one million are divided by
/// 1000 and tagged `mil`, anything larger is divided by one million and
/// tagged `milhões`. The prefix (e.g. `"R$"`) is placed before the number,
/// separated by a space even when empty:
///
/// ```
/// use sales_dashboard::format::format_magnitude;
///
/// assert_eq!(format_magnitude(500.0, ""), " 500.00 ");
/// assert_eq!(format_magnitude(1500.0, ""), " 1.50 mil");
/// assert_eq!(format_magnitude(2_500_000.0, "R$"), "R$ 2.50 milhões");
/// ```
pub fn format_magnitude(value: f64, prefix: &str) -> String {
    let mut scaled = value;
    for suffix in SUFFIXES {
        if scaled < 1000.0 {
            return format!("{} {:.2} {}", prefix, scaled, suffix);
        }
        scaled /= 1000.0;
    }
    format!("{} {:.2} {}", prefix, scaled, MILLIONS)
}

/// [`format_magnitude`] for a count, with no prefix.
pub fn format_count(count: usize) -> String {
    format_magnitude(count as f64, "")
}
