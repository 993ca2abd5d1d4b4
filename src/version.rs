//! Dotted-numeric version comparison.
//! Segments are compared left to right as integers; missing segments are
//! treated as zero, so `3.10` and `3.10.0` are equal.

use std::cmp::Ordering;

fn segments(version: &str) -> Vec<u64> {
    version.split('.').map(|s| s.trim().parse::<u64>().unwrap_or(0)).collect()
}

/// Compares two dotted version strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = segments(a);
    let b = segments(b);
    let len = a.len().max(b.len());

    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Returns the greater of the default and an optionally supplied version.
/// The result never compares below `default`.
pub fn bump<'a>(default: &'a str, supplied: Option<&'a str>) -> &'a str {
    match supplied {
        Some(supplied) if compare(supplied, default) == Ordering::Greater => supplied,
        _ => default,
    }
}
