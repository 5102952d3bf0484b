//! Dotted version string comparison.

use std::cmp::Ordering;

/// Compare two dotted version strings component by component, numerically.
///
/// Missing components count as `0`, so `"1.0"` equals `"1.0.0"` and the empty
/// string sorts below any non-zero version. Only the leading digits of each
/// component are significant (`"7-beta"` reads as `7`).
pub fn compare_version_strings(x: &str, y: &str) -> Ordering {
    let mut left = x.split('.').map(component_value);
    let mut right = y.split('.').map(component_value);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ordering = l.unwrap_or(0).cmp(&r.unwrap_or(0));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// True if `version` is strictly older than `threshold`.
pub fn is_older_than(version: &str, threshold: &str) -> bool {
    compare_version_strings(version, threshold) == Ordering::Less
}

fn component_value(component: &str) -> u64 {
    let digits: String = component
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
