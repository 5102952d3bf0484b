use crate::models::RecordValue;

/// Pack a record value as `c=<int> d=<float> t=<int>`.
pub fn pack_value(value: &RecordValue) -> String {
    format!("c={} d={} t={}", value.commits, value.weight, value.tick)
}

/// Parse a packed record value.
///
/// Never fails: each missing or malformed field keeps its zero default,
/// and unknown fields are ignored.
pub fn unpack_value(packed: &str) -> RecordValue {
    let mut value = RecordValue::default();
    for field in packed.split_whitespace() {
        let Some((name, raw)) = field.split_once('=') else {
            continue;
        };
        match name {
            "c" => value.commits = raw.parse().unwrap_or(0),
            "d" => value.weight = raw.parse::<f64>().ok().filter(|d| d.is_finite()).unwrap_or(0.0),
            "t" => value.tick = raw.parse().unwrap_or(0),
            _ => {}
        }
    }
    value
}
