//! Simple arithmetic helpers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn sub(a: i64, b: i64) -> i64 {
    a - b
}

pub fn mul(a: i64, b: i64) -> i64 {
    a * b
}

pub fn div(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        None
    } else {
        Some(a / b)
    }
}
pub fn clamp(value: i64, low: i64, high: i64) -> i64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}
pub fn label(value: i64) -> &'static str {
    match value {
        0 => "zero",
        v if v < 0 => "negative",
        _ => "positive",
    }
}
pub const ANSWER: i64 = 42;
