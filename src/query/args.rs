//! Argument validation at the query boundary.
//!
//! Each accessor returns `None` when the argument does not have the expected shape; callers
//! turn that into their neutral result.

use chrono::NaiveDateTime;

use crate::dates::parse_bound;
use crate::types::Value;

/// A string argument. Only [`Value::Utf8`] qualifies.
pub(crate) fn as_text(value: &Value) -> Option<&str> {
    match value {
        Value::Utf8(s) => Some(s.as_str()),
        _ => None,
    }
}

/// An integer argument. Only [`Value::Int64`] qualifies; floats (even whole ones), booleans and
/// numeric strings do not.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int64(v) => Some(*v),
        _ => None,
    }
}

/// A year argument: an integer that fits a calendar year.
pub(crate) fn as_year(value: &Value) -> Option<i32> {
    as_integer(value).and_then(|v| i32::try_from(v).ok())
}

/// A date bound: a string in one of the accepted date shapes, or a bare `YYYY-MM` / `YYYY`.
pub(crate) fn as_date_bound(value: &Value) -> Option<NaiveDateTime> {
    as_text(value).and_then(parse_bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_only_strings() {
        assert_eq!(as_text(&Value::from("NASA")), Some("NASA"));
        assert_eq!(as_text(&Value::from("")), Some(""));
        assert_eq!(as_text(&Value::Int64(123)), None);
        assert_eq!(as_text(&Value::Null), None);
    }

    #[test]
    fn integer_rejects_floats_bools_and_strings() {
        assert_eq!(as_integer(&Value::Int64(3)), Some(3));
        assert_eq!(as_integer(&Value::Float64(3.0)), None);
        assert_eq!(as_integer(&Value::Float64(3.5)), None);
        assert_eq!(as_integer(&Value::Bool(true)), None);
        assert_eq!(as_integer(&Value::from("3")), None);
        assert_eq!(as_integer(&Value::Null), None);
    }

    #[test]
    fn year_rejects_out_of_range_integers() {
        assert_eq!(as_year(&Value::Int64(1957)), Some(1957));
        assert_eq!(as_year(&Value::Int64(i64::MAX)), None);
    }

    #[test]
    fn date_bound_requires_parseable_string() {
        assert!(as_date_bound(&Value::from("1957-10-01")).is_some());
        assert!(as_date_bound(&Value::from("1957-10")).is_some());
        assert!(as_date_bound(&Value::from("abc")).is_none());
        assert!(as_date_bound(&Value::Int64(123)).is_none());
        assert!(as_date_bound(&Value::Null).is_none());
    }
}
