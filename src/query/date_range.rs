//! Date-range filter normalization.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Normalizes a raw two-element range into inclusive day boundaries.
///
/// Accepted element shapes: millisecond epoch timestamps (JSON numbers or
/// numeric strings) and `YYYY-MM-DD` date strings. Each bound is widened to
/// the full calendar day it falls on in the given fixed-offset zone
/// (00:00:00.000 through 23:59:59.999) and converted back to naive UTC for
/// comparison against stored timestamps.
///
/// Anything else, including a missing bound, disables the range filter by
/// returning `None`; a malformed filter must never fail the list request.
/// A start after the end is returned as-is and simply matches nothing.
pub fn normalize_date_range(
    value: &Value,
    tz: FixedOffset,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let bounds = value.as_array()?;
    if bounds.len() != 2 {
        return None;
    }

    let start_day = local_day(&bounds[0], tz)?;
    let end_day = local_day(&bounds[1], tz)?;

    let start = tz
        .from_local_datetime(&start_day.and_hms_opt(0, 0, 0)?)
        .single()?
        .naive_utc();
    let end = tz
        .from_local_datetime(&end_day.and_hms_milli_opt(23, 59, 59, 999)?)
        .single()?
        .naive_utc();

    Some((start, end))
}

/// Resolves one raw bound to the calendar day it denotes in `tz`.
fn local_day(bound: &Value, tz: FixedOffset) -> Option<NaiveDate> {
    match bound {
        Value::Number(n) => millis_to_local_day(n.as_i64()?, tz),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(millis) = s.parse::<i64>() {
                millis_to_local_day(millis, tz)
            } else {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
            }
        }
        _ => None,
    }
}

fn millis_to_local_day(millis: i64, tz: FixedOffset) -> Option<NaiveDate> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn epoch_zero_maps_to_first_day_bounds() {
        let (start, end) = normalize_date_range(&json!([0, 0]), utc()).unwrap();
        assert_eq!(start.to_string(), "1970-01-01 00:00:00");
        assert_eq!(end.to_string(), "1970-01-01 23:59:59.999");
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let (start, end) =
            normalize_date_range(&json!(["86400000", "172800000"]), utc()).unwrap();
        assert_eq!(start.to_string(), "1970-01-02 00:00:00");
        assert_eq!(end.to_string(), "1970-01-03 23:59:59.999");
    }

    #[test]
    fn date_strings_are_accepted() {
        let (start, end) =
            normalize_date_range(&json!(["2026-03-01", "2026-03-02"]), utc()).unwrap();
        assert_eq!(start.to_string(), "2026-03-01 00:00:00");
        assert_eq!(end.to_string(), "2026-03-02 23:59:59.999");
    }

    #[test]
    fn offset_shifts_day_boundaries_back_to_utc() {
        // UTC+02:00: local midnight is 22:00 UTC of the previous day.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let (start, end) = normalize_date_range(&json!([0, 0]), tz).unwrap();
        assert_eq!(start.to_string(), "1969-12-31 22:00:00");
        assert_eq!(end.to_string(), "1970-01-01 21:59:59.999");
    }

    #[test]
    fn inverted_range_is_not_reordered() {
        let day = 86_400_000i64;
        let (start, end) = normalize_date_range(&json!([3 * day, day]), utc()).unwrap();
        assert!(start > end);
    }

    #[test]
    fn malformed_shapes_disable_the_filter() {
        let tz = utc();
        assert!(normalize_date_range(&json!("not-a-range"), tz).is_none());
        assert!(normalize_date_range(&json!([0]), tz).is_none());
        assert!(normalize_date_range(&json!([0, 1, 2]), tz).is_none());
        assert!(normalize_date_range(&json!([null, 0]), tz).is_none());
        assert!(normalize_date_range(&json!([0, null]), tz).is_none());
        assert!(normalize_date_range(&json!(["not", "millis"]), tz).is_none());
        assert!(normalize_date_range(&json!({}), tz).is_none());
    }
}
