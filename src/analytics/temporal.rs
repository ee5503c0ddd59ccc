use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::models::report::TrendPoint;

/// Buckets timestamps by UTC calendar day. Boundaries are midnight UTC;
/// no smoothing, no timezone conversion.
pub fn daily_buckets(timestamps: &[DateTime<Utc>]) -> BTreeMap<NaiveDate, u64> {
    let mut buckets = BTreeMap::new();
    for ts in timestamps {
        *buckets.entry(ts.date_naive()).or_insert(0) += 1;
    }
    buckets
}

/// Buckets timestamps by hour of day (0-23). Hours with no activity are
/// absent from the map.
pub fn hourly_buckets(timestamps: &[DateTime<Utc>]) -> BTreeMap<u32, u64> {
    let mut buckets = BTreeMap::new();
    for ts in timestamps {
        *buckets.entry(ts.hour()).or_insert(0) += 1;
    }
    buckets
}

/// The most recent `limit` daily buckets, ascending by date.
pub fn trend(daily: &BTreeMap<NaiveDate, u64>, limit: usize) -> Vec<TrendPoint> {
    let points: Vec<TrendPoint> = daily
        .iter()
        .map(|(&date, &count)| TrendPoint { date, count })
        .collect();
    let skip = points.len().saturating_sub(limit);
    points.into_iter().skip(skip).collect()
}

/// The hour with the highest count; the lowest hour wins a tie.
pub fn peak_hour(hourly: &BTreeMap<u32, u64>) -> Option<(u32, u64)> {
    let mut peak: Option<(u32, u64)> = None;
    for (&hour, &count) in hourly {
        match peak {
            Some((_, best)) if count <= best => {}
            _ => peak = Some((hour, count)),
        }
    }
    peak
}
