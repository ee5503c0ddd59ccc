use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Consecutive-day run lengths over a set of calendar dates (UTC).
///
/// `current` is 0 unless the most recent date is `today` or yesterday;
/// the chain is otherwise considered broken, whether it ended two days
/// ago or never existed. `current <= longest` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Shared streak primitive: used identically for mood-logging and
/// meditation-practice streaks.
pub fn calculate(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    let Some(&most_recent) = dates.iter().next_back() else {
        return StreakSummary::default();
    };

    let mut current = 0u32;
    if most_recent == today || most_recent == today - Duration::days(1) {
        current = 1;
        let mut cursor = most_recent;
        for &date in dates.iter().rev().skip(1) {
            if date == cursor - Duration::days(1) {
                current += 1;
                cursor = date;
            } else {
                break;
            }
        }
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    let mut prev: Option<NaiveDate> = None;
    for &date in dates {
        if let Some(prev) = prev {
            if date == prev + Duration::days(1) {
                run += 1;
            } else {
                run = 1;
            }
        }
        longest = longest.max(run);
        prev = Some(date);
    }

    StreakSummary { current, longest }
}
