use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::analytics::streaks::StreakSummary;
use crate::analytics::temporal;
use crate::models::report::KeywordCount;

/// Aggregates feeding the insight rules. `now` is injected so the rule
/// engine stays deterministic: same inputs, same sentences, same order.
#[derive(Debug)]
pub struct InsightInputs<'a> {
    pub hourly: &'a BTreeMap<u32, u64>,
    pub daily: &'a BTreeMap<NaiveDate, u64>,
    pub keywords: &'a [KeywordCount],
    pub timestamps: &'a [DateTime<Utc>],
    pub streaks: StreakSummary,
    pub now: DateTime<Utc>,
}

/// Fixed-priority rule engine; each sentence is emitted only when its
/// precondition holds.
pub fn generate(inputs: &InsightInputs) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some((hour, _)) = temporal::peak_hour(inputs.hourly) {
        insights.push(format!(
            "You're most likely to log your mood around {}",
            format_civil_hour(hour)
        ));
    }

    let week_ago = inputs.now - Duration::days(7);
    let recent = inputs
        .timestamps
        .iter()
        .filter(|&&ts| ts >= week_ago)
        .count();
    if recent > 0 {
        insights.push(format!(
            "You've logged {} moods in the past week. Great consistency!",
            recent
        ));
    }

    if let Some(top) = inputs.keywords.first() {
        insights.push(format!(
            "'{}' appears frequently in your mood logs. This might be a key theme to explore.",
            top.word
        ));
    }

    if inputs.streaks.current >= 3 {
        insights.push(format!(
            "You're on a {}-day logging streak! Keep it up!",
            inputs.streaks.current
        ));
    } else if inputs.streaks.current == 0 && inputs.streaks.longest > 0 {
        insights.push(format!(
            "Your longest streak was {} days. You can beat that!",
            inputs.streaks.longest
        ));
    }

    if inputs.daily.len() >= 7 {
        let recent_counts: Vec<u64> = inputs.daily.values().rev().take(7).copied().collect();
        let avg = recent_counts.iter().sum::<u64>() as f64 / 7.0;
        if avg > 1.0 {
            insights.push(format!(
                "You're averaging {:.1} mood logs per day. Self-reflection is powerful!",
                avg
            ));
        }
    }

    insights
}

/// 12-hour civil time: 13 becomes "1:00 PM". Hour 12 renders as
/// "12:00 PM" and hour 0 as "0:00 AM".
fn format_civil_hour(hour: u32) -> String {
    let h12 = if hour <= 12 { hour } else { hour - 12 };
    let am_pm = if hour < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", h12, am_pm)
}
