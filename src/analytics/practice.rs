use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::analytics::streaks;
use crate::models::practice::{PracticeReport, PracticeSession, SessionType};

/// Summarizes completed breathing/meditation sessions. Practice streaks
/// use the same primitive as mood-logging streaks.
pub fn progress(sessions: &[PracticeSession], today: NaiveDate) -> PracticeReport {
    if sessions.is_empty() {
        return PracticeReport::default();
    }

    let breathing_sessions = sessions
        .iter()
        .filter(|s| s.session_type == SessionType::Breathing)
        .count() as u64;
    let meditation_sessions = sessions.len() as u64 - breathing_sessions;
    let total_secs: i64 = sessions.iter().map(|s| s.duration_secs.max(0)).sum();

    let dates: BTreeSet<NaiveDate> = sessions.iter().map(|s| s.timestamp.date_naive()).collect();
    let streaks = streaks::calculate(&dates, today);

    PracticeReport {
        total_sessions: sessions.len() as u64,
        total_minutes: (total_secs / 60) as u64,
        breathing_sessions,
        meditation_sessions,
        favorite_category: favorite_category(sessions),
        current_streak: streaks.current,
    }
}

/// Most common category among meditation sessions; ties resolve to the
/// category encountered first.
fn favorite_category(sessions: &[PracticeSession]) -> Option<String> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for session in sessions {
        if session.session_type != SessionType::Meditation {
            continue;
        }
        let Some(category) = session.category.as_deref() else {
            continue;
        };
        match counts.entry(category) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
                first_seen.push(category);
            }
        }
    }

    let mut best: Option<(&str, u64)> = None;
    for category in first_seen {
        let count = counts.get(category).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((category, count)),
        }
    }
    best.map(|(category, _)| category.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn session(
        session_type: SessionType,
        category: Option<&str>,
        duration_secs: i64,
        timestamp: DateTime<Utc>,
    ) -> PracticeSession {
        PracticeSession {
            id: Uuid::new_v4(),
            user_id: "user-1".into(),
            session_type,
            category: category.map(str::to_string),
            duration_secs,
            timestamp,
        }
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_sessions_default_report() {
        assert_eq!(progress(&[], date(2024, 6, 3)), PracticeReport::default());
    }

    #[test]
    fn test_totals_and_minutes() {
        let sessions = vec![
            session(SessionType::Breathing, None, 240, ts(2024, 6, 1, 8)),
            session(SessionType::Meditation, Some("sleep"), 600, ts(2024, 6, 2, 22)),
            session(SessionType::Meditation, Some("sleep"), 90, ts(2024, 6, 3, 7)),
        ];
        let report = progress(&sessions, date(2024, 6, 3));
        assert_eq!(report.total_sessions, 3);
        assert_eq!(report.breathing_sessions, 1);
        assert_eq!(report.meditation_sessions, 2);
        assert_eq!(report.total_minutes, 15); // 930 secs floor-divided
        assert_eq!(report.favorite_category.as_deref(), Some("sleep"));
    }

    #[test]
    fn test_favorite_category_ignores_breathing() {
        let sessions = vec![
            session(SessionType::Breathing, Some("box"), 120, ts(2024, 6, 1, 8)),
            session(SessionType::Meditation, Some("anxiety"), 300, ts(2024, 6, 1, 9)),
        ];
        let report = progress(&sessions, date(2024, 6, 1));
        assert_eq!(report.favorite_category.as_deref(), Some("anxiety"));
    }

    #[test]
    fn test_favorite_category_tie_keeps_first_encountered() {
        let sessions = vec![
            session(SessionType::Meditation, Some("focus"), 300, ts(2024, 6, 1, 9)),
            session(SessionType::Meditation, Some("sleep"), 300, ts(2024, 6, 2, 9)),
        ];
        let report = progress(&sessions, date(2024, 6, 2));
        assert_eq!(report.favorite_category.as_deref(), Some("focus"));
    }

    #[test]
    fn test_practice_streak_matches_streak_primitive() {
        let sessions = vec![
            session(SessionType::Meditation, Some("sleep"), 300, ts(2024, 6, 1, 9)),
            session(SessionType::Breathing, None, 120, ts(2024, 6, 2, 9)),
            session(SessionType::Meditation, Some("sleep"), 300, ts(2024, 6, 3, 9)),
        ];
        let today = date(2024, 6, 3);
        let report = progress(&sessions, today);

        let dates: BTreeSet<NaiveDate> =
            sessions.iter().map(|s| s.timestamp.date_naive()).collect();
        assert_eq!(report.current_streak, streaks::calculate(&dates, today).current);
        assert_eq!(report.current_streak, 3);
    }

    #[test]
    fn test_stale_practice_has_no_current_streak() {
        let sessions = vec![
            session(SessionType::Meditation, Some("sleep"), 300, ts(2024, 5, 20, 9)),
        ];
        let report = progress(&sessions, date(2024, 6, 3));
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.total_sessions, 1);
    }
}
