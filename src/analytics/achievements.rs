use serde::Serialize;

use crate::models::report::{AchievementReport, UsageStats};

/// Cumulative usage counters for one user. The evaluator is a pure
/// function of this struct, so it can be tested without a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageCounters {
    pub mood_logs: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub assistant_sessions: u64,
    pub communities_joined: u64,
    pub community_messages: u64,
    /// Logs between 05:00 and 08:59 UTC.
    pub early_morning_logs: u64,
    /// Logs at 22:00 or later, or before 05:00 UTC.
    pub late_night_logs: u64,
}

/// Which counter drives an achievement's progress. New achievements are
/// additions to the catalog table, not new code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MoodLogs,
    LongestStreak,
    AssistantSessions,
    CommunitiesJoined,
    CommunityMessages,
    EarlyMorningLogs,
    LateNightLogs,
    /// Count of major feature categories touched. Viewing the report
    /// always counts as using analytics, so the floor is 1.
    FeaturesUsed,
}

impl Metric {
    pub fn value(self, counters: &UsageCounters) -> u64 {
        match self {
            Metric::MoodLogs => counters.mood_logs,
            Metric::LongestStreak => counters.longest_streak as u64,
            Metric::AssistantSessions => counters.assistant_sessions,
            Metric::CommunitiesJoined => counters.communities_joined,
            Metric::CommunityMessages => counters.community_messages,
            Metric::EarlyMorningLogs => counters.early_morning_logs,
            Metric::LateNightLogs => counters.late_night_logs,
            Metric::FeaturesUsed => {
                let used = [
                    counters.mood_logs > 0,
                    counters.assistant_sessions > 0,
                    counters.communities_joined > 0,
                ];
                used.iter().filter(|&&u| u).count() as u64 + 1
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MoodLogging,
    Streaks,
    Assistant,
    Community,
    Special,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Static milestone definition. Read-only reference data, not user state.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub tier: Tier,
    pub target: u64,
    pub metric: Metric,
}

pub const CATALOG: &[AchievementDef] = &[
    // Mood logging milestones
    AchievementDef {
        id: "first_step",
        name: "First Step",
        description: "Log your first mood",
        icon: "🌱",
        category: Category::MoodLogging,
        tier: Tier::Bronze,
        target: 1,
        metric: Metric::MoodLogs,
    },
    AchievementDef {
        id: "getting_started",
        name: "Getting Started",
        description: "Log 5 moods",
        icon: "🌿",
        category: Category::MoodLogging,
        tier: Tier::Bronze,
        target: 5,
        metric: Metric::MoodLogs,
    },
    AchievementDef {
        id: "committed",
        name: "Committed",
        description: "Log 10 moods",
        icon: "🌳",
        category: Category::MoodLogging,
        tier: Tier::Silver,
        target: 10,
        metric: Metric::MoodLogs,
    },
    AchievementDef {
        id: "dedicated",
        name: "Dedicated",
        description: "Log 25 moods",
        icon: "🎋",
        category: Category::MoodLogging,
        tier: Tier::Silver,
        target: 25,
        metric: Metric::MoodLogs,
    },
    AchievementDef {
        id: "wellness_champion",
        name: "Wellness Champion",
        description: "Log 50 moods",
        icon: "🏆",
        category: Category::MoodLogging,
        tier: Tier::Gold,
        target: 50,
        metric: Metric::MoodLogs,
    },
    AchievementDef {
        id: "mindfulness_master",
        name: "Mindfulness Master",
        description: "Log 100 moods",
        icon: "👑",
        category: Category::MoodLogging,
        tier: Tier::Platinum,
        target: 100,
        metric: Metric::MoodLogs,
    },
    // Streak milestones
    AchievementDef {
        id: "streak_starter",
        name: "Streak Starter",
        description: "Maintain a 3-day streak",
        icon: "🔥",
        category: Category::Streaks,
        tier: Tier::Bronze,
        target: 3,
        metric: Metric::LongestStreak,
    },
    AchievementDef {
        id: "week_warrior",
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "⚡",
        category: Category::Streaks,
        tier: Tier::Silver,
        target: 7,
        metric: Metric::LongestStreak,
    },
    AchievementDef {
        id: "consistency_king",
        name: "Consistency King",
        description: "Maintain a 14-day streak",
        icon: "💪",
        category: Category::Streaks,
        tier: Tier::Gold,
        target: 14,
        metric: Metric::LongestStreak,
    },
    AchievementDef {
        id: "month_master",
        name: "Month Master",
        description: "Maintain a 30-day streak",
        icon: "🎯",
        category: Category::Streaks,
        tier: Tier::Platinum,
        target: 30,
        metric: Metric::LongestStreak,
    },
    // Assistant chat milestones
    AchievementDef {
        id: "seeking_help",
        name: "Seeking Help",
        description: "Start your first assistant session",
        icon: "🤝",
        category: Category::Assistant,
        tier: Tier::Bronze,
        target: 1,
        metric: Metric::AssistantSessions,
    },
    AchievementDef {
        id: "regular_visitor",
        name: "Regular Visitor",
        description: "Complete 5 assistant sessions",
        icon: "💬",
        category: Category::Assistant,
        tier: Tier::Silver,
        target: 5,
        metric: Metric::AssistantSessions,
    },
    AchievementDef {
        id: "therapy_advocate",
        name: "Therapy Advocate",
        description: "Complete 10 assistant sessions",
        icon: "💙",
        category: Category::Assistant,
        tier: Tier::Gold,
        target: 10,
        metric: Metric::AssistantSessions,
    },
    // Community milestones
    AchievementDef {
        id: "community_member",
        name: "Community Member",
        description: "Join your first community",
        icon: "👥",
        category: Category::Community,
        tier: Tier::Bronze,
        target: 1,
        metric: Metric::CommunitiesJoined,
    },
    AchievementDef {
        id: "social_butterfly",
        name: "Social Butterfly",
        description: "Send 10 community messages",
        icon: "🦋",
        category: Category::Community,
        tier: Tier::Silver,
        target: 10,
        metric: Metric::CommunityMessages,
    },
    AchievementDef {
        id: "support_giver",
        name: "Support Giver",
        description: "Send 50 community messages",
        icon: "❤️",
        category: Category::Community,
        tier: Tier::Gold,
        target: 50,
        metric: Metric::CommunityMessages,
    },
    // Time-of-day and compound milestones
    AchievementDef {
        id: "early_bird",
        name: "Early Bird",
        description: "Log 10 moods in the morning (5-9 AM)",
        icon: "🌅",
        category: Category::Special,
        tier: Tier::Silver,
        target: 10,
        metric: Metric::EarlyMorningLogs,
    },
    AchievementDef {
        id: "night_owl",
        name: "Night Owl",
        description: "Log 10 moods at night (10 PM - 5 AM)",
        icon: "🦉",
        category: Category::Special,
        tier: Tier::Silver,
        target: 10,
        metric: Metric::LateNightLogs,
    },
    AchievementDef {
        id: "explorer",
        name: "Explorer",
        description: "Use all 4 main features (Mood Log, Analytics, Assistant, Communities)",
        icon: "🧭",
        category: Category::Special,
        tier: Tier::Gold,
        target: 4,
        metric: Metric::FeaturesUsed,
    },
];

/// One catalog entry evaluated against a user's counters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AchievementStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub tier: Tier,
    pub progress: u64,
    pub target: u64,
    pub earned: bool,
}

/// Evaluates the full catalog: `progress = min(counter, target)`,
/// `earned = counter >= target`, completion percentage floored.
pub fn evaluate(counters: &UsageCounters) -> AchievementReport {
    let mut earned = Vec::new();
    let mut locked = Vec::new();

    for def in CATALOG {
        let value = def.metric.value(counters);
        let status = AchievementStatus {
            id: def.id,
            name: def.name,
            description: def.description,
            icon: def.icon,
            category: def.category,
            tier: def.tier,
            progress: value.min(def.target),
            target: def.target,
            earned: value >= def.target,
        };
        if status.earned {
            earned.push(status);
        } else {
            locked.push(status);
        }
    }

    let total_achievements = CATALOG.len();
    let earned_count = earned.len();
    let completion_percentage = if total_achievements > 0 {
        (earned_count * 100 / total_achievements) as u32
    } else {
        0
    };

    AchievementReport {
        earned,
        locked,
        total_achievements,
        earned_count,
        completion_percentage,
        stats: UsageStats::from(counters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status<'a>(report: &'a AchievementReport, id: &str) -> &'a AchievementStatus {
        report
            .earned
            .iter()
            .chain(report.locked.iter())
            .find(|a| a.id == id)
            .unwrap_or_else(|| panic!("achievement {} missing", id))
    }

    #[test]
    fn test_catalog_has_eighteen_entries_with_unique_ids() {
        assert_eq!(CATALOG.len(), 18);
        let mut ids: Vec<&str> = CATALOG.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn test_zero_counters_earn_nothing() {
        let report = evaluate(&UsageCounters::default());
        assert!(report.earned.is_empty());
        assert_eq!(report.locked.len(), 18);
        assert_eq!(report.completion_percentage, 0);
    }

    // Scenario D: 50 mood logs.
    #[test]
    fn test_fifty_logs_earn_champion_not_master() {
        let counters = UsageCounters { mood_logs: 50, ..Default::default() };
        let report = evaluate(&counters);

        let champion = status(&report, "wellness_champion");
        assert!(champion.earned);
        assert_eq!(champion.progress, 50);

        let master = status(&report, "mindfulness_master");
        assert!(!master.earned);
        assert_eq!(master.progress, 50);
        assert_eq!(master.target, 100);
    }

    #[test]
    fn test_progress_clamped_to_target() {
        let counters = UsageCounters { mood_logs: 500, ..Default::default() };
        let report = evaluate(&counters);
        assert_eq!(status(&report, "first_step").progress, 1);
        assert_eq!(status(&report, "mindfulness_master").progress, 100);
    }

    #[test]
    fn test_streak_milestones_use_longest_streak() {
        let counters = UsageCounters {
            mood_logs: 3,
            current_streak: 0,
            longest_streak: 7,
            ..Default::default()
        };
        let report = evaluate(&counters);
        assert!(status(&report, "streak_starter").earned);
        assert!(status(&report, "week_warrior").earned);
        assert!(!status(&report, "consistency_king").earned);
        assert_eq!(status(&report, "consistency_king").progress, 7);
    }

    #[test]
    fn test_explorer_counts_analytics_as_used() {
        // No activity at all still shows one feature used.
        let report = evaluate(&UsageCounters::default());
        let explorer = status(&report, "explorer");
        assert!(!explorer.earned);
        assert_eq!(explorer.progress, 1);
    }

    #[test]
    fn test_explorer_earned_with_all_feature_categories() {
        let counters = UsageCounters {
            mood_logs: 1,
            assistant_sessions: 1,
            communities_joined: 1,
            ..Default::default()
        };
        let explorer_only = evaluate(&counters);
        let explorer = status(&explorer_only, "explorer");
        assert!(explorer.earned);
        assert_eq!(explorer.progress, 4);
    }

    #[test]
    fn test_completion_percentage_floors() {
        // first_step + seeking_help + community_member + streak_starter = 4/18 = 22.2%.
        let counters = UsageCounters {
            mood_logs: 1,
            longest_streak: 3,
            assistant_sessions: 1,
            communities_joined: 1,
            ..Default::default()
        };
        let report = evaluate(&counters);
        assert_eq!(report.completion_percentage, report.earned_count as u32 * 100 / 18);
        assert_eq!(report.earned_count, 5); // explorer unlocks too
        assert_eq!(report.completion_percentage, 27);
    }

    #[test]
    fn test_stats_mirror_counters() {
        let counters = UsageCounters {
            mood_logs: 12,
            current_streak: 2,
            longest_streak: 4,
            assistant_sessions: 3,
            communities_joined: 1,
            community_messages: 9,
            early_morning_logs: 5,
            late_night_logs: 2,
        };
        let report = evaluate(&counters);
        assert_eq!(report.stats.total_mood_logs, 12);
        assert_eq!(report.stats.total_assistant_sessions, 3);
        assert_eq!(report.stats.total_communities_joined, 1);
        assert_eq!(report.stats.total_community_messages, 9);
        assert_eq!(report.stats.current_streak, 2);
        assert_eq!(report.stats.longest_streak, 4);
    }

    #[test]
    fn test_earned_and_locked_partition_catalog() {
        let counters = UsageCounters { mood_logs: 25, longest_streak: 3, ..Default::default() };
        let report = evaluate(&counters);
        assert_eq!(report.earned.len() + report.locked.len(), CATALOG.len());
        assert!(report.earned.iter().all(|a| a.earned));
        assert!(report.locked.iter().all(|a| !a.earned));
    }
}
