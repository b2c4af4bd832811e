//! Static sample datasets.
//!
//! Placeholder figures shown until real ingestion exists. The UI renders
//! these as-is.

use super::model::{ActivityEntry, EngagementLevel, FollowerPoint, MetricCard, PlatformShare, Trend};

/// The four headline cards in the performance overview row.
#[must_use]
pub const fn overview_cards() -> [MetricCard; 4] {
    [
        MetricCard {
            label: "Total Followers",
            value: "12.5K",
            delta: "8.2% from last month",
            trend: Trend::Up,
        },
        MetricCard {
            label: "Engaged Users",
            value: "1,245",
            delta: "12.5% from last week",
            trend: Trend::Up,
        },
        MetricCard {
            label: "Engagement Rate",
            value: "4.8%",
            delta: "0.8% from yesterday",
            trend: Trend::Up,
        },
        MetricCard {
            label: "Avg. Response Time",
            value: "28m",
            delta: "12% faster",
            trend: Trend::Down,
        },
    ]
}

/// Twelve months of follower counts with targets.
#[must_use]
pub const fn follower_growth() -> [FollowerPoint; 12] {
    [
        FollowerPoint { month: "Jan", followers: 8_500, target: 9_000 },
        FollowerPoint { month: "Feb", followers: 8_900, target: 9_200 },
        FollowerPoint { month: "Mar", followers: 9_200, target: 9_400 },
        FollowerPoint { month: "Apr", followers: 9_500, target: 9_700 },
        FollowerPoint { month: "May", followers: 9_800, target: 10_000 },
        FollowerPoint { month: "Jun", followers: 10_100, target: 10_300 },
        FollowerPoint { month: "Jul", followers: 10_500, target: 10_600 },
        FollowerPoint { month: "Aug", followers: 10_900, target: 11_000 },
        FollowerPoint { month: "Sep", followers: 11_200, target: 11_300 },
        FollowerPoint { month: "Oct", followers: 11_500, target: 11_700 },
        FollowerPoint { month: "Nov", followers: 11_800, target: 12_000 },
        FollowerPoint { month: "Dec", followers: 12_500, target: 12_500 },
    ]
}

/// Engagement share per platform; percentages sum to 100.
#[must_use]
pub const fn platform_engagement() -> [PlatformShare; 5] {
    [
        PlatformShare { platform: "Instagram", engagement_pct: 38, color: "#E1306C" },
        PlatformShare { platform: "Twitter", engagement_pct: 22, color: "#1DA1F2" },
        PlatformShare { platform: "Facebook", engagement_pct: 18, color: "#1877F2" },
        PlatformShare { platform: "LinkedIn", engagement_pct: 12, color: "#0077B5" },
        PlatformShare { platform: "TikTok", engagement_pct: 10, color: "#000000" },
    ]
}

/// The recent-activity table rows.
#[must_use]
pub const fn recent_activity() -> [ActivityEntry; 5] {
    [
        ActivityEntry {
            time: "2 min ago",
            platform: "Twitter",
            activity: "New mention from @TechReview",
            engagement: EngagementLevel::High,
        },
        ActivityEntry {
            time: "15 min ago",
            platform: "Instagram",
            activity: "Photo received 245 likes",
            engagement: EngagementLevel::High,
        },
        ActivityEntry {
            time: "1 hour ago",
            platform: "Facebook",
            activity: "Page liked by 12 new users",
            engagement: EngagementLevel::Medium,
        },
        ActivityEntry {
            time: "3 hours ago",
            platform: "LinkedIn",
            activity: "Connection request accepted",
            engagement: EngagementLevel::Low,
        },
        ActivityEntry {
            time: "5 hours ago",
            platform: "Twitter",
            activity: "Tweet reached 1.2K impressions",
            engagement: EngagementLevel::High,
        },
    ]
}
