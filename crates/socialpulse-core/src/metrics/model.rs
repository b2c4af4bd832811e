//! Metrics data models.

use serde::Serialize;

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// Metric improved or grew.
    Up,
    /// Metric declined.
    Down,
}

/// A headline metric card in the performance overview row.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    /// Metric name, e.g. "Total Followers".
    pub label: &'static str,
    /// Pre-formatted display value, e.g. "12.5K".
    pub value: &'static str,
    /// Pre-formatted change, e.g. "8.2% from last month".
    pub delta: &'static str,
    /// Direction of the change.
    pub trend: Trend,
}

/// One month in the follower growth series.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowerPoint {
    /// Month abbreviation.
    pub month: &'static str,
    /// Actual follower count.
    pub followers: u32,
    /// Target follower count for the month.
    pub target: u32,
}

/// One platform's slice of the engagement breakdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformShare {
    /// Platform name.
    pub platform: &'static str,
    /// Share of total engagement, in percent.
    pub engagement_pct: u8,
    /// Brand color as a hex string, for the chart legend.
    pub color: &'static str,
}

/// Qualitative engagement level of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngagementLevel {
    /// Strong engagement.
    High,
    /// Moderate engagement.
    Medium,
    /// Weak engagement.
    Low,
}

impl EngagementLevel {
    /// Get display name for the level.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// A row in the recent-activity table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivityEntry {
    /// Relative time of the event, e.g. "2 min ago".
    pub time: &'static str,
    /// Platform the event came from.
    pub platform: &'static str,
    /// Human-readable event description.
    pub activity: &'static str,
    /// Engagement level of the event.
    pub engagement: EngagementLevel,
}
