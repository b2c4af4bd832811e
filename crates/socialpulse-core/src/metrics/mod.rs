//! Dashboard metrics module.
//!
//! Typed sample datasets behind the dashboard's cards, charts, and
//! activity table. The data is static; rendering belongs to the UI layer.

mod model;
mod sample;

pub use model::{ActivityEntry, EngagementLevel, FollowerPoint, MetricCard, PlatformShare, Trend};
pub use sample::{follower_growth, overview_cards, platform_engagement, recent_activity};
