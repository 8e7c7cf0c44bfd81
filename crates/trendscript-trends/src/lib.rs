//! Synthetic trending-topic feed.
//!
//! Trends are built from a fixed set of seed topics with randomized
//! engagement figures. Ids are derived from the topic text, so a trend id
//! resolves to the same topic across calls even though the metrics vary.

pub mod engagement;
pub mod hashtags;
pub mod service;
pub mod topics;

pub use engagement::{generate_engagement, random_timeframe};
pub use hashtags::generate_hashtags;
pub use service::{baseline_analysis, build_trend, TrendFilter, TrendService, TrendStats, DEFAULT_LIMIT};
pub use topics::{trend_id, MockTopic, MOCK_TOPICS};
