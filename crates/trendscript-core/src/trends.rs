use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Youtube,
    Reddit,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Youtube,
        Platform::Reddit,
        Platform::Tiktok,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
            Platform::Reddit => "reddit",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Parse a platform id. Matching is case-insensitive.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(id))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engagement counters for a single platform. Fields that do not apply to a
/// platform stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformEngagement {
    pub posts: u64,
    pub mentions: u64,
    /// Share of positive mentions in `[0.0, 1.0]`.
    pub sentiment: f64,
    pub videos: u64,
    pub total_views: u64,
    pub avg_views: u64,
    pub upvotes: u64,
    pub comments: u64,
    /// Interaction ratio in `[0.0, 1.0]`.
    pub engagement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendEngagement {
    pub twitter: PlatformEngagement,
    pub youtube: PlatformEngagement,
    pub reddit: PlatformEngagement,
    pub tiktok: PlatformEngagement,
}

/// A trending topic with popularity metadata. Read-only input to generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub id: String,
    pub topic: String,
    pub platform: Platform,
    pub category: String,
    /// Content potential score, 0–100.
    pub content_score: u8,
    pub trend_velocity: String,
    pub hashtags: Vec<String>,
    pub key_insights: Vec<String>,
    pub suggested_angles: Vec<String>,
    pub engagement: TrendEngagement,
    pub timeframe: String,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}
