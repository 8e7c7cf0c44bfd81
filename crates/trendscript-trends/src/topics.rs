//! Fixed topic seeds the synthetic trend feed is built from.

use sha2::{Digest, Sha256};
use trendscript_core::Platform;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTopic {
    pub topic: &'static str,
    pub platform: Platform,
    pub category: &'static str,
    pub base_score: u8,
}

pub const MOCK_TOPICS: [MockTopic; 8] = [
    MockTopic {
        topic: "AI-Powered Code Reviews",
        platform: Platform::Twitter,
        category: "Technology",
        base_score: 87,
    },
    MockTopic {
        topic: "Micro-SaaS Success Stories",
        platform: Platform::Youtube,
        category: "Business",
        base_score: 92,
    },
    MockTopic {
        topic: "Remote Work Productivity Hacks",
        platform: Platform::Reddit,
        category: "Lifestyle",
        base_score: 78,
    },
    MockTopic {
        topic: "AI Image Generation Ethics",
        platform: Platform::Tiktok,
        category: "Technology",
        base_score: 95,
    },
    MockTopic {
        topic: "Sustainable Fashion Trends 2025",
        platform: Platform::Twitter,
        category: "Lifestyle",
        base_score: 83,
    },
    MockTopic {
        topic: "Cryptocurrency Market Recovery",
        platform: Platform::Youtube,
        category: "Finance",
        base_score: 88,
    },
    MockTopic {
        topic: "Mental Health in Tech Industry",
        platform: Platform::Reddit,
        category: "Health",
        base_score: 79,
    },
    MockTopic {
        topic: "Plant-Based Protein Innovation",
        platform: Platform::Tiktok,
        category: "Food",
        base_score: 81,
    },
];

/// Stable trend id for a topic: the first 16 bytes of its SHA-256 digest,
/// formatted as a UUID.
#[must_use]
pub fn trend_id(topic: &str) -> String {
    let hash = Sha256::digest(topic.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);
    Uuid::from_bytes(bytes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_id_is_stable_uuid() {
        let id = trend_id("AI-Powered Code Reviews");
        assert_eq!(id, trend_id("AI-Powered Code Reviews"));
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn every_topic_has_a_distinct_id() {
        let mut ids: Vec<String> = MOCK_TOPICS.iter().map(|t| trend_id(t.topic)).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MOCK_TOPICS.len());
    }
}
