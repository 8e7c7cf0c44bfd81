//! Trend feed: selection, enrichment, filtering and search.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use rand::Rng;
use serde::Serialize;
use trendscript_core::{Platform, TrendRecord};
use trendscript_generator::{ContentGenerator, GenerationProvider, OpenAiProvider, TrendAnalysis};

use crate::engagement::{generate_engagement, random_timeframe};
use crate::hashtags::generate_hashtags;
use crate::topics::{trend_id, MockTopic, MOCK_TOPICS};

pub const DEFAULT_LIMIT: usize = 20;
const HIGH_POTENTIAL_SCORE: u8 = 85;
const MAX_SCORE: u8 = 100;

/// Selection criteria for [`TrendService::trending_topics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendFilter {
    /// Case-insensitive category name.
    pub category: Option<String>,
    pub platform: Option<Platform>,
    pub limit: usize,
}

impl Default for TrendFilter {
    fn default() -> Self {
        Self {
            category: None,
            platform: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TrendFilter {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    fn matches(&self, topic: &MockTopic) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| c.trim().eq_ignore_ascii_case(topic.category));
        let platform_ok = self.platform.is_none_or(|p| p == topic.platform);
        category_ok && platform_ok
    }
}

/// Aggregate figures over the current feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    pub total_trends: usize,
    pub high_potential: usize,
    pub average_score: u32,
    pub platforms: usize,
}

impl TrendStats {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_trends(trends: &[TrendRecord]) -> Self {
        let total: u32 = trends.iter().map(|t| u32::from(t.content_score)).sum();
        let average_score = if trends.is_empty() {
            0
        } else {
            (f64::from(total) / trends.len() as f64).round() as u32
        };
        Self {
            total_trends: trends.len(),
            high_potential: trends
                .iter()
                .filter(|t| t.content_score >= HIGH_POTENTIAL_SCORE)
                .count(),
            average_score,
            platforms: trends
                .iter()
                .map(|t| t.platform)
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

/// Analysis used when model enrichment is off.
#[must_use]
pub fn baseline_analysis(topic: &MockTopic) -> TrendAnalysis {
    let name = topic.topic;
    TrendAnalysis {
        content_score: topic.base_score,
        trend_velocity: "Steady Growth".to_string(),
        key_insights: vec![
            format!("Growing interest in {name}"),
            format!("Popular on {} platform", topic.platform),
            "Good potential for content creation".to_string(),
        ],
        suggested_angles: vec![
            format!("Beginner's guide to {name}"),
            format!("Latest trends in {name}"),
            format!("How {name} affects you"),
        ],
        category: topic.category.to_string(),
    }
}

/// Assemble a full record. The category always comes from the seed topic so
/// that category filters stay consistent with the returned records.
pub fn build_trend<R: Rng + ?Sized>(
    topic: &MockTopic,
    analysis: TrendAnalysis,
    rng: &mut R,
) -> TrendRecord {
    let content_score = analysis.content_score.min(MAX_SCORE);
    TrendRecord {
        id: trend_id(topic.topic),
        topic: topic.topic.to_string(),
        platform: topic.platform,
        category: topic.category.to_string(),
        content_score,
        trend_velocity: analysis.trend_velocity,
        hashtags: generate_hashtags(topic.topic),
        key_insights: analysis.key_insights,
        suggested_angles: analysis.suggested_angles,
        engagement: generate_engagement(content_score, rng),
        timeframe: random_timeframe(rng).to_string(),
        created_at: Utc::now(),
    }
}

fn assemble(topics: &[&MockTopic], analyses: Vec<TrendAnalysis>) -> Vec<TrendRecord> {
    let mut rng = rand::rng();
    topics
        .iter()
        .zip(analyses)
        .map(|(topic, analysis)| build_trend(topic, analysis, &mut rng))
        .collect()
}

fn matches_query(trend: &TrendRecord, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    contains(&trend.topic)
        || trend.hashtags.iter().any(|h| contains(h))
        || trend.key_insights.iter().any(|i| contains(i))
}

/// Synthetic trend feed, optionally enriched by model analysis.
#[derive(Debug)]
pub struct TrendService<P = OpenAiProvider> {
    analyst: Option<Arc<ContentGenerator<P>>>,
}

impl TrendService {
    /// Feed without model enrichment.
    #[must_use]
    pub fn offline() -> Self {
        Self { analyst: None }
    }
}

impl<P: GenerationProvider> TrendService<P> {
    /// Feed that asks `generator` to analyze each topic.
    #[must_use]
    pub fn with_analysis(generator: Arc<ContentGenerator<P>>) -> Self {
        Self {
            analyst: Some(generator),
        }
    }

    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.analyst.is_some()
    }

    async fn analyses(&self, topics: &[&MockTopic]) -> Vec<TrendAnalysis> {
        match &self.analyst {
            Some(generator) => {
                join_all(topics.iter().map(|t| {
                    generator.analyze_trend_potential(t.topic, t.platform, t.category)
                }))
                .await
            }
            None => topics.iter().map(|t| baseline_analysis(t)).collect(),
        }
    }

    /// Trends matching `filter`, highest content score first.
    pub async fn trending_topics(&self, filter: &TrendFilter) -> Vec<TrendRecord> {
        let selected: Vec<&MockTopic> = MOCK_TOPICS.iter().filter(|t| filter.matches(t)).collect();
        let analyses = self.analyses(&selected).await;

        let mut trends = assemble(&selected, analyses);
        trends.sort_by(|a, b| b.content_score.cmp(&a.content_score));
        trends.truncate(filter.limit);

        tracing::debug!(
            count = trends.len(),
            category = filter.category.as_deref(),
            platform = filter.platform.map(Platform::as_str),
            enriched = self.is_enriched(),
            "built trend feed"
        );
        trends
    }

    /// The trend with the given id, if one exists.
    pub async fn trend_by_id(&self, id: &str) -> Option<TrendRecord> {
        let topic = MOCK_TOPICS.iter().find(|t| trend_id(t.topic) == id)?;
        let analyses = self.analyses(&[topic]).await;
        assemble(&[topic], analyses).pop()
    }

    /// Trends whose topic, hashtags or key insights contain `query`
    /// (case-insensitive), within `filter`.
    pub async fn search(&self, query: &str, filter: &TrendFilter) -> Vec<TrendRecord> {
        let query = query.trim().to_lowercase();
        let candidates = self
            .trending_topics(&TrendFilter {
                limit: MOCK_TOPICS.len(),
                ..filter.clone()
            })
            .await;
        let mut found: Vec<TrendRecord> = candidates
            .into_iter()
            .filter(|t| matches_query(t, &query))
            .collect();
        found.truncate(filter.limit);
        tracing::debug!(query = %query, count = found.len(), "searched trends");
        found
    }

    pub async fn stats(&self) -> TrendStats {
        let trends = self
            .trending_topics(&TrendFilter::with_limit(MOCK_TOPICS.len()))
            .await;
        TrendStats::from_trends(&trends)
    }
}
