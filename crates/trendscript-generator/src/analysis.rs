//! Model-backed estimate of a topic's content potential.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trendscript_core::Platform;

use crate::interpret::{decode_object, locate_json};
use crate::pipeline::ContentGenerator;
use crate::provider::GenerationProvider;

const ANALYST_INSTRUCTION: &str = "You are a trend analysis expert. Analyze social media trends and provide content potential scores with insights.";

const ANALYSIS_SCHEMA: &str = r#"{
  "contentScore": 85,
  "trendVelocity": "Rising Fast",
  "keyInsights": ["insight1", "insight2", "insight3"],
  "suggestedAngles": ["angle1", "angle2", "angle3"],
  "category": "Technology"
}"#;

/// Content potential of a trending topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    #[serde(default = "steady_score")]
    pub content_score: u8,
    #[serde(default = "steady_velocity")]
    pub trend_velocity: String,
    #[serde(default = "steady_insights")]
    pub key_insights: Vec<String>,
    #[serde(default = "steady_angles")]
    pub suggested_angles: Vec<String>,
    #[serde(default = "general_category")]
    pub category: String,
}

fn steady_score() -> u8 {
    75
}

fn steady_velocity() -> String {
    "Steady Growth".to_string()
}

fn steady_insights() -> Vec<String> {
    [
        "Trending topic with potential",
        "Audience engagement expected",
        "Timing is important",
    ]
    .map(String::from)
    .to_vec()
}

fn steady_angles() -> Vec<String> {
    [
        "Educational approach",
        "Personal experience",
        "Industry analysis",
    ]
    .map(String::from)
    .to_vec()
}

fn general_category() -> String {
    "General".to_string()
}

impl TrendAnalysis {
    /// Used when the model answered but the answer could not be decoded.
    #[must_use]
    pub fn steady() -> Self {
        Self {
            content_score: steady_score(),
            trend_velocity: steady_velocity(),
            key_insights: steady_insights(),
            suggested_angles: steady_angles(),
            category: general_category(),
        }
    }

    /// Used when the provider call itself failed.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            content_score: 70,
            trend_velocity: "Unknown".to_string(),
            key_insights: vec!["Analysis unavailable".to_string()],
            suggested_angles: vec!["General coverage".to_string()],
            category: general_category(),
        }
    }
}

fn analysis_prompt(topic: &str, platform: Platform, category: &str) -> String {
    format!(
        "Analyze this trending topic for content creation potential:

Topic: {topic}
Platform Data: topic={topic}, platform={platform}, category={category}

Provide analysis in JSON format:
{ANALYSIS_SCHEMA}"
    )
}

fn decode_analysis(raw: &str) -> Option<TrendAnalysis> {
    let map = decode_object(locate_json(raw)).ok()?;
    serde_json::from_value(Value::Object(map)).ok()
}

impl<P: GenerationProvider> ContentGenerator<P> {
    /// Ask the model to score a topic. Never fails: undecodable output yields
    /// [`TrendAnalysis::steady`], a failed call [`TrendAnalysis::unavailable`].
    pub async fn analyze_trend_potential(
        &self,
        topic: &str,
        platform: Platform,
        category: &str,
    ) -> TrendAnalysis {
        let prompt = analysis_prompt(topic, platform, category);
        match self
            .call_provider(
                ANALYST_INSTRUCTION,
                &prompt,
                self.settings.analysis_max_tokens,
            )
            .await
        {
            Ok(raw) => decode_analysis(&raw).unwrap_or_else(|| {
                tracing::warn!(topic, "trend analysis output could not be decoded");
                TrendAnalysis::steady()
            }),
            Err(e) => {
                tracing::error!(topic, error = %e, "trend analysis call failed");
                TrendAnalysis::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::GeneratorSettings;
    use crate::test_support::StubProvider;

    fn generator(provider: StubProvider) -> ContentGenerator<StubProvider> {
        ContentGenerator::new(provider, GeneratorSettings::default())
    }

    #[tokio::test]
    async fn decodes_fenced_analysis() {
        let raw = "```json\n{\"contentScore\": 91, \"trendVelocity\": \"Exploding\", \"keyInsights\": [\"a\"], \"suggestedAngles\": [\"b\"], \"category\": \"Technology\"}\n```";
        let analysis = generator(StubProvider::reply(raw))
            .analyze_trend_potential("AI Agents", Platform::Twitter, "Technology")
            .await;
        assert_eq!(analysis.content_score, 91);
        assert_eq!(analysis.trend_velocity, "Exploding");
        assert_eq!(analysis.key_insights, vec!["a"]);
        assert_eq!(analysis.category, "Technology");
    }

    #[tokio::test]
    async fn missing_fields_take_steady_values() {
        let analysis = generator(StubProvider::reply("{\"contentScore\": 88}"))
            .analyze_trend_potential("AI Agents", Platform::Youtube, "Technology")
            .await;
        assert_eq!(analysis.content_score, 88);
        assert_eq!(analysis.trend_velocity, "Steady Growth");
        assert_eq!(analysis.key_insights.len(), 3);
    }

    #[tokio::test]
    async fn undecodable_output_is_steady() {
        let analysis = generator(StubProvider::reply("It is trending a lot."))
            .analyze_trend_potential("AI Agents", Platform::Reddit, "Technology")
            .await;
        assert_eq!(analysis, TrendAnalysis::steady());
    }

    #[tokio::test]
    async fn provider_failure_is_unavailable() {
        let analysis = generator(StubProvider::failing())
            .analyze_trend_potential("AI Agents", Platform::Tiktok, "Technology")
            .await;
        assert_eq!(analysis, TrendAnalysis::unavailable());
        assert_eq!(analysis.content_score, 70);
    }

    #[tokio::test]
    async fn uses_analysis_token_budget() {
        let provider = StubProvider::reply("{}");
        generator(provider.clone())
            .analyze_trend_potential("AI Agents", Platform::Twitter, "Technology")
            .await;
        let calls = provider.calls();
        assert_eq!(calls[0].max_tokens, 2048);
        assert_eq!(calls[0].system_instruction, ANALYST_INSTRUCTION);
        assert!(calls[0].user_prompt.contains("Topic: AI Agents"));
        assert!(calls[0].user_prompt.contains("platform=twitter"));
    }
}
