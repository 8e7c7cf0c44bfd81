//! Prompt construction, model invocation and response interpretation for
//! content scripts.

pub mod analysis;
pub mod error;
pub mod fallback;
pub mod interpret;
pub mod pipeline;
pub mod prompt;
pub mod provider;

pub use analysis::TrendAnalysis;
pub use error::GeneratorError;
pub use fallback::fallback_script;
pub use interpret::{
    interpret_response, locate_json, FallbackReason, Interpretation, JsonCandidate, ScriptBody,
};
pub use pipeline::{ContentGenerator, GeneratorSettings};
pub use prompt::{build_prompt, Prompt};
pub use provider::{GenerationCall, GenerationProvider, OpenAiProvider};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::Utc;
    use trendscript_core::{
        GenerationRequest, Platform, PlatformEngagement, TrendEngagement, TrendRecord,
    };

    use crate::error::GeneratorError;
    use crate::provider::{GenerationCall, GenerationProvider};

    pub(crate) fn sample_trend(hashtags: &[&str]) -> TrendRecord {
        TrendRecord {
            id: "trend-1".to_string(),
            topic: "AI-Powered Code Reviews".to_string(),
            platform: Platform::Twitter,
            category: "Technology".to_string(),
            content_score: 87,
            trend_velocity: "Rising Fast".to_string(),
            hashtags: hashtags.iter().map(ToString::to_string).collect(),
            key_insights: vec!["Reviews catch bugs earlier".to_string()],
            suggested_angles: vec!["Beginner's guide".to_string()],
            engagement: TrendEngagement {
                twitter: PlatformEngagement {
                    mentions: 41_000,
                    sentiment: 0.82,
                    ..PlatformEngagement::default()
                },
                youtube: PlatformEngagement {
                    videos: 210,
                    total_views: 800_000,
                    ..PlatformEngagement::default()
                },
                reddit: PlatformEngagement {
                    upvotes: 14_000,
                    comments: 2_100,
                    ..PlatformEngagement::default()
                },
                tiktok: PlatformEngagement::default(),
            },
            timeframe: "2h ago".to_string(),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn sample_request(template_id: &str, tone: &str) -> GenerationRequest {
        GenerationRequest {
            trend_id: "trend-1".to_string(),
            template_id: template_id.to_string(),
            tone: tone.to_string(),
            custom_prompt: None,
            session_id: None,
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct RecordedCall {
        pub system_instruction: String,
        pub user_prompt: String,
        pub model: String,
        pub max_tokens: u32,
    }

    #[derive(Debug, Clone)]
    enum Behavior {
        Reply(String),
        Fail,
        Stall,
    }

    /// In-process provider that records each call.
    #[derive(Debug, Clone)]
    pub(crate) struct StubProvider {
        behavior: Behavior,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl StubProvider {
        fn with(behavior: Behavior) -> Self {
            Self {
                behavior,
                calls: Arc::default(),
            }
        }

        pub(crate) fn reply(text: &str) -> Self {
            Self::with(Behavior::Reply(text.to_string()))
        }

        pub(crate) fn failing() -> Self {
            Self::with(Behavior::Fail)
        }

        pub(crate) fn stalled() -> Self {
            Self::with(Behavior::Stall)
        }

        pub(crate) fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl GenerationProvider for StubProvider {
        async fn generate(&self, call: &GenerationCall<'_>) -> Result<String, GeneratorError> {
            self.calls.lock().expect("calls lock").push(RecordedCall {
                system_instruction: call.system_instruction.to_string(),
                user_prompt: call.user_prompt.to_string(),
                model: call.model.to_string(),
                max_tokens: call.max_tokens,
            });
            match &self.behavior {
                Behavior::Reply(text) => Ok(text.clone()),
                Behavior::Fail => Err(GeneratorError::EmptyCompletion),
                Behavior::Stall => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(String::new())
                }
            }
        }
    }
}
