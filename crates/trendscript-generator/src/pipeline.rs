//! Content generation pipeline: prompt → provider call → interpretation.

use std::time::Duration;

use trendscript_core::{AppConfig, GeneratedContentDocument, GenerationRequest, TrendRecord};

use crate::error::GeneratorError;
use crate::interpret::{interpret_response, DocumentContext, FallbackReason, Interpretation};
use crate::prompt::build_prompt;
use crate::provider::{GenerationCall, GenerationProvider, OpenAiProvider};

/// Model and timeout settings for [`ContentGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub model: String,
    pub max_tokens: u32,
    pub analysis_max_tokens: u32,
    pub timeout: Duration,
    /// Serve the fallback document when the provider call times out instead
    /// of returning [`GeneratorError::Timeout`].
    pub fallback_on_timeout: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 4096,
            analysis_max_tokens: 2048,
            timeout: Duration::from_secs(60),
            fallback_on_timeout: true,
        }
    }
}

impl GeneratorSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
            analysis_max_tokens: config.analysis_max_tokens,
            timeout: Duration::from_secs(config.llm_timeout_secs),
            fallback_on_timeout: config.fallback_on_timeout,
        }
    }
}

/// Generates content scripts through a [`GenerationProvider`].
///
/// Holds no per-call state; one instance can serve concurrent requests.
#[derive(Debug)]
pub struct ContentGenerator<P = OpenAiProvider> {
    pub(crate) provider: P,
    pub(crate) settings: GeneratorSettings,
}

impl<P: GenerationProvider> ContentGenerator<P> {
    #[must_use]
    pub fn new(provider: P, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Run one provider call bounded by the configured timeout.
    pub(crate) async fn call_provider(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, GeneratorError> {
        let call = GenerationCall {
            system_instruction,
            user_prompt,
            model: &self.settings.model,
            max_tokens,
        };
        match tokio::time::timeout(self.settings.timeout, self.provider.generate(&call)).await {
            Ok(result) => result,
            Err(_) => Err(GeneratorError::Timeout {
                secs: self.settings.timeout.as_secs(),
            }),
        }
    }

    /// Generate a script and report whether the fallback was used.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`GeneratorError`] when the call fails, and
    /// [`GeneratorError::Timeout`] when it times out with
    /// `fallback_on_timeout` disabled. Unusable model output is never an error.
    pub async fn generate_script(
        &self,
        trend: &TrendRecord,
        request: &GenerationRequest,
        user_id: &str,
    ) -> Result<Interpretation, GeneratorError> {
        let session_id = request.resolved_session_id();
        let prompt = build_prompt(trend, request);

        tracing::info!(
            trend_id = %trend.id,
            template = %request.template(),
            tone = %request.tone_style(),
            session_id = %session_id,
            "generating content script"
        );

        let raw = match self
            .call_provider(
                &prompt.system_instruction,
                &prompt.user_prompt,
                self.settings.max_tokens,
            )
            .await
        {
            Ok(raw) => raw,
            Err(GeneratorError::Timeout { secs }) if self.settings.fallback_on_timeout => {
                tracing::warn!(trend_id = %trend.id, secs, "generation call timed out");
                let ctx = DocumentContext {
                    trend,
                    request,
                    user_id,
                    session_id: &session_id,
                };
                return Ok(ctx.fallback(FallbackReason::Timeout));
            }
            Err(e) => {
                tracing::error!(trend_id = %trend.id, error = %e, "generation call failed");
                return Err(e);
            }
        };

        let interpretation = interpret_response(&raw, trend, request, user_id, &session_id);
        tracing::info!(
            trend_id = %trend.id,
            fallback = interpretation.is_fallback(),
            sections = interpretation.document().outline.len(),
            "content script ready"
        );
        Ok(interpretation)
    }

    /// Generate a content document for a trend.
    ///
    /// The document always has a title, a hook and at least one section.
    ///
    /// # Errors
    ///
    /// See [`ContentGenerator::generate_script`].
    pub async fn generate_content_script(
        &self,
        trend: &TrendRecord,
        request: &GenerationRequest,
        user_id: &str,
    ) -> Result<GeneratedContentDocument, GeneratorError> {
        self.generate_script(trend, request, user_id)
            .await
            .map(Interpretation::into_document)
    }
}
