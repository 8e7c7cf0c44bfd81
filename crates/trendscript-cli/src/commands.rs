//! Command handlers. Each returns the JSON value `main` prints.

use std::sync::Arc;

use anyhow::Context;
use serde_json::Value;
use trendscript_core::{
    content_templates, tone_options, AppConfig, GenerationRequest, Platform, ANONYMOUS_USER_ID,
};
use trendscript_generator::{ContentGenerator, GeneratorSettings, OpenAiProvider};
use trendscript_trends::{TrendFilter, TrendService};

/// Parse an optional platform argument.
///
/// # Errors
///
/// Returns an error naming the accepted values when `raw` is not a platform.
pub(crate) fn parse_platform(raw: Option<&str>) -> anyhow::Result<Option<Platform>> {
    raw.map(|id| {
        Platform::from_id(id).with_context(|| {
            format!("unknown platform {id:?}; expected one of twitter, youtube, reddit, tiktok")
        })
    })
    .transpose()
}

pub(crate) async fn list_trends(
    category: Option<String>,
    platform: Option<&str>,
    search: Option<&str>,
    limit: usize,
) -> anyhow::Result<Value> {
    let filter = TrendFilter {
        category,
        platform: parse_platform(platform)?,
        limit,
    };
    let service = TrendService::offline();
    let trends = match search {
        Some(query) => service.search(query, &filter).await,
        None => service.trending_topics(&filter).await,
    };
    Ok(serde_json::to_value(trends)?)
}

pub(crate) fn list_templates() -> anyhow::Result<Value> {
    Ok(serde_json::to_value(content_templates())?)
}

pub(crate) fn list_tones() -> anyhow::Result<Value> {
    Ok(serde_json::to_value(tone_options())?)
}

/// Generate a script for `trend_id` with the configured provider.
///
/// # Errors
///
/// Returns an error if the trend does not exist or the provider call fails.
pub(crate) async fn generate(
    config: &AppConfig,
    trend_id: String,
    template_id: String,
    tone: String,
    custom_prompt: Option<String>,
) -> anyhow::Result<Value> {
    let provider = OpenAiProvider::new(&config.openai_api_key, &config.llm_base_url)?;
    let generator = Arc::new(ContentGenerator::new(
        provider,
        GeneratorSettings::from_app_config(config),
    ));
    let trends = if config.trend_enrichment {
        TrendService::with_analysis(Arc::clone(&generator))
    } else {
        TrendService::offline()
    };

    let trend = trends
        .trend_by_id(&trend_id)
        .await
        .with_context(|| format!("trend not found: {trend_id}"))?;

    let request = GenerationRequest {
        trend_id,
        template_id,
        tone,
        custom_prompt,
        session_id: None,
    };
    let interpretation = generator
        .generate_script(&trend, &request, ANONYMOUS_USER_ID)
        .await
        .context("content generation failed")?;

    if let trendscript_generator::Interpretation::Fallback { reason, .. } = &interpretation {
        tracing::warn!(reason = %reason, "model output unusable, printed fallback script");
    }
    Ok(serde_json::to_value(interpretation.into_document())?)
}
