//! Prompt construction from a trend record and a generation request.

use trendscript_core::{GenerationRequest, TemplateId, Tone, TrendRecord};

/// Template voice per content format.
const TEMPLATE_VOICES: &[(TemplateId, &str)] = &[
    (
        TemplateId::YoutubeExplainer,
        "You are an expert YouTube content creator specializing in 10-15 minute educational videos. Create detailed, engaging scripts with clear timestamps, hooks, and actionable content.",
    ),
    (
        TemplateId::BlogPost,
        "You are a professional content writer specializing in comprehensive blog posts. Create well-structured, SEO-optimized content with clear headings and valuable insights.",
    ),
    (
        TemplateId::SocialThread,
        "You are a social media expert creating viral Twitter/LinkedIn threads. Focus on concise, impactful points that drive engagement and sharing.",
    ),
    (
        TemplateId::PodcastGuide,
        "You are a podcast producer creating structured discussion guides. Focus on natural conversation flow, thought-provoking questions, and key talking points.",
    ),
    (
        TemplateId::ShortForm,
        "You are a TikTok/Instagram Reels creator. Focus on hook-heavy, fast-paced content that captures attention in the first 3 seconds.",
    ),
];

/// Style instruction per tone.
const TONE_STYLES: &[(Tone, &str)] = &[
    (
        Tone::Professional,
        "Use authoritative, business-focused language with industry expertise.",
    ),
    (
        Tone::Casual,
        "Use friendly, conversational tone like talking to a friend.",
    ),
    (
        Tone::Humorous,
        "Include appropriate humor, wit, and light-hearted commentary.",
    ),
    (
        Tone::Educational,
        "Focus on teaching and explaining concepts clearly.",
    ),
    (
        Tone::Controversial,
        "Present provocative viewpoints while maintaining respect.",
    ),
    (
        Tone::Inspirational,
        "Use motivational and uplifting language that inspires action.",
    ),
];

const OUTPUT_REQUIREMENTS: &str = "Always provide:
1. A compelling, clickable title
2. An attention-grabbing hook
3. Detailed content outline with timestamps (if applicable)
4. Key points to emphasize
5. SEO keywords and hashtags
6. Performance predictions

Format your response as a single structured JSON object with all required fields.";

/// Literal skeleton the model is asked to fill in.
pub(crate) const RESPONSE_SCHEMA: &str = r##"{
  "title": "Compelling, clickable title",
  "hook": "Attention-grabbing opening line",
  "outline": [
    {
      "section": "Section name",
      "duration": "0:00 - 1:30",
      "content": ["Point 1", "Point 2", "Point 3"]
    }
  ],
  "keyPoints": ["Key point 1", "Key point 2", "Key point 3", "Key point 4"],
  "seoKeywords": ["keyword1", "keyword2", "keyword3", "keyword4"],
  "hashtags": ["#hashtag1", "#hashtag2", "#hashtag3"],
  "estimatedViews": "10K - 25K",
  "difficulty": "Beginner-friendly"
}"##;

/// System instruction and user prompt for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
}

fn lookup<K: Copy + PartialEq + Default>(table: &[(K, &'static str)], key: K) -> &'static str {
    let find = |k: K| table.iter().find(|(id, _)| *id == k).map(|(_, v)| *v);
    find(key).or_else(|| find(K::default())).unwrap_or_default()
}

/// Voice for a content template.
#[must_use]
pub fn template_voice(template: TemplateId) -> &'static str {
    lookup(TEMPLATE_VOICES, template)
}

/// Style line for a tone.
#[must_use]
pub fn tone_style(tone: Tone) -> &'static str {
    lookup(TONE_STYLES, tone)
}

/// Build the system instruction for a request. Unknown template ids and
/// tones resolve to the youtube-explainer voice and professional style.
#[must_use]
pub fn system_instruction(request: &GenerationRequest) -> String {
    format!(
        "{voice}\n\nTone: {style}\n\n{OUTPUT_REQUIREMENTS}",
        voice = template_voice(request.template()),
        style = tone_style(request.tone_style()),
    )
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt embedding the trend data and the target schema.
#[must_use]
pub fn user_prompt(trend: &TrendRecord, request: &GenerationRequest) -> String {
    let engagement = &trend.engagement;
    let custom = request
        .custom_instructions()
        .map(|text| format!("\nAdditional instructions: {text}\n"))
        .unwrap_or_default();

    format!(
        r"Create a content script for the following trending topic:

**Topic**: {topic}
**Category**: {category}
**Content Score**: {score}/100
**Trend Velocity**: {velocity}
**Primary Platform**: {platform}
**Hashtags**: {hashtags}

**Key Insights**:
{insights}

**Suggested Angles**:
{angles}

**Platform Engagement Data**:
- Twitter: {mentions} mentions, sentiment: {sentiment:.2}
- YouTube: {videos} videos, {total_views} total views
- Reddit: {upvotes} upvotes, {comments} comments

**Template**: {template}
**Tone**: {tone}
{custom}
Please generate a comprehensive content script in JSON format with the following structure:
{schema}",
        topic = trend.topic,
        category = trend.category,
        score = trend.content_score,
        velocity = trend.trend_velocity,
        platform = trend.platform,
        hashtags = trend.hashtags.join(", "),
        insights = bullets(&trend.key_insights),
        angles = bullets(&trend.suggested_angles),
        mentions = engagement.twitter.mentions,
        sentiment = engagement.twitter.sentiment,
        videos = engagement.youtube.videos,
        total_views = engagement.youtube.total_views,
        upvotes = engagement.reddit.upvotes,
        comments = engagement.reddit.comments,
        template = request.template_id,
        tone = request.tone,
        schema = RESPONSE_SCHEMA,
    )
}

/// Build both halves of the prompt. Pure: identical inputs give identical output.
#[must_use]
pub fn build_prompt(trend: &TrendRecord, request: &GenerationRequest) -> Prompt {
    Prompt {
        system_instruction: system_instruction(request),
        user_prompt: user_prompt(trend, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_request, sample_trend};

    #[test]
    fn unknown_template_uses_youtube_explainer_voice() {
        let unknown = sample_request("unknown-template", "professional");
        let explainer = sample_request("youtube-explainer", "professional");
        assert_eq!(system_instruction(&unknown), system_instruction(&explainer));
    }

    #[test]
    fn unknown_tone_uses_professional_style() {
        let unknown = sample_request("blog-post", "sarcastic");
        let professional = sample_request("blog-post", "professional");
        assert_eq!(
            system_instruction(&unknown),
            system_instruction(&professional)
        );
    }

    #[test]
    fn every_template_and_tone_has_its_own_entry() {
        for template in TemplateId::ALL {
            assert!(TEMPLATE_VOICES.iter().any(|(id, _)| *id == template));
        }
        for tone in Tone::ALL {
            assert!(TONE_STYLES.iter().any(|(id, _)| *id == tone));
        }
        assert_ne!(
            template_voice(TemplateId::ShortForm),
            template_voice(TemplateId::BlogPost)
        );
    }

    #[test]
    fn system_instruction_lists_output_facets() {
        let text = system_instruction(&sample_request("short-form", "humorous"));
        assert!(text.starts_with("You are a TikTok/Instagram Reels creator."));
        assert!(text.contains("Tone: Include appropriate humor"));
        assert!(text.contains("6. Performance predictions"));
        assert!(text.contains("JSON object"));
    }

    #[test]
    fn build_prompt_is_idempotent() {
        let trend = sample_trend(&["#AI", "#Tech"]);
        let request = sample_request("podcast-guide", "educational");
        assert_eq!(
            build_prompt(&trend, &request),
            build_prompt(&trend, &request)
        );
    }

    #[test]
    fn user_prompt_embeds_trend_fields() {
        let trend = sample_trend(&["#AI", "#Tech"]);
        let prompt = user_prompt(&trend, &sample_request("blog-post", "casual"));

        assert!(prompt.contains("**Topic**: AI-Powered Code Reviews"));
        assert!(prompt.contains("**Content Score**: 87/100"));
        assert!(prompt.contains("**Primary Platform**: twitter"));
        assert!(prompt.contains("**Hashtags**: #AI, #Tech"));
        assert!(prompt.contains("- Reviews catch bugs earlier"));
        assert!(prompt.contains("- Beginner's guide"));
        assert!(prompt.contains("- Twitter: 41000 mentions, sentiment: 0.82"));
        assert!(prompt.contains("- YouTube: 210 videos, 800000 total views"));
        assert!(prompt.contains("- Reddit: 14000 upvotes, 2100 comments"));
        assert!(prompt.contains("**Template**: blog-post"));
        assert!(prompt.contains("**Tone**: casual"));
        assert!(prompt.ends_with(RESPONSE_SCHEMA));
    }

    #[test]
    fn user_prompt_includes_custom_instructions_only_when_present() {
        let trend = sample_trend(&[]);
        let mut request = sample_request("blog-post", "casual");
        assert!(!user_prompt(&trend, &request).contains("Additional instructions"));

        request.custom_prompt = Some("Focus on small teams".to_string());
        assert!(user_prompt(&trend, &request)
            .contains("Additional instructions: Focus on small teams"));
    }

    #[test]
    fn response_schema_is_valid_json_with_required_fields() {
        let schema: serde_json::Value =
            serde_json::from_str(RESPONSE_SCHEMA).expect("schema parses");
        for key in [
            "title",
            "hook",
            "outline",
            "keyPoints",
            "seoKeywords",
            "hashtags",
            "estimatedViews",
            "difficulty",
        ] {
            assert!(schema.get(key).is_some(), "schema missing {key}");
        }
        assert_eq!(schema["hashtags"][0], "#hashtag1");
        assert_eq!(schema["difficulty"], "Beginner-friendly");
    }
}
