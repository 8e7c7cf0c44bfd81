use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content-format archetype governing the generation voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    YoutubeExplainer,
    BlogPost,
    SocialThread,
    PodcastGuide,
    ShortForm,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::YoutubeExplainer,
        TemplateId::BlogPost,
        TemplateId::SocialThread,
        TemplateId::PodcastGuide,
        TemplateId::ShortForm,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::YoutubeExplainer => "youtube-explainer",
            TemplateId::BlogPost => "blog-post",
            TemplateId::SocialThread => "social-thread",
            TemplateId::PodcastGuide => "podcast-guide",
            TemplateId::ShortForm => "short-form",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Like [`TemplateId::from_id`], but unrecognized ids map to the default
    /// template instead of failing.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stylistic modifier applied on top of the template voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Humorous,
    Educational,
    Controversial,
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Humorous,
        Tone::Educational,
        Tone::Controversial,
        Tone::Inspirational,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Educational => "educational",
            Tone::Controversial => "controversial",
            Tone::Inspirational => "inspirational",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Unrecognized tones map to [`Tone::Professional`].
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller's request to turn a trend into a content script.
///
/// `template_id` and `tone` keep whatever the caller sent; lookups resolve
/// unknown values to defaults via [`GenerationRequest::template`] and
/// [`GenerationRequest::tone_style`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub trend_id: String,
    pub template_id: String,
    pub tone: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl GenerationRequest {
    #[must_use]
    pub fn template(&self) -> TemplateId {
        TemplateId::resolve(&self.template_id)
    }

    #[must_use]
    pub fn tone_style(&self) -> Tone {
        Tone::resolve(&self.tone)
    }

    /// Free-text instructions, ignoring blank input.
    #[must_use]
    pub fn custom_instructions(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// The caller's session id, or `content_gen_{trend_id}_{template_id}`.
    #[must_use]
    pub fn resolved_session_id(&self) -> String {
        match self.session_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => format!("content_gen_{}_{}", self.trend_id, self.template_id),
        }
    }
}

/// One outline section of a generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub section: String,
    /// Free-form timing label such as `0:00 - 1:30`.
    pub duration: String,
    pub content: Vec<String>,
}

/// A generated content script. Built once per generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContentDocument {
    pub id: String,
    pub user_id: String,
    pub session_id: String,
    pub trend_id: String,
    pub template_id: String,
    pub tone: String,
    pub custom_prompt: Option<String>,
    pub title: String,
    pub hook: String,
    pub outline: Vec<ContentSection>,
    #[serde(rename = "keyPoints")]
    pub key_points: Vec<String>,
    #[serde(rename = "seoKeywords")]
    pub seo_keywords: Vec<String>,
    pub hashtags: Vec<String>,
    #[serde(rename = "estimatedViews")]
    pub estimated_views: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedContentDocument {
    /// True when the document has a title, a hook and at least one section.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.hook.trim().is_empty() && !self.outline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(template_id: &str, tone: &str) -> GenerationRequest {
        GenerationRequest {
            trend_id: "trend-1".to_string(),
            template_id: template_id.to_string(),
            tone: tone.to_string(),
            custom_prompt: None,
            session_id: None,
        }
    }

    #[test]
    fn template_resolve_known_ids() {
        for template in TemplateId::ALL {
            assert_eq!(TemplateId::resolve(template.as_str()), template);
        }
    }

    #[test]
    fn template_resolve_unknown_defaults_to_youtube_explainer() {
        assert_eq!(
            TemplateId::resolve("unknown-template"),
            TemplateId::YoutubeExplainer
        );
    }

    #[test]
    fn tone_resolve_unknown_defaults_to_professional() {
        assert_eq!(Tone::resolve("sarcastic"), Tone::Professional);
        assert_eq!(Tone::resolve("humorous"), Tone::Humorous);
    }

    #[test]
    fn request_keeps_raw_ids_but_resolves_lookups() {
        let req = request("vlog", "snarky");
        assert_eq!(req.template(), TemplateId::YoutubeExplainer);
        assert_eq!(req.tone_style(), Tone::Professional);
        assert_eq!(req.template_id, "vlog");
    }

    #[test]
    fn session_id_defaults_to_trend_and_template() {
        let req = request("blog-post", "casual");
        assert_eq!(req.resolved_session_id(), "content_gen_trend-1_blog-post");
    }

    #[test]
    fn session_id_prefers_caller_value() {
        let mut req = request("blog-post", "casual");
        req.session_id = Some("sess-42".to_string());
        assert_eq!(req.resolved_session_id(), "sess-42");

        req.session_id = Some("  ".to_string());
        assert_eq!(req.resolved_session_id(), "content_gen_trend-1_blog-post");
    }

    #[test]
    fn blank_custom_prompt_is_ignored() {
        let mut req = request("blog-post", "casual");
        req.custom_prompt = Some(" \n".to_string());
        assert_eq!(req.custom_instructions(), None);

        req.custom_prompt = Some("Mention Rust".to_string());
        assert_eq!(req.custom_instructions(), Some("Mention Rust"));
    }

    #[test]
    fn request_deserializes_without_optional_fields() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"trend_id":"t","template_id":"short-form","tone":"casual"}"#,
        )
        .expect("deserialize");
        assert!(req.custom_prompt.is_none());
        assert!(req.session_id.is_none());
        assert_eq!(req.template(), TemplateId::ShortForm);
    }

    #[test]
    fn document_serializes_mixed_case_keys() {
        let doc = GeneratedContentDocument {
            id: "doc-1".to_string(),
            user_id: "anonymous_user".to_string(),
            session_id: "s".to_string(),
            trend_id: "t".to_string(),
            template_id: "blog-post".to_string(),
            tone: "casual".to_string(),
            custom_prompt: None,
            title: "Title".to_string(),
            hook: "Hook".to_string(),
            outline: vec![ContentSection::default()],
            key_points: vec!["k".to_string()],
            seo_keywords: vec![],
            hashtags: vec![],
            estimated_views: "1K - 5K".to_string(),
            difficulty: "Intermediate".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["keyPoints"][0], "k");
        assert_eq!(json["estimatedViews"], "1K - 5K");
        assert_eq!(json["user_id"], "anonymous_user");
        assert!(doc.is_complete());
    }
}
