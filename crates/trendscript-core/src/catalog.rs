//! Fixed catalogs of content templates and tone options offered to clients.

use serde::Serialize;

use crate::content::{TemplateId, Tone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTemplate {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub structure: &'static [&'static str],
    pub estimated_length: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneOption {
    pub id: Tone,
    pub name: &'static str,
    pub description: &'static str,
}

const CONTENT_TEMPLATES: &[ContentTemplate] = &[
    ContentTemplate {
        id: TemplateId::YoutubeExplainer,
        name: "YouTube Explainer",
        description: "10-15 minute deep dive video",
        structure: &[
            "Hook",
            "Problem Setup",
            "Main Content",
            "Examples",
            "Call to Action",
        ],
        estimated_length: "12-15 minutes",
        icon: "📺",
    },
    ContentTemplate {
        id: TemplateId::BlogPost,
        name: "Blog Post Deep Dive",
        description: "Comprehensive written analysis",
        structure: &[
            "Compelling Headline",
            "Introduction",
            "Main Points",
            "Case Studies",
            "Conclusion",
        ],
        estimated_length: "1500-2000 words",
        icon: "📝",
    },
    ContentTemplate {
        id: TemplateId::SocialThread,
        name: "Social Media Thread",
        description: "Twitter/LinkedIn thread format",
        structure: &[
            "Hook Tweet",
            "Problem Statement",
            "Key Points",
            "Examples",
            "CTA",
        ],
        estimated_length: "8-12 tweets",
        icon: "🧵",
    },
    ContentTemplate {
        id: TemplateId::PodcastGuide,
        name: "Podcast Discussion Guide",
        description: "Structured talking points",
        structure: &[
            "Opening Hook",
            "Key Discussion Points",
            "Questions",
            "Takeaways",
        ],
        estimated_length: "20-30 minutes",
        icon: "🎙️",
    },
    ContentTemplate {
        id: TemplateId::ShortForm,
        name: "Short-Form Video",
        description: "TikTok/Instagram Reels",
        structure: &["Attention Grabber", "Quick Value", "Visual Hook", "CTA"],
        estimated_length: "30-60 seconds",
        icon: "📱",
    },
];

const TONE_OPTIONS: &[ToneOption] = &[
    ToneOption {
        id: Tone::Professional,
        name: "Professional",
        description: "Authoritative and business-focused",
    },
    ToneOption {
        id: Tone::Casual,
        name: "Casual",
        description: "Friendly and conversational",
    },
    ToneOption {
        id: Tone::Humorous,
        name: "Humorous",
        description: "Light-hearted with jokes and wit",
    },
    ToneOption {
        id: Tone::Educational,
        name: "Educational",
        description: "Teaching-focused and informative",
    },
    ToneOption {
        id: Tone::Controversial,
        name: "Controversial",
        description: "Provocative and debate-inducing",
    },
    ToneOption {
        id: Tone::Inspirational,
        name: "Inspirational",
        description: "Motivational and uplifting",
    },
];

#[must_use]
pub fn content_templates() -> &'static [ContentTemplate] {
    CONTENT_TEMPLATES
}

#[must_use]
pub fn tone_options() -> &'static [ToneOption] {
    TONE_OPTIONS
}
