//! Deterministic, model-independent script used when model output is unusable.

use trendscript_core::{ContentSection, TrendRecord};

use crate::interpret::ScriptBody;

const SEO_KEYWORD_COUNT: usize = 4;
const MAX_HASHTAGS: usize = 5;
const SEO_PADDING: [&str; 2] = ["trending", "content"];

fn section(name: &str, duration: &str, content: [String; 3]) -> ContentSection {
    ContentSection {
        section: name.to_string(),
        duration: duration.to_string(),
        content: content.into(),
    }
}

/// Three-part outline: introduction, main content, conclusion.
fn fallback_outline(topic: &str) -> Vec<ContentSection> {
    vec![
        section(
            "Introduction",
            "0:00 - 1:00",
            [
                format!("Introduce the topic: {topic}"),
                "Hook the audience with a compelling opening".to_string(),
                "Preview what they'll learn".to_string(),
            ],
        ),
        section(
            "Main Content",
            "1:00 - 8:00",
            [
                "Deep dive into the topic".to_string(),
                "Provide valuable insights and examples".to_string(),
                "Address common questions and concerns".to_string(),
            ],
        ),
        section(
            "Conclusion & Call to Action",
            "8:00 - 10:00",
            [
                "Summarize key takeaways".to_string(),
                "Provide actionable next steps".to_string(),
                "Encourage engagement and subscriptions".to_string(),
            ],
        ),
    ]
}

/// First four hashtags; with fewer than four, every hashtag followed by the
/// literal padding keywords.
pub(crate) fn fallback_seo_keywords(hashtags: &[String]) -> Vec<String> {
    if hashtags.len() >= SEO_KEYWORD_COUNT {
        return hashtags[..SEO_KEYWORD_COUNT].to_vec();
    }
    hashtags
        .iter()
        .cloned()
        .chain(SEO_PADDING.iter().map(ToString::to_string))
        .collect()
}

#[must_use]
pub fn fallback_title(topic: &str) -> String {
    format!("Content Script: {topic}")
}

#[must_use]
pub fn fallback_hook(topic: &str) -> String {
    format!("Did you know that {topic} is trending right now? Here's what you need to know...")
}

/// Build the fallback script for a trend.
#[must_use]
pub fn fallback_script(trend: &TrendRecord) -> ScriptBody {
    let topic = trend.topic.as_str();
    ScriptBody {
        title: fallback_title(topic),
        hook: fallback_hook(topic),
        outline: fallback_outline(topic),
        key_points: vec![
            format!("{topic} is gaining significant traction"),
            "Understanding this trend can benefit your audience".to_string(),
            "There are specific strategies to leverage this topic".to_string(),
            "Timing is crucial for maximum impact".to_string(),
        ],
        seo_keywords: fallback_seo_keywords(&trend.hashtags),
        hashtags: trend.hashtags.iter().take(MAX_HASHTAGS).cloned().collect(),
        estimated_views: "2K - 8K".to_string(),
        difficulty: "Beginner-friendly".to_string(),
    }
}
