//! Hashtag derivation for a topic.

const MAX_HASHTAGS: usize = 5;

/// Keyword groups: any trigger appearing in the lowercased topic adds the tags.
const KEYWORD_TAGS: &[(&[&str], [&str; 3])] = &[
    (
        &["ai", "artificial intelligence"],
        ["#AI", "#ArtificialIntelligence", "#MachineLearning"],
    ),
    (
        &["business", "startup", "saas"],
        ["#Business", "#Startup", "#Entrepreneurship"],
    ),
    (
        &["tech", "code", "programming"],
        ["#Tech", "#Programming", "#Development"],
    ),
    (
        &["health", "wellness"],
        ["#Health", "#Wellness", "#MentalHealth"],
    ),
    (
        &["remote", "work"],
        ["#RemoteWork", "#Productivity", "#WorkFromHome"],
    ),
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Words longer than three characters become `#Word`, followed by keyword
/// groups. Duplicates are dropped keeping first occurrence; at most five.
#[must_use]
pub fn generate_hashtags(topic: &str) -> Vec<String> {
    let lower = topic.to_lowercase();

    let word_tags = lower
        .replace('-', " ")
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(|word| format!("#{}", capitalize(word)))
        .collect::<Vec<_>>();

    let keyword_tags = KEYWORD_TAGS
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
        .flat_map(|(_, tags)| tags.iter().map(ToString::to_string));

    let mut hashtags: Vec<String> = Vec::with_capacity(MAX_HASHTAGS);
    for tag in word_tags.into_iter().chain(keyword_tags) {
        if hashtags.len() == MAX_HASHTAGS {
            break;
        }
        if !hashtags.contains(&tag) {
            hashtags.push(tag);
        }
    }
    hashtags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_skipped_and_hyphens_split() {
        assert_eq!(
            generate_hashtags("AI-Powered Code Reviews"),
            vec!["#Powered", "#Code", "#Reviews", "#AI", "#ArtificialIntelligence"]
        );
    }

    #[test]
    fn keyword_groups_follow_topic_words() {
        assert_eq!(
            generate_hashtags("Micro-SaaS"),
            vec!["#Micro", "#Saas", "#Business", "#Startup", "#Entrepreneurship"]
        );
    }

    #[test]
    fn duplicates_are_removed() {
        let tags = generate_hashtags("Health health wellness");
        assert_eq!(tags, vec!["#Health", "#Wellness", "#MentalHealth"]);
    }

    #[test]
    fn never_more_than_five() {
        for topic in [
            "Remote Work Productivity Hacks",
            "Mental Health in Tech Industry",
            "Sustainable Fashion Trends 2025",
        ] {
            assert!(generate_hashtags(topic).len() <= 5, "{topic}");
        }
    }

    #[test]
    fn topic_without_long_words_or_keywords_has_no_tags() {
        assert!(generate_hashtags("Cat pic").is_empty());
    }
}
