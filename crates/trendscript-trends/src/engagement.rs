//! Synthetic per-platform engagement metrics.

use rand::seq::IndexedRandom;
use rand::Rng;
use trendscript_core::{PlatformEngagement, TrendEngagement};

const TIMEFRAMES: [&str; 9] = [
    "1h ago",
    "2h ago",
    "3h ago",
    "4h ago",
    "6h ago",
    "8h ago",
    "12h ago",
    "1 day ago",
    "2 days ago",
];

const TWITTER_BASE_SENTIMENT: f64 = 0.8;
const MAX_SENTIMENT: f64 = 1.0;
const MAX_TIKTOK_ENGAGEMENT: f64 = 0.2;

/// `base * scale * uniform(low, high)`, truncated to a count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn jittered<R: Rng + ?Sized>(rng: &mut R, base: u64, scale: f64, low: f64, high: f64) -> u64 {
    (base as f64 * scale * rng.random_range(low..high)).max(0.0) as u64
}

/// Metrics for every platform, scaled by `content_score / 100` and jittered.
pub fn generate_engagement<R: Rng + ?Sized>(content_score: u8, rng: &mut R) -> TrendEngagement {
    let scale = f64::from(content_score) / 100.0;

    let twitter = PlatformEngagement {
        mentions: jittered(rng, 45_000, scale, 0.8, 1.2),
        posts: jittered(rng, 12_500, scale, 0.8, 1.2),
        sentiment: (TWITTER_BASE_SENTIMENT * rng.random_range(0.9..1.1)).min(MAX_SENTIMENT),
        ..PlatformEngagement::default()
    };

    let youtube = PlatformEngagement {
        videos: jittered(rng, 234, scale, 0.7, 1.3),
        total_views: jittered(rng, 890_000, scale, 0.8, 1.5),
        avg_views: jittered(rng, 3_800, scale, 0.9, 1.2),
        ..PlatformEngagement::default()
    };

    let reddit = PlatformEngagement {
        posts: jittered(rng, 89, scale, 0.8, 1.3),
        upvotes: jittered(rng, 15_600, scale, 0.7, 1.4),
        comments: jittered(rng, 2_400, scale, 0.8, 1.2),
        ..PlatformEngagement::default()
    };

    let tiktok = PlatformEngagement {
        videos: jittered(rng, 156, scale, 0.8, 1.5),
        total_views: jittered(rng, 456_000, scale, 0.9, 1.6),
        engagement: (0.12 * scale * rng.random_range(0.8..1.3)).min(MAX_TIKTOK_ENGAGEMENT),
        ..PlatformEngagement::default()
    };

    TrendEngagement {
        twitter,
        youtube,
        reddit,
        tiktok,
    }
}

/// A "detected N ago" label.
pub fn random_timeframe<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIMEFRAMES.choose(rng).copied().unwrap_or(TIMEFRAMES[0])
}
