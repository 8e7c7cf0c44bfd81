//! Turns raw model output into a [`GeneratedContentDocument`].
//!
//! Model output is located with [`locate_json`], decoded into a draft whose
//! fields all have defaults, and mapped into a document. Anything that cannot
//! be decoded as a JSON object produces the fallback script instead, so
//! [`interpret_response`] never fails.

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use trendscript_core::{ContentSection, GeneratedContentDocument, GenerationRequest, TrendRecord};
use uuid::Uuid;

use crate::fallback::fallback_script;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Where, if anywhere, a JSON object sits in the model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonCandidate<'a> {
    /// Interior of a ```` ```json ```` fenced block.
    Fenced(&'a str),
    /// The whole trimmed output starts with `{`.
    Bare(&'a str),
    None,
}

/// Classify trimmed model output.
///
/// A fenced block wins over a bare object. An unterminated fence runs to the
/// end of the text.
#[must_use]
pub fn locate_json(raw: &str) -> JsonCandidate<'_> {
    let text = raw.trim();
    if let Some(open) = text.find(FENCE_OPEN) {
        let body = &text[open + FENCE_OPEN.len()..];
        let end = body.find(FENCE_CLOSE).unwrap_or(body.len());
        return JsonCandidate::Fenced(body[..end].trim());
    }
    if text.starts_with('{') {
        return JsonCandidate::Bare(text);
    }
    JsonCandidate::None
}

/// Why the fallback script was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NoJson,
    InvalidJson(String),
    NotAnObject,
    Timeout,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NoJson => write!(f, "no JSON structure found in model output"),
            FallbackReason::InvalidJson(e) => write!(f, "invalid JSON in model output: {e}"),
            FallbackReason::NotAnObject => write!(f, "model output JSON is not an object"),
            FallbackReason::Timeout => write!(f, "generation call timed out"),
        }
    }
}

/// Result of interpreting model output.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(GeneratedContentDocument),
    Fallback {
        document: GeneratedContentDocument,
        reason: FallbackReason,
    },
}

impl Interpretation {
    #[must_use]
    pub fn document(&self) -> &GeneratedContentDocument {
        match self {
            Interpretation::Parsed(document) | Interpretation::Fallback { document, .. } => {
                document
            }
        }
    }

    #[must_use]
    pub fn into_document(self) -> GeneratedContentDocument {
        match self {
            Interpretation::Parsed(document) | Interpretation::Fallback { document, .. } => {
                document
            }
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Interpretation::Fallback { .. })
    }
}

/// The generated part of a document, without bookkeeping ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBody {
    pub title: String,
    pub hook: String,
    pub outline: Vec<ContentSection>,
    pub key_points: Vec<String>,
    pub seo_keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub estimated_views: String,
    pub difficulty: String,
}

fn default_title() -> String {
    "Generated Content".to_string()
}

fn default_estimated_views() -> String {
    "1K - 5K".to_string()
}

fn default_difficulty() -> String {
    "Intermediate".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptDraft {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    hook: String,
    #[serde(default)]
    outline: Vec<SectionDraft>,
    #[serde(default)]
    key_points: Vec<String>,
    #[serde(default)]
    seo_keywords: Vec<String>,
    #[serde(default)]
    hashtags: Vec<String>,
    #[serde(default = "default_estimated_views")]
    estimated_views: String,
    #[serde(default = "default_difficulty")]
    difficulty: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectionDraft {
    section: String,
    duration: String,
    content: Vec<String>,
}

impl From<ScriptDraft> for ScriptBody {
    fn from(draft: ScriptDraft) -> Self {
        Self {
            title: draft.title,
            hook: draft.hook,
            outline: draft
                .outline
                .into_iter()
                .map(|s| ContentSection {
                    section: s.section,
                    duration: s.duration,
                    content: s.content,
                })
                .collect(),
            key_points: draft.key_points,
            seo_keywords: draft.seo_keywords,
            hashtags: draft.hashtags,
            estimated_views: draft.estimated_views,
            difficulty: draft.difficulty,
        }
    }
}

/// Decode a located candidate into a JSON object map.
pub(crate) fn decode_object(
    candidate: JsonCandidate<'_>,
) -> Result<serde_json::Map<String, Value>, FallbackReason> {
    let text = match candidate {
        JsonCandidate::Fenced(text) | JsonCandidate::Bare(text) => text,
        JsonCandidate::None => return Err(FallbackReason::NoJson),
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FallbackReason::NotAnObject),
        Err(e) => Err(FallbackReason::InvalidJson(e.to_string())),
    }
}

/// Decode model output into a script. Missing fields take their defaults;
/// fields of the wrong type reject the whole object.
fn decode_script(raw: &str) -> Result<ScriptBody, FallbackReason> {
    let map = decode_object(locate_json(raw))?;
    serde_json::from_value::<ScriptDraft>(Value::Object(map))
        .map(ScriptBody::from)
        .map_err(|e| FallbackReason::InvalidJson(e.to_string()))
}

/// Fill an empty title, hook or outline from the fallback script.
fn complete_from_fallback(mut body: ScriptBody, trend: &TrendRecord) -> ScriptBody {
    if !body.title.trim().is_empty() && !body.hook.trim().is_empty() && !body.outline.is_empty()
    {
        return body;
    }
    let fallback = fallback_script(trend);
    if body.title.trim().is_empty() {
        body.title = fallback.title;
    }
    if body.hook.trim().is_empty() {
        body.hook = fallback.hook;
    }
    if body.outline.is_empty() {
        body.outline = fallback.outline;
    }
    tracing::debug!(trend_id = %trend.id, "completed partial model output from fallback script");
    body
}

/// Identity of a generation call, stamped onto every document it produces.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    pub trend: &'a TrendRecord,
    pub request: &'a GenerationRequest,
    pub user_id: &'a str,
    pub session_id: &'a str,
}

impl DocumentContext<'_> {
    /// Stamp a script with a fresh id and timestamp.
    #[must_use]
    pub fn document(&self, body: ScriptBody) -> GeneratedContentDocument {
        GeneratedContentDocument {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id.to_string(),
            session_id: self.session_id.to_string(),
            trend_id: self.trend.id.clone(),
            template_id: self.request.template_id.clone(),
            tone: self.request.tone.clone(),
            custom_prompt: self.request.custom_prompt.clone(),
            title: body.title,
            hook: body.hook,
            outline: body.outline,
            key_points: body.key_points,
            seo_keywords: body.seo_keywords,
            hashtags: body.hashtags,
            estimated_views: body.estimated_views,
            difficulty: body.difficulty,
            created_at: Utc::now(),
        }
    }

    /// Build the fallback document for this call.
    #[must_use]
    pub fn fallback(&self, reason: FallbackReason) -> Interpretation {
        tracing::warn!(
            trend_id = %self.trend.id,
            session_id = self.session_id,
            reason = %reason,
            "using fallback content script"
        );
        Interpretation::Fallback {
            document: self.document(fallback_script(self.trend)),
            reason,
        }
    }
}

/// Interpret raw model output for one generation call.
#[must_use]
pub fn interpret_response(
    raw: &str,
    trend: &TrendRecord,
    request: &GenerationRequest,
    user_id: &str,
    session_id: &str,
) -> Interpretation {
    let ctx = DocumentContext {
        trend,
        request,
        user_id,
        session_id,
    };
    match decode_script(raw) {
        Ok(body) => Interpretation::Parsed(ctx.document(complete_from_fallback(body, trend))),
        Err(reason) => ctx.fallback(reason),
    }
}
