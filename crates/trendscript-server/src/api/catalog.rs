use axum::{Extension, Json};
use serde::Serialize;
use trendscript_core::{content_templates, tone_options, ContentTemplate, ToneOption};

use crate::middleware::RequestId;

use super::ApiResponse;

#[derive(Debug, Serialize)]
pub(super) struct TemplatesData {
    templates: &'static [ContentTemplate],
}

#[derive(Debug, Serialize)]
pub(super) struct TonesData {
    tones: &'static [ToneOption],
}

pub(super) async fn list_content_templates(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<TemplatesData>> {
    Json(ApiResponse::ok(
        req_id.0,
        TemplatesData {
            templates: content_templates(),
        },
        "Content templates retrieved successfully",
    ))
}

pub(super) async fn list_tone_options(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<TonesData>> {
    Json(ApiResponse::ok(
        req_id.0,
        TonesData {
            tones: tone_options(),
        },
        "Tone options retrieved successfully",
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::super::test_support::{get_json, offline_app};

    #[tokio::test]
    async fn lists_five_templates() {
        let (status, json) = get_json(offline_app(), "/api/content-templates").await;
        assert_eq!(status, StatusCode::OK);
        let templates = json["data"]["templates"].as_array().expect("array");
        assert_eq!(templates.len(), 5);
        assert_eq!(templates[0]["id"], "youtube-explainer");
        assert!(templates[0]["estimatedLength"].is_string());
        assert!(templates[0]["structure"].is_array());
    }

    #[tokio::test]
    async fn lists_six_tones() {
        let (status, json) = get_json(offline_app(), "/api/tone-options").await;
        assert_eq!(status, StatusCode::OK);
        let tones = json["data"]["tones"].as_array().expect("array");
        assert_eq!(tones.len(), 6);
        assert_eq!(tones[0]["id"], "professional");
        assert_eq!(tones[0]["name"], "Professional");
    }
}
